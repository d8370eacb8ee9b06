#![forbid(unsafe_code)]

//! Stateful layer of the wheelpick duration picker.
//!
//! # Role in wheelpick
//! `wheelpick-widgets` owns everything that has memory: the per-wheel
//! controller that tracks the live value and keeps the scroll position
//! inside its limits, the hours+minutes picker composition, and the
//! confirm/cancel selection state behind a modal dialog. The numeric
//! transforms themselves live in `wheelpick-core`; this crate decides
//! when to run them and what to do with the answers.
//!
//! # This crate provides
//! - [`Wheel`] — the controller for one scrollable wheel: scroll-progress
//!   and scroll-settle processing, clamp-and-snap corrections, infinite
//!   scroll re-centering, and an imperative reset/set-value surface.
//! - [`DurationPicker`] — the two-wheel hours/minutes composition with
//!   minute-step snapping and safe initial values.
//! - [`ModalState`] — selected-vs-confirmed value state for a
//!   confirm/cancel dialog.
//! - [`PickerColors`] and [`Rgba`] — explicit color configuration and the
//!   gradient-overlay color math.
//!
//! # How it fits in the system
//! The host view delivers a strictly ordered stream of scroll events for
//! each wheel and receives [`ScrollTo`] commands in return. The controller
//! never moves the list itself; non-animated commands must be applied in
//! the same event-processing step that produced them, before the next
//! paint, so corrections are invisible.

/// Selected-vs-confirmed value state behind a modal dialog.
pub mod modal;
/// The hours+minutes duration picker composition.
pub mod picker;
/// Color configuration and gradient overlay math.
pub mod theme;
/// The stateful controller for one scrollable wheel.
pub mod wheel;

pub use modal::{ModalConfig, ModalState};
pub use picker::{DurationPicker, DurationPickerConfig, InitialTime, TimeValue};
pub use theme::{
    ITEM_HEIGHT, PickerColorOverrides, PickerColors, Rgba, gradient_colors, gradient_locations,
};
pub use wheel::{ScrollTo, Settle, Wheel, WheelConfig};

// The limit types appear directly in `WheelConfig`.
pub use wheelpick_core::{Limit, LimitRequest};
