#![forbid(unsafe_code)]

//! Pure value/offset transforms for a scrollable duration wheel.
//!
//! # Role in wheelpick
//! `wheelpick-core` is the numeric heart of the wheel picker: it maps a
//! discrete value domain onto a rendered list of display tokens and
//! translates continuous scroll offsets back into domain values. Every
//! function here is pure and synchronous — no I/O, no shared state — so the
//! stateful controller in `wheelpick-widgets` can call it from any thread
//! without locking.
//!
//! # This crate provides
//! - [`pad_number`] for fixed-width display tokens.
//! - [`ValueDomain`] for the stepped `[0, maximum_value]` domain.
//! - [`generate`] and [`repeat_count`] for the display sequence.
//! - [`LimitRequest`] / [`Limit`] for bounded wheels.
//! - [`WheelGeometry`] for the value ⇄ index/offset mapping.
//!
//! # How it fits in the system
//! `wheelpick-widgets` derives a wheel's sequence, limit, and geometry from
//! these types once per configuration change, then re-runs the offset
//! mapping on every scroll event. Nothing in this crate ever observes the
//! live scroll position; it only answers questions about it.

/// The discrete value domain selectable on a wheel.
pub mod domain;
/// Fixed-width display token formatting.
pub mod format;
/// Validation of caller-supplied min/max limits.
pub mod limit;
/// Bidirectional value ⇄ scroll-position mapping.
pub mod position;
/// Display sequence generation and the repeat-count policy.
pub mod sequence;

pub use domain::ValueDomain;
pub use format::pad_number;
pub use limit::{Limit, LimitRequest, resolve_limit};
pub use position::{OffsetSample, WheelGeometry};
pub use sequence::{generate, repeat_count};
