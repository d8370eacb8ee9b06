#![forbid(unsafe_code)]

//! Selected-vs-confirmed value state behind a modal dialog.
//!
//! The picker inside a modal edits a *selection*; only the confirm button
//! promotes it to the *confirmed* value the caller sees. Dismissing the
//! dialog by any other route reverts the selection, so reopening shows
//! what was last confirmed. Show/hide transitions are the host's concern:
//! this state machine only answers what the values are and whether the
//! dialog should be visible.
//!
//! # Invariants
//!
//! 1. `confirmed` changes only in [`ModalState::confirm`] and
//!    [`ModalState::set_initial`].
//! 2. After [`ModalState::cancel`] or a closing overlay press,
//!    `selected == confirmed`.
//! 3. Visibility changes never alter either value by themselves.

use crate::picker::{InitialTime, TimeValue};

/// Configuration for the modal selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct ModalConfig {
    /// Whether tapping the backdrop dismisses the dialog (default: true).
    pub close_on_overlay_press: bool,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            close_on_overlay_press: true,
        }
    }
}

/// The modal's value and visibility state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct ModalState {
    visible: bool,
    selected: TimeValue,
    confirmed: TimeValue,
    close_on_overlay_press: bool,
}

impl ModalState {
    /// Create hidden modal state around an initial time.
    #[must_use]
    pub fn new(initial: InitialTime, config: ModalConfig) -> Self {
        let safe = initial.safe();
        Self {
            visible: false,
            selected: safe,
            confirmed: safe,
            close_on_overlay_press: config.close_on_overlay_press,
        }
    }

    /// Show the dialog.
    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Whether the dialog should currently be shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The live selection being edited in the dialog.
    #[must_use]
    pub fn selected(&self) -> TimeValue {
        self.selected
    }

    /// The last value committed via [`ModalState::confirm`].
    #[must_use]
    pub fn confirmed(&self) -> TimeValue {
        self.confirmed
    }

    /// Record a change to the live selection.
    pub fn selection_changed(&mut self, time: TimeValue) {
        self.selected = time;
    }

    /// Commit the selection, hide the dialog, and return the new
    /// confirmed value for the caller's confirm handler.
    pub fn confirm(&mut self) -> TimeValue {
        self.confirmed = self.selected;
        self.visible = false;
        self.confirmed
    }

    /// Dismiss the dialog, reverting the selection to the confirmed value.
    pub fn cancel(&mut self) {
        self.visible = false;
        self.selected = self.confirmed;
    }

    /// Handle a tap on the backdrop. Returns whether the dialog closed.
    pub fn overlay_pressed(&mut self) -> bool {
        if !self.close_on_overlay_press {
            return false;
        }
        self.cancel();
        true
    }

    /// Replace the initial value, resetting both selection and confirmed.
    pub fn set_initial(&mut self, initial: InitialTime) {
        let safe = initial.safe();
        self.selected = safe;
        self.confirmed = safe;
    }
}
