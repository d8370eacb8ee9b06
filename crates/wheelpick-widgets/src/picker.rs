#![forbid(unsafe_code)]

//! The hours+minutes duration picker composition.
//!
//! Thin glue over two [`Wheel`]s: it forwards a selected [`TimeValue`]
//! pair and keeps the minute value consistent with a configurable step
//! size. All scrolling intelligence stays in the wheels; this module only
//! decides which two wheels exist and what pair is currently selected.

use crate::theme::PickerColors;
use crate::wheel::{ScrollTo, Settle, Wheel, WheelConfig};

/// An hours/minutes pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct TimeValue {
    /// Hours component, 0–23.
    pub hours: i64,
    /// Minutes component, 0–59.
    pub minutes: i64,
}

impl TimeValue {
    /// Create a time value from its components.
    #[must_use]
    pub fn new(hours: i64, minutes: i64) -> Self {
        Self { hours, minutes }
    }
}

/// A possibly incomplete initial time supplied by the caller.
///
/// Each missing component falls back to 0; there is no error path for a
/// partial or absent initial value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct InitialTime {
    /// Initial hours, if provided.
    pub hours: Option<i64>,
    /// Initial minutes, if provided.
    pub minutes: Option<i64>,
}

impl InitialTime {
    /// Resolve missing components to 0.
    #[must_use]
    pub fn safe(self) -> TimeValue {
        TimeValue {
            hours: self.hours.unwrap_or(0),
            minutes: self.minutes.unwrap_or(0),
        }
    }
}

impl From<TimeValue> for InitialTime {
    fn from(value: TimeValue) -> Self {
        Self {
            hours: Some(value.hours),
            minutes: Some(value.minutes),
        }
    }
}

/// Configuration for a [`DurationPicker`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct DurationPickerConfig {
    /// Initial hours/minutes; missing components default to 0.
    pub initial: InitialTime,
    /// Step between adjacent minute values (default: 1).
    pub minute_step: i64,
    /// Resolved colors handed through to the host for styling.
    pub colors: PickerColors,
    /// Whether both wheels ignore user interaction (default: false).
    pub disabled: bool,
}

impl Default for DurationPickerConfig {
    fn default() -> Self {
        Self {
            initial: InitialTime::default(),
            minute_step: 1,
            colors: PickerColors::default(),
            disabled: false,
        }
    }
}

impl DurationPickerConfig {
    /// Set the initial time.
    #[must_use]
    pub fn initial(mut self, initial: InitialTime) -> Self {
        self.initial = initial;
        self
    }

    /// Set the minute step.
    #[must_use]
    pub fn minute_step(mut self, minute_step: i64) -> Self {
        self.minute_step = minute_step;
        self
    }

    /// Set the resolved colors.
    #[must_use]
    pub fn colors(mut self, colors: PickerColors) -> Self {
        self.colors = colors;
        self
    }

    /// Make both wheels ignore user interaction.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Nearest minute on the step grid; the earlier candidate wins ties.
fn snap_minute(minute: i64, step: i64) -> i64 {
    let mut best = 0;
    let mut candidate = step;
    while candidate <= 59 {
        if (candidate - minute).abs() < (best - minute).abs() {
            best = candidate;
        }
        candidate += step;
    }
    best
}

/// The two-wheel hours/minutes picker.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationPicker {
    hours: Wheel,
    minutes: Wheel,
    selected: TimeValue,
    initial: TimeValue,
    minute_step: i64,
    colors: PickerColors,
}

impl DurationPicker {
    /// Build the picker and both wheels from a configuration.
    #[must_use]
    pub fn new(config: DurationPickerConfig) -> Self {
        let safe = config.initial.safe();
        let minute_step = config.minute_step.max(1);
        let initial = TimeValue {
            hours: safe.hours,
            minutes: snap_minute(safe.minutes, minute_step),
        };

        let hours = Wheel::new(
            WheelConfig::new(23)
                .initial_value(initial.hours)
                .pad_with_zero(true)
                .disabled(config.disabled),
        );
        let minutes = Wheel::new(
            WheelConfig::new(59)
                .interval(minute_step)
                .initial_value(initial.minutes)
                .pad_with_zero(true)
                .disabled(config.disabled),
        );

        Self {
            hours,
            minutes,
            selected: initial,
            initial,
            minute_step,
            colors: config.colors,
        }
    }

    /// The currently selected pair.
    #[must_use]
    pub fn time(&self) -> TimeValue {
        self.selected
    }

    /// The minute step both the wheel domain and snapping use.
    #[must_use]
    pub fn minute_step(&self) -> i64 {
        self.minute_step
    }

    /// The resolved colors for the host to style with.
    #[must_use]
    pub fn colors(&self) -> &PickerColors {
        &self.colors
    }

    /// Read access to the hours wheel (items, snap offsets, re-centering).
    #[must_use]
    pub fn hours_wheel(&self) -> &Wheel {
        &self.hours
    }

    /// Read access to the minutes wheel.
    #[must_use]
    pub fn minutes_wheel(&self) -> &Wheel {
        &self.minutes
    }

    /// Forward a scroll-progress event to the hours wheel.
    pub fn hours_progress(&mut self, offset_px: f32) -> i64 {
        self.hours.scroll_progress(offset_px)
    }

    /// Forward a scroll-progress event to the minutes wheel.
    pub fn minutes_progress(&mut self, offset_px: f32) -> i64 {
        self.minutes.scroll_progress(offset_px)
    }

    /// Settle the hours wheel and take its committed value.
    pub fn hours_settled(&mut self, offset_px: f32) -> Settle {
        let settle = self.hours.scroll_settled(offset_px);
        self.selected.hours = settle.value;
        settle
    }

    /// Settle the minutes wheel and take its committed value.
    pub fn minutes_settled(&mut self, offset_px: f32) -> Settle {
        let settle = self.minutes.scroll_settled(offset_px);
        self.selected.minutes = settle.value;
        settle
    }

    /// Jump both wheels back to the initial time.
    pub fn reset(&mut self, animated: bool) -> (ScrollTo, ScrollTo) {
        self.selected = self.initial;
        (self.hours.reset(animated), self.minutes.reset(animated))
    }

    /// Jump both wheels to a new time, snapping minutes onto the step grid.
    pub fn set_time(&mut self, time: TimeValue, animated: bool) -> (ScrollTo, ScrollTo) {
        let snapped = TimeValue {
            hours: time.hours,
            minutes: snap_minute(time.minutes, self.minute_step),
        };
        self.selected = snapped;
        (
            self.hours.set_value(snapped.hours, animated),
            self.minutes.set_value(snapped.minutes, animated),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_initial_components_default_to_zero() {
        let safe = InitialTime {
            hours: None,
            minutes: Some(30),
        }
        .safe();
        assert_eq!(safe, TimeValue::new(0, 30));
        assert_eq!(InitialTime::default().safe(), TimeValue::new(0, 0));
    }

    #[test]
    fn minutes_snap_to_the_nearest_step() {
        assert_eq!(snap_minute(50, 15), 45);
        assert_eq!(snap_minute(25, 7), 28);
        assert_eq!(snap_minute(0, 5), 0);
        assert_eq!(snap_minute(59, 10), 59 - 9);
        // Equidistant candidates keep the earlier one.
        assert_eq!(snap_minute(1, 2), 0);
    }

    #[test]
    fn already_valid_minutes_are_untouched() {
        for step in [1, 5, 15] {
            for minute in (0..60).step_by(step as usize) {
                assert_eq!(snap_minute(minute, step), minute);
            }
        }
    }

    #[test]
    fn wheels_are_shaped_by_the_minute_step() {
        let picker = DurationPicker::new(DurationPickerConfig::default().minute_step(5));
        assert_eq!(picker.hours_wheel().items().len(), 24 * 8);
        // 12 minute items repeated 15 times.
        assert_eq!(picker.minutes_wheel().items().len(), 12 * 15);
    }

    #[test]
    fn initial_minutes_snap_onto_the_step_grid() {
        let config = DurationPickerConfig::default()
            .initial(InitialTime::from(TimeValue::new(9, 50)))
            .minute_step(15);
        let picker = DurationPicker::new(config);
        assert_eq!(picker.time(), TimeValue::new(9, 45));
    }

    #[test]
    fn settling_either_wheel_updates_the_pair() {
        let mut picker = DurationPicker::new(DurationPickerConfig::default());
        // Circular hours wheel: index 103 + pad 1 reads hour 8.
        let settle = picker.hours_settled(103.0 * 50.0);
        assert_eq!(settle.value, 8);
        assert_eq!(settle.correction, None);

        let settle = picker.minutes_settled(126.0 * 50.0);
        assert_eq!(settle.value, 7);
        assert_eq!(picker.time(), TimeValue::new(8, 7));
    }

    #[test]
    fn set_time_snaps_and_moves_both_wheels() {
        let mut picker = DurationPicker::new(DurationPickerConfig::default().minute_step(10));
        let (hours_jump, minutes_jump) = picker.set_time(TimeValue::new(22, 34), false);
        assert_eq!(picker.time(), TimeValue::new(22, 30));
        assert!(!hours_jump.animated);
        assert!(!minutes_jump.animated);
        assert_eq!(hours_jump.index, 96 + 22 - 1);
        // 6 minute items repeat 30 times; middle block starts at 6 * 15.
        assert_eq!(minutes_jump.index, 6 * 15 + 3 - 1);
    }

    #[test]
    fn reset_restores_the_initial_pair() {
        let config =
            DurationPickerConfig::default().initial(InitialTime::from(TimeValue::new(6, 20)));
        let mut picker = DurationPicker::new(config);
        picker.hours_settled(0.0);
        assert_ne!(picker.time().hours, 6);

        let (hours_jump, _) = picker.reset(true);
        assert_eq!(picker.time(), TimeValue::new(6, 20));
        assert_eq!(hours_jump.index, picker.hours_wheel().initial_index());
        assert!(hours_jump.animated);
    }
}
