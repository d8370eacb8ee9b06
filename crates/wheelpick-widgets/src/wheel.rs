#![forbid(unsafe_code)]

//! The stateful controller for one scrollable wheel.
//!
//! [`Wheel`] sits between the pure transforms in `wheelpick-core` and a
//! host list view. The host delivers a strictly ordered stream of scroll
//! events; the controller answers with the current value and, when the
//! wheel has drifted out of range or too close to a repetition boundary,
//! an imperative [`ScrollTo`] command. The controller never moves the list
//! itself.
//!
//! # State Machine
//!
//! Three event kinds drive the controller:
//!
//! - **Scroll progress**: the gesture is still moving. The candidate value
//!   is clamped to the wheel's limit and tracked, but the list is left
//!   alone — the user sees they have hit a wall without the gesture being
//!   fought.
//! - **Scroll settle**: momentum has decayed. An out-of-range value is
//!   committed at the nearest bound and an animated corrective scroll is
//!   issued, so the resting position always lines up with an in-range
//!   value.
//! - **Visible item changed**: used only by circular wheels. When the
//!   visible index nears either end of the repeated list, a non-animated
//!   jump of exactly one domain block keeps the window in the middle,
//!   preserving the illusion of infinite scroll.
//!
//! # Invariants
//!
//! 1. After any scroll event, the tracked value lies within the effective
//!    limit.
//! 2. `scroll_settled` always commits a value inside the limit, and its
//!    correction target is a valid index into the display sequence.
//! 3. Re-centering commands are never animated; limit snaps always are.
//! 4. Bounded wheels and single-item domains never re-center.
//! 5. Corrections are idempotent recomputations from the offset given; a
//!    later event supersedes the correction from an earlier one.
//!
//! # Failure Modes
//!
//! - An initial value outside the limit is not rejected; the first scroll
//!   event clamps it.
//! - A settle so far past the limit that the shifted target would leave
//!   the list falls back to a fixed index near the violated bound.
//! - Non-animated commands must be applied by the host in the same
//!   event-processing step that produced them, before the next paint;
//!   otherwise the jump is visible as a flash.

use wheelpick_core::{
    Limit, LimitRequest, ValueDomain, WheelGeometry, generate, repeat_count, resolve_limit,
};

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

use crate::theme::ITEM_HEIGHT;

/// Configuration for one wheel.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct WheelConfig {
    /// Value the wheel starts on (default: 0).
    pub initial_value: i64,
    /// Step between adjacent selectable values (default: 1).
    pub interval: i64,
    /// Inclusive upper bound of the value domain.
    pub maximum_value: i64,
    /// Empty pad tokens on each side of a non-repeating wheel (default: 1).
    pub pad_with_n_items: usize,
    /// Whether the wheel wraps around (default: true).
    pub circular: bool,
    /// Zero-pad single-digit tokens instead of space-padding (default: false).
    pub pad_with_zero: bool,
    /// Optional restriction to a sub-range of the domain.
    pub limit: Option<LimitRequest>,
    /// Pixel height of one item row (default: [`ITEM_HEIGHT`]).
    pub item_height: f32,
    /// Whether the wheel ignores user interaction (default: false).
    pub disabled: bool,
}

impl WheelConfig {
    /// Create a configuration for a wheel over `[0, maximum_value]`.
    #[must_use]
    pub fn new(maximum_value: i64) -> Self {
        Self {
            initial_value: 0,
            interval: 1,
            maximum_value,
            pad_with_n_items: 1,
            circular: true,
            pad_with_zero: false,
            limit: None,
            item_height: ITEM_HEIGHT,
            disabled: false,
        }
    }

    /// Set the value the wheel starts on.
    #[must_use]
    pub fn initial_value(mut self, value: i64) -> Self {
        self.initial_value = value;
        self
    }

    /// Set the step between adjacent values.
    #[must_use]
    pub fn interval(mut self, interval: i64) -> Self {
        self.interval = interval;
        self
    }

    /// Set the pad token count for non-repeating wheels.
    #[must_use]
    pub fn pad_with_n_items(mut self, count: usize) -> Self {
        self.pad_with_n_items = count;
        self
    }

    /// Enable or disable circular (infinite) scrolling.
    #[must_use]
    pub fn circular(mut self, circular: bool) -> Self {
        self.circular = circular;
        self
    }

    /// Zero-pad single-digit tokens.
    #[must_use]
    pub fn pad_with_zero(mut self, pad_with_zero: bool) -> Self {
        self.pad_with_zero = pad_with_zero;
        self
    }

    /// Restrict the wheel to a sub-range of its domain.
    #[must_use]
    pub fn limit(mut self, limit: LimitRequest) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the pixel height of one item row.
    #[must_use]
    pub fn item_height(mut self, item_height: f32) -> Self {
        self.item_height = item_height;
        self
    }

    /// Make the wheel ignore user interaction.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// An imperative scroll command for the host list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTo {
    /// Target index in the display sequence.
    pub index: usize,
    /// Animated commands are limit snaps; re-centering jumps are not.
    pub animated: bool,
}

/// Outcome of a scroll-settle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settle {
    /// The committed value, always within the wheel's limit.
    pub value: i64,
    /// Corrective scroll to run when the settled position was out of range.
    pub correction: Option<ScrollTo>,
}

/// The controller for one scrollable wheel.
///
/// Derives the display sequence, effective limit, and position geometry
/// from its [`WheelConfig`] once, then processes scroll events against
/// them. Also the capability handle for the wheel: [`Wheel::reset`],
/// [`Wheel::set_value`], and [`Wheel::value`] give the embedding picker
/// imperative control and a readable current value.
#[derive(Debug, Clone, PartialEq)]
pub struct Wheel {
    config: WheelConfig,
    geometry: WheelGeometry,
    items: Vec<String>,
    limit: Limit,
    initial_index: usize,
    tracked_value: i64,
}

impl Wheel {
    /// Build a wheel from its configuration.
    #[must_use]
    pub fn new(config: WheelConfig) -> Self {
        let domain = ValueDomain::new(config.interval, config.maximum_value);
        let number_of_items = domain.number_of_items();
        let repeat_count = repeat_count(number_of_items, config.circular);
        let items = generate(
            number_of_items,
            config.interval,
            config.pad_with_zero,
            repeat_count,
            config.circular,
            config.pad_with_n_items,
        );
        let limit = resolve_limit(config.limit, number_of_items, config.interval);
        let geometry = WheelGeometry {
            interval: config.interval,
            number_of_items,
            pad_with_n_items: config.pad_with_n_items,
            repeat_count,
            circular: config.circular,
        };
        let initial_index = geometry.initial_index(config.initial_value);
        let tracked_value = config.initial_value;
        Self {
            config,
            geometry,
            items,
            limit,
            initial_index,
            tracked_value,
        }
    }

    /// The display tokens the host should render, in order.
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// The index the host should scroll to before first paint.
    #[must_use]
    pub fn initial_index(&self) -> usize {
        self.initial_index
    }

    /// The effective limit this wheel enforces.
    #[must_use]
    pub fn limit(&self) -> Limit {
        self.limit
    }

    /// The current tracked value.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.tracked_value
    }

    /// The configuration this wheel was built from.
    #[must_use]
    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    /// Whether the wheel ignores user interaction.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    /// Process a scroll-progress event and return the tracked value.
    ///
    /// The offset resolves to a candidate value; if it differs from the
    /// tracked value it is clamped to the limit and tracked. The list is
    /// never moved here.
    pub fn scroll_progress(&mut self, offset_px: f32) -> i64 {
        let sample = self
            .geometry
            .value_at_offset(offset_px, self.config.item_height);
        if sample.value != self.tracked_value {
            let clamped = self.limit.clamp(sample.value);
            #[cfg(feature = "tracing")]
            if clamped != sample.value {
                trace!(value = sample.value, clamped, "scroll progress hit limit");
            }
            self.tracked_value = clamped;
        }
        self.tracked_value
    }

    /// Process a scroll-settle event.
    ///
    /// Commits the settled value, clamped into the limit. When the raw
    /// value was out of range, the returned correction shifts the list by
    /// exactly the overshoot so the resting position lines up with the
    /// committed bound; targets that would leave the list fall back to a
    /// fixed index near the violated bound.
    pub fn scroll_settled(&mut self, offset_px: f32) -> Settle {
        let sample = self
            .geometry
            .value_at_offset(offset_px, self.config.item_height);
        let index = sample.index as i64;
        let mut value = sample.value;
        let mut correction = None;

        if value > self.limit.max {
            let target = index - (value - self.limit.max);
            let corrected = if target >= 0 {
                target as usize
            } else {
                (self.limit.max - 1).max(0) as usize
            };
            correction = Some(ScrollTo {
                index: corrected,
                animated: true,
            });
            value = self.limit.max;
        } else if value < self.limit.min {
            let target = index + (self.limit.min - value);
            let last = self.items.len().saturating_sub(1) as i64;
            let corrected = if target <= last {
                target as usize
            } else {
                self.limit.min as usize
            };
            correction = Some(ScrollTo {
                index: corrected,
                animated: true,
            });
            value = self.limit.min;
        }

        #[cfg(feature = "tracing")]
        if let Some(snap) = correction {
            debug!(committed = value, target = snap.index, "limit snap at settle");
        }

        self.tracked_value = value;
        Settle { value, correction }
    }

    /// Process a visible-item notification.
    ///
    /// Circular wheels only: when the visible index is within half a
    /// domain block of either end of the repeated list, returns a
    /// non-animated jump of exactly one block toward the middle. The host
    /// must apply it before the next paint.
    #[must_use]
    pub fn visible_item_changed(&self, index: usize) -> Option<ScrollTo> {
        let n = self.geometry.number_of_items;
        if !self.config.circular || n <= 1 {
            return None;
        }
        let index = index as i64;
        if 2 * index < n {
            let jump = ScrollTo {
                index: (index + n) as usize,
                animated: false,
            };
            #[cfg(feature = "tracing")]
            trace!(from = index, to = jump.index, "re-centering forward");
            return Some(jump);
        }
        if 2 * index >= n * (2 * self.geometry.repeat_count - 1) {
            let jump = ScrollTo {
                index: (index - n) as usize,
                animated: false,
            };
            #[cfg(feature = "tracing")]
            trace!(from = index, to = jump.index, "re-centering backward");
            return Some(jump);
        }
        None
    }

    /// Jump back to the initial value.
    pub fn reset(&mut self, animated: bool) -> ScrollTo {
        self.tracked_value = self.config.initial_value;
        ScrollTo {
            index: self.initial_index,
            animated,
        }
    }

    /// Jump to a new value, recomputing its index.
    pub fn set_value(&mut self, value: i64, animated: bool) -> ScrollTo {
        self.tracked_value = value;
        ScrollTo {
            index: self.geometry.initial_index(value),
            animated,
        }
    }

    /// One snap stop per item row, for hosts that snap by offset.
    #[must_use]
    pub fn snap_offsets(&self) -> Vec<f32> {
        (0..self.items.len())
            .map(|i| i as f32 * self.config.item_height)
            .collect()
    }

    /// Pixel height of the visible window: the selected row plus the pad
    /// rows above and below it.
    #[must_use]
    pub fn viewport_height(&self) -> f32 {
        self.config.item_height * (1 + 2 * self.config.pad_with_n_items) as f32
    }

    /// Whether the item at `index` should render as disabled because its
    /// value lies outside the limit. Pad tokens are never disabled.
    #[must_use]
    pub fn is_item_disabled(&self, index: usize) -> bool {
        let Some(item) = self.items.get(index) else {
            return false;
        };
        let Ok(value) = item.trim().parse::<i64>() else {
            return false;
        };
        self.limit.excludes(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounded_minutes() -> Wheel {
        Wheel::new(
            WheelConfig::new(59)
                .circular(false)
                .pad_with_n_items(0)
                .limit(LimitRequest {
                    min: Some(2),
                    max: Some(20),
                }),
        )
    }

    fn hours() -> Wheel {
        Wheel::new(WheelConfig::new(23).pad_with_zero(true))
    }

    #[test]
    fn builds_the_expected_sequence_and_limit() {
        let wheel = hours();
        // 24 items repeated 8 times, no pads.
        assert_eq!(wheel.items().len(), 192);
        assert_eq!(wheel.limit(), Limit { min: 0, max: 23 });
        assert_eq!(wheel.initial_index(), 95);
        assert_eq!(wheel.value(), 0);
    }

    #[test]
    fn progress_clamps_without_moving_the_list() {
        let mut wheel = bounded_minutes();
        assert_eq!(wheel.scroll_progress(25.0 * 50.0), 20);
        assert_eq!(wheel.scroll_progress(0.0), 2);
        assert_eq!(wheel.scroll_progress(10.0 * 50.0), 10);
    }

    #[test]
    fn settle_past_max_shifts_back_by_the_overshoot() {
        let mut wheel = bounded_minutes();
        // Settle on value 25 at index 25: overshoot of 5 past max 20.
        let settle = wheel.scroll_settled(25.0 * 50.0);
        assert_eq!(settle.value, 20);
        assert_eq!(
            settle.correction,
            Some(ScrollTo {
                index: 20,
                animated: true
            })
        );
        assert_eq!(wheel.value(), 20);
    }

    #[test]
    fn settle_below_min_shifts_forward_by_the_undershoot() {
        let mut wheel = bounded_minutes();
        let settle = wheel.scroll_settled(0.0);
        assert_eq!(settle.value, 2);
        assert_eq!(
            settle.correction,
            Some(ScrollTo {
                index: 2,
                animated: true
            })
        );
    }

    #[test]
    fn settle_inside_the_limit_needs_no_correction() {
        let mut wheel = bounded_minutes();
        let settle = wheel.scroll_settled(7.0 * 50.0);
        assert_eq!(settle.value, 7);
        assert_eq!(settle.correction, None);
    }

    #[test]
    fn undershoot_target_past_the_list_end_falls_back_to_min() {
        // Bounded wheel of 10 items with one pad each side: 12 rows.
        let mut wheel = Wheel::new(
            WheelConfig::new(9)
                .circular(false)
                .limit(LimitRequest {
                    min: Some(9),
                    max: Some(9),
                }),
        );
        // Index 11 reads value 1; shifting forward by 8 would leave the list.
        let settle = wheel.scroll_settled(11.0 * 50.0);
        assert_eq!(settle.value, 9);
        assert_eq!(
            settle.correction,
            Some(ScrollTo {
                index: 9,
                animated: true
            })
        );
    }

    #[test]
    fn overshoot_target_before_the_list_start_falls_back() {
        let mut wheel = Wheel::new(WheelConfig::new(23).limit(LimitRequest {
            min: Some(0),
            max: Some(0),
        }));
        // Index 1 on a circular hours wheel reads value 2 (> max 0); the
        // shifted target would be negative.
        let settle = wheel.scroll_settled(50.0);
        assert_eq!(settle.value, 0);
        assert_eq!(
            settle.correction,
            Some(ScrollTo {
                index: 0,
                animated: true
            })
        );
    }

    #[test]
    fn visible_items_near_the_start_jump_forward() {
        let wheel = hours();
        assert_eq!(
            wheel.visible_item_changed(5),
            Some(ScrollTo {
                index: 29,
                animated: false
            })
        );
        // Index 0 also re-centers.
        assert_eq!(
            wheel.visible_item_changed(0),
            Some(ScrollTo {
                index: 24,
                animated: false
            })
        );
        assert_eq!(wheel.visible_item_changed(12), None);
    }

    #[test]
    fn visible_items_near_the_end_jump_backward() {
        let wheel = hours();
        // Repeat count 8, so the backward threshold is 24 * 7.5 = 180.
        assert_eq!(
            wheel.visible_item_changed(180),
            Some(ScrollTo {
                index: 156,
                animated: false
            })
        );
        assert_eq!(wheel.visible_item_changed(179), None);
    }

    #[test]
    fn bounded_and_single_item_wheels_never_recenter() {
        let bounded = bounded_minutes();
        assert_eq!(bounded.visible_item_changed(0), None);

        let single = Wheel::new(WheelConfig::new(-1));
        assert_eq!(single.visible_item_changed(0), None);
    }

    #[test]
    fn reset_and_set_value_return_jump_commands() {
        let mut wheel = Wheel::new(WheelConfig::new(23).initial_value(13));
        assert_eq!(wheel.value(), 13);

        let jump = wheel.set_value(7, true);
        assert_eq!(wheel.value(), 7);
        assert!(jump.animated);
        assert_eq!(jump.index, 96 + 7 - 1);

        let back = wheel.reset(false);
        assert_eq!(wheel.value(), 13);
        assert_eq!(back.index, wheel.initial_index());
        assert!(!back.animated);
    }

    #[test]
    fn disabled_items_are_the_ones_outside_the_limit() {
        let wheel = Wheel::new(
            WheelConfig::new(59)
                .circular(false)
                .pad_with_zero(true)
                .limit(LimitRequest {
                    min: Some(2),
                    max: Some(20),
                }),
        );
        // Index 0 is a pad token; index 1 is "00" (value 0, below min).
        assert!(!wheel.is_item_disabled(0));
        assert!(wheel.is_item_disabled(1));
        assert!(!wheel.is_item_disabled(3));
        assert!(wheel.is_item_disabled(22));
    }

    #[test]
    fn layout_helpers_follow_the_item_height() {
        let wheel = Wheel::new(WheelConfig::new(59).circular(false).item_height(40.0));
        let offsets = wheel.snap_offsets();
        assert_eq!(offsets.len(), wheel.items().len());
        assert_eq!(offsets[0], 0.0);
        assert_eq!(offsets[3], 120.0);
        assert_eq!(wheel.viewport_height(), 120.0);
    }
}
