#![forbid(unsafe_code)]

//! Bidirectional mapping between domain values and scroll positions.
//!
//! [`WheelGeometry`] bundles the parameters both directions share and
//! provides the two transforms: a value to the list index the wheel should
//! start on, and a continuous pixel offset back to the nearest item and its
//! domain value.
//!
//! # Invariants
//!
//! 1. `initial_index` places the value in the middle repetition block of a
//!    circular wheel, so there is scroll room in both wrap directions
//!    before a re-centering jump is needed.
//! 2. `initial_index` is always a valid index into the display sequence
//!    produced for the same geometry.
//! 3. `value_at_offset` returns a value in the domain for any offset, no
//!    matter which repetition block the offset lands in.
//! 4. Round-trip: for every domain value `v`,
//!    `value_at_offset(initial_index(v) as f32 * h, h).value == v`.
//!
//! # Failure Modes
//!
//! - Offsets between item boundaries round to the nearest index.
//! - Offsets before the start of the list resolve to index 0's position.
//! - The pad-token subtraction in `initial_index` applies only to circular
//!   wheels. That sign convention is a behavioral contract pinned by the
//!   round-trip property tests; do not re-derive it.

use serde::{Deserialize, Serialize};

/// The shared shape parameters for one wheel's position mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelGeometry {
    /// Step between adjacent domain values.
    pub interval: i64,
    /// Item count of one repetition of the domain.
    pub number_of_items: i64,
    /// Empty pad tokens flanking a non-repeated sequence.
    pub pad_with_n_items: usize,
    /// How many times the domain appears in the display sequence.
    pub repeat_count: i64,
    /// Whether the wheel wraps around (infinite scroll).
    pub circular: bool,
}

/// A scroll offset resolved to the nearest item and its domain value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetSample {
    /// The domain value under the selection line.
    pub value: i64,
    /// The display-sequence index nearest the offset.
    pub index: usize,
}

impl WheelGeometry {
    /// List index at which a wheel showing `value` should start.
    #[must_use]
    pub fn initial_index(&self, value: i64) -> usize {
        let step = value / self.interval;
        let wrapped = (step + self.number_of_items).rem_euclid(self.number_of_items);
        let pad = if self.circular {
            self.pad_with_n_items as i64
        } else {
            0
        };
        let index = self.number_of_items * (self.repeat_count / 2) + wrapped - pad;
        index.max(0) as usize
    }

    /// Resolve a pixel offset to the nearest item and its domain value.
    ///
    /// The Euclidean modulo folds whichever repetition block the index
    /// falls in back into the domain, so the value is always valid and
    /// non-negative.
    #[must_use]
    pub fn value_at_offset(&self, offset_px: f32, item_height: f32) -> OffsetSample {
        let index = ((offset_px / item_height).round() as i64).max(0);
        let raw = if self.circular {
            index + self.pad_with_n_items as i64
        } else {
            index
        };
        let value = raw.rem_euclid(self.number_of_items) * self.interval;
        OffsetSample {
            value,
            index: index as usize,
        }
    }
}
