#![forbid(unsafe_code)]

//! Validation of caller-supplied min/max limits against the value domain.
//!
//! Callers may restrict a wheel to a sub-range of its domain (for example,
//! "no earlier than 09:00"). Requests arrive as optional bounds and may be
//! partial, out of range, or contradictory; resolution always produces a
//! usable limit. A contradictory request is discarded wholesale rather than
//! surfaced as an error: the wheel falls back to its full domain.

use serde::{Deserialize, Serialize};

/// A caller-supplied, possibly partial, limit on selectable values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitRequest {
    /// Requested inclusive lower bound, if any.
    pub min: Option<i64>,
    /// Requested inclusive upper bound, if any.
    pub max: Option<i64>,
}

impl LimitRequest {
    /// Resolve this request against a wheel's domain shape.
    #[must_use]
    pub fn resolve(self, number_of_items: i64, interval: i64) -> Limit {
        resolve_limit(Some(self), number_of_items, interval)
    }
}

/// The authoritative limit a wheel enforces, always within its domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limit {
    /// Inclusive lower bound.
    pub min: i64,
    /// Inclusive upper bound. Never below `min`.
    pub max: i64,
}

impl Limit {
    /// The full-domain limit for a wheel with the given shape.
    #[must_use]
    pub fn full(number_of_items: i64, interval: i64) -> Self {
        Self {
            min: 0,
            max: (number_of_items - 1) * interval,
        }
    }

    /// Clamp a value into this limit.
    #[must_use]
    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }

    /// Whether a value lies outside this limit.
    #[must_use]
    pub fn excludes(&self, value: i64) -> bool {
        value < self.min || value > self.max
    }
}

/// Resolve an optional caller limit request against the wheel's domain.
///
/// Requested bounds are clamped into `[0, (number_of_items - 1) * interval]`.
/// A request with neither bound set, or whose clamped `max` falls below its
/// clamped `min`, resolves to the full domain. Caller errors are recovered
/// silently, never surfaced.
#[must_use]
pub fn resolve_limit(
    requested: Option<LimitRequest>,
    number_of_items: i64,
    interval: i64,
) -> Limit {
    let full = Limit::full(number_of_items, interval);
    let Some(request) = requested else {
        return full;
    };
    if request.min.is_none() && request.max.is_none() {
        return full;
    }

    let max = request.max.map_or(full.max, |max| max.min(full.max));
    let min = request.min.map_or(0, |min| min.max(0));

    if max < min { full } else { Limit { min, max } }
}
