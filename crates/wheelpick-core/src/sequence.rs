#![forbid(unsafe_code)]

//! Display sequence generation and the repeat-count policy.
//!
//! A wheel never scrolls its value domain directly; it scrolls a rendered
//! list of string tokens derived from it. Circular wheels repeat the domain
//! enough times to form a scroll buffer, so the host can jump the visible
//! window back toward the middle long before the list physically ends.
//! Bounded wheels are instead flanked by empty pad tokens, so the first and
//! last real values can still reach the visual center of the wheel.
//!
//! Repetition and padding are mutually exclusive: a repeated sequence needs
//! no pads (the neighboring repetition blocks play that role), and a padded
//! sequence never repeats.

use crate::format::pad_number;

/// Target total item count for a circular wheel's scroll buffer.
const CIRCULAR_BUFFER_ITEMS: f64 = 180.0;

/// Number of times the domain appears in the display sequence.
///
/// Circular wheels repeat the domain `max(round(180 / number_of_items), 1)`
/// times; bounded wheels and single-item domains never repeat.
#[must_use]
pub fn repeat_count(number_of_items: i64, circular: bool) -> i64 {
    if number_of_items <= 1 || !circular {
        return 1;
    }
    let count = (CIRCULAR_BUFFER_ITEMS / number_of_items as f64).round() as i64;
    count.max(1)
}

/// Build the ordered list of display tokens for one wheel.
///
/// The base sequence formats each domain value in ascending order. When
/// `repeat_count > 1` the base is concatenated that many times, preserving
/// order within each copy. When the wheel is not circular, or when it did
/// not repeat, `pad_with_n_items` empty tokens are added on each side.
///
/// An empty domain (`number_of_items <= 0`) yields an empty sequence.
#[must_use]
pub fn generate(
    number_of_items: i64,
    interval: i64,
    pad_with_zero: bool,
    repeat_count: i64,
    circular: bool,
    pad_with_n_items: usize,
) -> Vec<String> {
    if number_of_items <= 0 {
        return Vec::new();
    }

    let base: Vec<String> = (0..number_of_items)
        .map(|i| pad_number(i * interval, pad_with_zero))
        .collect();

    let repeats = repeat_count.max(1) as usize;
    let pad_tokens = if !circular || repeat_count == 1 {
        pad_with_n_items
    } else {
        0
    };

    let mut items = Vec::with_capacity(base.len() * repeats + 2 * pad_tokens);
    items.extend(std::iter::repeat_with(String::new).take(pad_tokens));
    for _ in 0..repeats {
        items.extend(base.iter().cloned());
    }
    items.extend(std::iter::repeat_with(String::new).take(pad_tokens));
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_domain_yields_empty_sequence() {
        assert!(generate(0, 1, false, 1, true, 2).is_empty());
        assert!(generate(-3, 1, false, 1, false, 2).is_empty());
    }

    #[test]
    fn circular_sequence_repeats_without_pads() {
        let count = repeat_count(24, true);
        let items = generate(24, 1, true, count, true, 1);
        assert_eq!(items.len(), 24 * count as usize);
        assert_eq!(items[0], "00");
        assert_eq!(items[23], "23");
        // Second repetition block starts over at the first domain value.
        assert_eq!(items[24], "00");
        assert!(items.iter().all(|item| !item.is_empty()));
    }

    #[test]
    fn bounded_sequence_is_padded_on_both_sides() {
        let items = generate(12, 5, true, 1, false, 2);
        assert_eq!(items.len(), 12 + 2 * 2);
        assert_eq!(items[0], "");
        assert_eq!(items[1], "");
        assert_eq!(items[2], "00");
        assert_eq!(items[13], "55");
        assert_eq!(items[14], "");
        assert_eq!(items[15], "");
    }

    #[test]
    fn single_item_domain_is_padded_even_when_circular() {
        let count = repeat_count(1, true);
        assert_eq!(count, 1);
        let items = generate(1, 1, false, count, true, 1);
        assert_eq!(items, vec!["", " 0", ""]);
    }

    #[test]
    fn repeat_count_targets_the_scroll_buffer() {
        assert_eq!(repeat_count(24, true), 8);
        assert_eq!(repeat_count(12, true), 15);
        assert_eq!(repeat_count(60, true), 3);
        // Large domains still repeat at least once.
        assert_eq!(repeat_count(400, true), 1);
    }

    #[test]
    fn bounded_wheels_never_repeat() {
        assert_eq!(repeat_count(24, false), 1);
        assert_eq!(repeat_count(2, false), 1);
    }

    #[test]
    fn space_padding_carries_into_tokens() {
        let items = generate(3, 1, false, 1, false, 0);
        assert_eq!(items, vec![" 0", " 1", " 2"]);
    }
}
