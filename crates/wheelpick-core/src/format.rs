#![forbid(unsafe_code)]

//! Fixed-width display token formatting.

/// Format a value into a display token for the wheel.
///
/// Values below 10 are widened to two characters: with a leading zero when
/// `pad_with_zero` is set, otherwise with a leading space so single- and
/// double-digit items align visually. Values of 10 and above are rendered
/// as plain decimal strings.
///
/// The sequence generator only ever passes non-negative values.
#[must_use]
pub fn pad_number(value: i64, pad_with_zero: bool) -> String {
    if value < 10 {
        if pad_with_zero {
            format!("0{value}")
        } else {
            format!(" {value}")
        }
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_with_zero_below_ten() {
        assert_eq!(pad_number(7, true), "07");
        assert_eq!(pad_number(0, true), "00");
        assert_eq!(pad_number(9, true), "09");
    }

    #[test]
    fn pads_with_space_below_ten() {
        assert_eq!(pad_number(7, false), " 7");
        assert_eq!(pad_number(0, false), " 0");
    }

    #[test]
    fn two_digit_values_pass_through() {
        assert_eq!(pad_number(10, true), "10");
        assert_eq!(pad_number(42, true), "42");
        assert_eq!(pad_number(42, false), "42");
        assert_eq!(pad_number(120, false), "120");
    }
}
