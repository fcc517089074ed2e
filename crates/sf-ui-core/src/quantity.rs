//! Quantity input handling: the add-to-cart read and the +/- stepper.

use crate::parse;

/// Quantity to request when adding to the cart from the `#quantity` input.
///
/// Missing, unreadable, or zero input means one item. Anything else is sent
/// as read; the server owns the bounds.
pub fn requested(raw: Option<&str>) -> i64 {
    raw.and_then(parse::leading_int)
        .filter(|&n| n != 0)
        .unwrap_or(1)
}

/// Next stepper value: `current + delta` clamped into `[1, max]`.
///
/// `raw_value` falls back to 1 and `raw_max` to `default_max` when absent,
/// unreadable, or zero.
pub fn step(raw_value: Option<&str>, raw_max: Option<&str>, delta: i64, default_max: u32) -> u32 {
    let current = raw_value
        .and_then(parse::leading_int)
        .filter(|&n| n != 0)
        .unwrap_or(1);
    let max = raw_max
        .and_then(parse::leading_int)
        .filter(|&n| n != 0)
        .unwrap_or(i64::from(default_max));

    let next = current.saturating_add(delta).min(max).max(1);
    next.min(i64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MAX_QUANTITY;

    #[test]
    fn requested_defaults_to_one() {
        assert_eq!(requested(None), 1);
        assert_eq!(requested(Some("")), 1);
        assert_eq!(requested(Some("abc")), 1);
        assert_eq!(requested(Some("0")), 1);
    }

    #[test]
    fn requested_is_not_clamped() {
        assert_eq!(requested(Some("-3")), -3);
        assert_eq!(requested(Some("5000000000")), 5_000_000_000);
    }

    #[test]
    fn requested_reads_value() {
        assert_eq!(requested(Some("4")), 4);
        assert_eq!(requested(Some(" 12")), 12);
    }

    #[test]
    fn step_never_goes_below_one() {
        assert_eq!(step(Some("5"), None, -10, DEFAULT_MAX_QUANTITY), 1);
        assert_eq!(step(Some("1"), Some("10"), -1, DEFAULT_MAX_QUANTITY), 1);
        assert_eq!(step(Some("3"), Some("10"), i64::MIN, DEFAULT_MAX_QUANTITY), 1);
    }

    #[test]
    fn step_respects_declared_max() {
        assert_eq!(step(Some("9"), Some("10"), 5, DEFAULT_MAX_QUANTITY), 10);
        assert_eq!(step(Some("2"), Some("10"), i64::MAX, DEFAULT_MAX_QUANTITY), 10);
        assert_eq!(step(Some("2"), Some("10"), 1, DEFAULT_MAX_QUANTITY), 3);
    }

    #[test]
    fn step_uses_default_max_when_undeclared() {
        assert_eq!(step(Some("998"), None, 5, DEFAULT_MAX_QUANTITY), 999);
        assert_eq!(step(Some("998"), Some(""), 5, DEFAULT_MAX_QUANTITY), 999);
        assert_eq!(step(Some("998"), Some("0"), 5, DEFAULT_MAX_QUANTITY), 999);
    }

    #[test]
    fn step_treats_unreadable_value_as_one() {
        assert_eq!(step(None, None, 1, DEFAULT_MAX_QUANTITY), 2);
        assert_eq!(step(Some("x"), None, 1, DEFAULT_MAX_QUANTITY), 2);
        assert_eq!(step(Some("0"), None, 0, DEFAULT_MAX_QUANTITY), 1);
    }

    #[test]
    fn step_stays_in_range_for_any_delta() {
        for value in ["-50", "0", "1", "7", "20", "5000"] {
            for delta in [-1_000, -11, -1, 0, 1, 3, 11, 1_000] {
                let next = step(Some(value), Some("20"), delta, DEFAULT_MAX_QUANTITY);
                assert!((1..=20).contains(&next), "value={value} delta={delta} got {next}");
            }
        }
    }
}
