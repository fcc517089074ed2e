/// Integer-prefix parse of text read back from the page.
///
/// Leading whitespace and an optional sign are accepted, then digits up to
/// the first non-digit. Text with no leading digits yields `None`. Values
/// saturate at the `i64` range.
pub fn leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut value: i64 = 0;
    let mut seen = false;
    for digit in digits {
        seen = true;
        value = value.saturating_mul(10).saturating_add(i64::from(digit - b'0'));
    }

    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_prefix() {
        assert_eq!(leading_int("12"), Some(12));
        assert_eq!(leading_int("  7 items"), Some(7));
        assert_eq!(leading_int("3.9"), Some(3));
        assert_eq!(leading_int("-4"), Some(-4));
        assert_eq!(leading_int("+5"), Some(5));
    }

    #[test]
    fn rejects_text_without_digits() {
        assert_eq!(leading_int(""), None);
        assert_eq!(leading_int("abc"), None);
        assert_eq!(leading_int("-"), None);
        assert_eq!(leading_int("x12"), None);
    }

    #[test]
    fn saturates_on_overflow() {
        assert_eq!(leading_int("99999999999999999999999"), Some(i64::MAX));
    }
}
