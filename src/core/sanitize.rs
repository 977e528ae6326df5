// src/core/sanitize.rs

/// Leading-integer parse: skip leading whitespace, optional sign, then as many
/// ASCII digits as follow. `"1234abc"` is 1234, `"abc"` and `""` are `None`.
///
/// Vote cells are occasionally decorated or blank upstream, so callers decide
/// whether `None` means zero or poisons a sum.
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let t = s.trim_start();
    let (neg, digits) = match t.as_bytes().first() {
        Some(b'-') => (true, &t[1..]),
        Some(b'+') => (false, &t[1..]),
        _ => (false, t),
    };
    let end = digits.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }
    let n: i64 = digits[..end].parse().ok()?;
    Some(if neg { -n } else { n })
}

/// Full-string float parse after trimming; a trailing `%` is tolerated.
pub fn parse_percent(s: &str) -> Option<f64> {
    let t = s.trim();
    let t = t.strip_suffix('%').unwrap_or(t).trim_end();
    t.parse::<f64>().ok().filter(|v| !v.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_prefix_behaves_like_leading_digit_scan() {
        assert_eq!(parse_int_prefix("100"), Some(100));
        assert_eq!(parse_int_prefix("  42 "), Some(42));
        assert_eq!(parse_int_prefix("1234abc"), Some(1234));
        assert_eq!(parse_int_prefix("1,234"), Some(1));
        assert_eq!(parse_int_prefix("-7"), Some(-7));
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix("n/a"), None);
    }

    #[test]
    fn percent_accepts_plain_and_suffixed() {
        assert_eq!(parse_percent("60.5"), Some(60.5));
        assert_eq!(parse_percent(" 40 % "), Some(40.0));
        assert_eq!(parse_percent("NaN"), None);
        assert_eq!(parse_percent("--"), None);
    }
}
