//! Lenient integer parsing for query strings and path segments.
//!
//! Mirrors the forgiving parse web clients expect: leading whitespace is
//! skipped, an optional sign is accepted, digits are read until the first
//! non-digit and anything after that is ignored. `"3abc"` is `3`, `"abc"`
//! is nothing. Values too large for an `i64` saturate.

/// Parse the leading integer of `input`, if any.
#[must_use]
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: Vec<i64> = rest
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| i64::from(b - b'0'))
        .collect();
    if digits.is_empty() {
        return None;
    }

    let value = digits.into_iter().fold(0_i64, |acc, digit| {
        let shifted = acc.saturating_mul(10);
        if negative {
            shifted.saturating_sub(digit)
        } else {
            shifted.saturating_add(digit)
        }
    });
    Some(value)
}
