//! Lenient numeric parsing for raw, partially typed field text.
//!
//! Editable amount fields hold whatever the user has typed so far. These
//! helpers read the longest leading numeric prefix and ignore the rest, so
//! `"10abc"` reads as `10` and `"abc"` reads as nothing at all.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::warn;

const INFINITY: &str = "Infinity";

/// Returns the leading numeric portion of `s`, after skipping leading
/// whitespace.
///
/// Accepts an optional sign, digits with at most one decimal point, and an
/// optional exponent. A signed or unsigned `Infinity` is also accepted.
/// Returns `None` when no digits lead the text.
pub fn numeric_prefix(s: &str) -> Option<&str> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if s[end..].starts_with(INFINITY) {
        return Some(&s[..end + INFINITY.len()]);
    }

    let mut mantissa_digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        mantissa_digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    Some(&s[..end])
}

/// Parses the leading numeric prefix of `s` as a float.
///
/// Empty or non-numeric text yields `None`, which callers treat as
/// "not greater than zero".
pub fn parse_float(s: &str) -> Option<f64> {
    let prefix = numeric_prefix(s)?;
    match prefix.trim_start_matches(['+', '-']) {
        INFINITY if prefix.starts_with('-') => Some(f64::NEG_INFINITY),
        INFINITY => Some(f64::INFINITY),
        _ => prefix.parse().ok(),
    }
}

/// Parses the leading numeric prefix of `s` as an exact [`Decimal`].
///
/// Logs a warning and returns `None` when the prefix exists but cannot be
/// represented (infinity, overflow).
pub fn parse_decimal_prefix(s: &str) -> Option<Decimal> {
    let prefix = numeric_prefix(s)?;
    // `Decimal` rejects a leading '+' and a bare trailing '.'.
    let normalized = prefix.strip_prefix('+').unwrap_or(prefix);
    let normalized = normalized.strip_suffix('.').unwrap_or(normalized);

    let parsed = if normalized.contains(['e', 'E']) {
        Decimal::from_scientific(normalized)
    } else {
        Decimal::from_str(normalized)
    };

    parsed.map_or_else(
        |e| {
            warn!(input = %s, "amount not representable as decimal: {}", e);
            None
        },
        Some,
    )
}
