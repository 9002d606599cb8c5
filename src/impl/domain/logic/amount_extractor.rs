use std::sync::LazyLock;

use regex::Regex;

static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("hardcoded regex should be valid"));

/// Best-effort quantity from free text: the first run of ASCII digits (with an
/// optional fractional part) found anywhere in the string, or 0 if there is
/// none. Units are ignored and ranges are not averaged, so "between 10 and
/// 20g" yields 10. A digit run too long to represent as a finite number is
/// treated like no number at all.
pub fn extract_amount(text: &str) -> f64 {
    LEADING_NUMBER
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}
