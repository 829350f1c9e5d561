//! Numeric conversion helpers centralizing safe numeric casts and money rounding.

use num_traits::cast::cast;
use regex::Regex;
use std::sync::OnceLock;

fn non_numeric() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^0-9.]").ok()).as_ref()
}

/// Parse user-typed numeric text, dropping anything that is not a digit or a dot.
///
/// Text that still fails to parse (empty, `"1.2.3"`) yields 0.0.
#[must_use]
pub fn parse_lenient(text: &str) -> f64 {
    let cleaned = non_numeric().map_or_else(
        || text.trim().to_string(),
        |re| re.replace_all(text, "").into_owned(),
    );
    cleaned.parse::<f64>().map_or(0.0, finite_or_zero)
}

/// Replace NaN and infinities with 0.0.
#[must_use]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Truncate a f64 toward zero and clamp it into `[min, max]`, returning `min` for NaN.
#[must_use]
pub fn trunc_f64_to_u32(value: f64, min: u32, max: u32) -> u32 {
    if value.is_nan() {
        return min;
    }
    let lo = f64::from(min);
    let hi = f64::from(max);
    let clamped = value.trunc().clamp(lo, hi);
    cast::<f64, u32>(clamped).unwrap_or(min)
}

/// Clamp a f64 into `[min, max]`, mapping non-finite input to `min`.
#[must_use]
pub fn clamp_finite(value: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() {
        return min;
    }
    value.clamp(min, max)
}

/// Round a currency amount to whole cents and return the cent count.
#[must_use]
pub fn to_cents(amount: f64) -> i64 {
    if !amount.is_finite() {
        return 0;
    }
    let min = cast::<i64, f64>(i64::MIN).unwrap_or(f64::MIN);
    let max = cast::<i64, f64>(i64::MAX).unwrap_or(f64::MAX);
    let scaled = (amount * 100.0).round().clamp(min, max);
    cast::<f64, i64>(scaled).unwrap_or(0)
}

/// Convert a cent count back into a currency amount.
#[must_use]
pub fn cents_to_amount(cents: i64) -> f64 {
    cast::<i64, f64>(cents).unwrap_or(0.0) / 100.0
}

/// Round a currency amount to the nearest cent.
#[must_use]
pub fn round_cents(amount: f64) -> f64 {
    cents_to_amount(to_cents(amount))
}
