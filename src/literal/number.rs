//! Invariant text for approximate numbers.

use super::NULL_LITERAL;

/// Magnitudes outside `[1e-5, 1e15)` switch to exponent form.
const PLAIN_MIN: f64 = 1e-5;
const PLAIN_MAX: f64 = 1e15;

/// Render a float as a T-SQL numeric literal.
///
/// Always uses `.` as the separator and never groups digits. Very large and
/// very small magnitudes use exponent form (`1.5e40`), since a plain literal
/// longer than 38 digits is rejected by the server. Non-finite values have no
/// literal and render as `NULL`.
pub fn float_text(value: f64) -> String {
    if !value.is_finite() {
        return NULL_LITERAL.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        value.to_string()
    } else {
        format!("{value:e}")
    }
}
