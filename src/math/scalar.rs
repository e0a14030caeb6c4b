//! Epsilon-tolerant scalar comparison utilities.
//!
//! All functions are pure and total over `f64`. Two tolerance schemes
//! coexist: an absolute bound of [`f64::EPSILON`] for zero tests and sign
//! classification, and a magnitude-relative bound for equality between two
//! nonzero values.

/// Tests whether a value is approximately zero.
///
/// Uses an absolute tolerance of [`f64::EPSILON`], independent of the
/// value's magnitude. For large values this is stricter than the precision
/// actually representable at that magnitude.
#[must_use]
pub fn is_zero_approx(value: f64) -> bool {
    value.abs() < f64::EPSILON
}

/// Tests whether two values are approximately equal.
///
/// Exact matches short-circuit; otherwise the difference is measured against
/// a tolerance scaled by the larger magnitude: `max(|a|, |b|) * EPSILON`.
/// Two values near zero therefore get a near-zero tolerance — this is not a
/// zero test, use [`is_zero_approx`] for that.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_equal_approx(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    let tolerance = a.abs().max(b.abs()) * f64::EPSILON;
    (a - b).abs() < tolerance
}

/// Tests whether two values are equal within an explicit absolute tolerance.
///
/// Bypasses the magnitude-relative scheme of [`is_equal_approx`].
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_equal_approx_tol(a: f64, b: f64, tolerance: f64) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() < tolerance
}

/// Classifies the sign of a value.
///
/// Returns `-1` below `-EPSILON`, `1` above `EPSILON`, and `0` inside the
/// band. The band is the tie-break rule used throughout side and
/// intersection classification.
#[must_use]
pub fn sign(value: f64) -> i32 {
    if value < -f64::EPSILON {
        -1
    } else if value > f64::EPSILON {
        1
    } else {
        0
    }
}

/// Linear interpolation between `a` and `b`.
///
/// `t` is not clamped; values outside `[0, 1]` extrapolate.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
