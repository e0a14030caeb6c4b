use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq};

use super::scalar;

/// A 2D double-precision vector.
///
/// A plain value type: constructed by value, copied freely, mutated only
/// through the compound-assignment operators.
///
/// Equality comes in two deliberately distinct flavors: the derived
/// `PartialEq` compares components exactly (per IEEE `==`, so `0.0 == -0.0`
/// and NaN is never equal), while [`Vector2::is_equal_approx`] allows
/// floating-point rounding slack. The derived `PartialOrd` is a strict
/// lexicographic order over `(x, y)` with exact tie-breaks, intended for
/// ordered containers — it is never tolerance-based.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Vector2 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the squared length of the vector.
    ///
    /// Cheaper than [`length`](Self::length); prefer it for comparisons.
    #[must_use]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Returns the length of the vector.
    #[must_use]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Returns the dot product with `other`.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Returns the vector scaled to unit length.
    ///
    /// A vector of exactly zero length normalizes to [`Vector2::ZERO`]
    /// rather than producing NaN components.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn normalized(self) -> Self {
        let length = self.length();
        if length == 0.0 {
            return Self::ZERO;
        }
        Self::new(self.x / length, self.y / length)
    }

    /// Linearly interpolates toward `other` by factor `t`.
    ///
    /// Component-wise [`scalar::lerp`]; `t` outside `[0, 1]` extrapolates.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            scalar::lerp(self.x, other.x, t),
            scalar::lerp(self.y, other.y, t),
        )
    }

    /// Tests whether every component is approximately zero.
    #[must_use]
    pub fn is_zero_approx(self) -> bool {
        scalar::is_zero_approx(self.x) && scalar::is_zero_approx(self.y)
    }

    /// Tests whether the vector is approximately equal to `other`,
    /// component by component.
    #[must_use]
    pub fn is_equal_approx(self, other: Self) -> bool {
        scalar::is_equal_approx(self.x, other.x) && scalar::is_equal_approx(self.y, other.y)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Component-wise product (not the dot product — see [`Vector2::dot`]).
impl Mul for Vector2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

/// Component-wise quotient. A zero component in `rhs` follows IEEE division
/// semantics (infinity or NaN), it is not intercepted.
impl Div for Vector2 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vector2 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign for Vector2 {
    fn mul_assign(&mut self, rhs: Self) {
        self.x *= rhs.x;
        self.y *= rhs.y;
    }
}

impl DivAssign for Vector2 {
    fn div_assign(&mut self, rhs: Self) {
        self.x /= rhs.x;
        self.y /= rhs.y;
    }
}

impl MulAssign<f64> for Vector2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl DivAssign<f64> for Vector2 {
    fn div_assign(&mut self, rhs: f64) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl AbsDiffEq for Vector2 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Vector2 {
    fn default_max_relative() -> f64 {
        f64::EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn v(x: f64, y: f64) -> Vector2 {
        Vector2::new(x, y)
    }

    // ── construction ──

    #[test]
    fn default_is_zero() {
        assert_eq!(Vector2::default(), Vector2::ZERO);
        assert_eq!(Vector2::ZERO, v(0.0, 0.0));
    }

    // ── length / dot ──

    #[test]
    fn length_of_axis_aligned_and_oblique() {
        assert_eq!(v(3.0, 0.0).length(), 3.0);
        assert_eq!(v(3.0, 4.0).length(), 5.0);
        assert_eq!(v(3.0, 4.0).length_squared(), 25.0);
    }

    #[test]
    fn dot_products() {
        assert_eq!(v(1.0, 2.0).dot(v(3.0, 4.0)), 11.0);
        // Perpendicular vectors.
        assert_eq!(v(1.0, 0.0).dot(v(0.0, 1.0)), 0.0);
    }

    // ── normalized ──

    #[test]
    fn normalized_has_unit_length() {
        assert_relative_eq!(v(3.0, 4.0).normalized().length(), 1.0, epsilon = 1e-15);
        assert!(v(3.0, 4.0).normalized().is_equal_approx(v(0.6, 0.8)));
    }

    #[test]
    fn zero_vector_normalizes_to_zero() {
        assert_eq!(Vector2::ZERO.normalized(), Vector2::ZERO);
    }

    // ── lerp ──

    #[test]
    fn lerp_endpoints_are_exact() {
        let a = v(1.0, 2.0);
        let b = v(5.0, -2.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn lerp_midpoint_and_extrapolation() {
        let a = v(0.0, 0.0);
        let b = v(2.0, 4.0);
        assert_eq!(a.lerp(b, 0.5), v(1.0, 2.0));
        assert_eq!(a.lerp(b, 2.0), v(4.0, 8.0));
    }

    // ── approximate comparisons ──

    #[test]
    fn zero_approx_and_equal_approx() {
        assert!(Vector2::ZERO.is_zero_approx());
        assert!(v(f64::EPSILON / 2.0, 0.0).is_zero_approx());
        assert!(!v(1.0, 0.0).is_zero_approx());

        let a = v(1.0, 2.0);
        assert!(a.is_equal_approx(a));
        assert!(!a.is_equal_approx(v(1.0, 2.1)));
    }

    // ── ordering ──

    #[test]
    fn ordering_is_lexicographic() {
        assert!(v(1.0, 2.0) < v(1.0, 2.1));
        assert!(v(1.0, 2.0) < v(2.0, 0.0));
        assert!(v(2.0, 0.0) > v(1.0, 99.0));
        assert!(v(1.0, 2.0) <= v(1.0, 2.0));
        assert!(v(1.0, 2.0) >= v(1.0, 2.0));
    }

    // ── arithmetic operators ──

    #[test]
    fn component_wise_arithmetic() {
        let a = v(1.0, 2.0);
        let b = v(4.0, 8.0);
        assert_eq!(a + b, v(5.0, 10.0));
        assert_eq!(b - a, v(3.0, 6.0));
        assert_eq!(a * b, v(4.0, 16.0));
        assert_eq!(b / a, v(4.0, 4.0));
        assert_eq!(-a, v(-1.0, -2.0));
    }

    #[test]
    fn scalar_broadcast_arithmetic() {
        let a = v(1.0, -2.0);
        assert_eq!(a * 3.0, v(3.0, -6.0));
        assert_eq!(a / 2.0, v(0.5, -1.0));
    }

    #[test]
    fn compound_assignment_matches_binary_operators() {
        let a = v(1.0, 2.0);
        let b = v(4.0, 8.0);

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);

        c = a;
        c -= b;
        assert_eq!(c, a - b);

        c = a;
        c *= b;
        assert_eq!(c, a * b);

        c = a;
        c /= b;
        assert_eq!(c, a / b);

        c = a;
        c *= 2.0;
        assert_eq!(c, a * 2.0);

        c = a;
        c /= 2.0;
        assert_eq!(c, a / 2.0);
    }
}
