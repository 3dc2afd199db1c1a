//! Numeric thresholds shared by the sign normalizer and the comparator.

/// Default number of decimal places two values must agree to.
pub const DEFAULT_DECIMAL: i32 = 6;

/// Default magnitude at or below which a value carries no sign.
pub const DEFAULT_ZERO_EPSILON: f64 = 1e-14;

/// Thresholds for approximate equality and sign detection.
///
/// Approximate equality follows the `decimal` convention: two values are
/// equal when `|a - b| < 1.5 * 10^-decimal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Decimal places two values must agree to.
    pub decimal: i32,
    /// Values with magnitude at or below this are treated as sign-zero.
    pub zero_epsilon: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { decimal: DEFAULT_DECIMAL, zero_epsilon: DEFAULT_ZERO_EPSILON }
    }
}

impl Tolerance {
    /// Creates a tolerance with the given decimal places and the default zero epsilon.
    #[must_use]
    pub fn with_decimal(decimal: i32) -> Self {
        Self { decimal, ..Self::default() }
    }

    /// Largest absolute difference still considered equal (exclusive).
    #[must_use]
    pub fn threshold(&self) -> f64 {
        1.5 * 10f64.powi(-self.decimal)
    }

    /// Checks whether `a` and `b` agree to `decimal` places.
    ///
    /// Identical values are always equal, including matching infinities, and
    /// two NaNs are equal to each other.
    #[must_use]
    pub fn almost_equal(&self, a: f64, b: f64) -> bool {
        if a == b || (a.is_nan() && b.is_nan()) {
            return true;
        }
        (a - b).abs() < self.threshold()
    }

    /// Checks whether `x` is too small to carry a meaningful sign.
    #[must_use]
    pub fn is_sign_zero(&self, x: f64) -> bool {
        x.abs() <= self.zero_epsilon
    }

    /// Sign of `x` as `-1`, `0` or `1`, with sign-zero values mapped to `0`.
    #[must_use]
    pub fn sign(&self, x: f64) -> i8 {
        if self.is_sign_zero(x) {
            0
        } else if x > 0.0 {
            1
        } else {
            -1
        }
    }
}
