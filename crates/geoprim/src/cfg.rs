//! Tolerance defaults and the near-equality predicate.
//!
//! Policy
//! - One absolute tolerance is used by every comparison in the crate
//!   (vector equality, collinearity snapping, zero-vector detection).
//! - It is not scale invariant: coordinates around 1e6 lose the ability to
//!   distinguish anything. Callers working at other scales pass a `GeomCfg`
//!   to the `_with` variants instead of relying on the constant.

/// Absolute tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-7;

/// Returns true iff `|x - y| < TOLERANCE`.
#[inline]
pub fn is_equal_d(x: f64, y: f64) -> bool {
    (x - y).abs() < TOLERANCE
}

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub tolerance: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            tolerance: TOLERANCE,
        }
    }
}

impl GeomCfg {
    #[inline]
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self { tolerance }
    }
    /// Strict `|x - y| < tolerance`, same shape as [`is_equal_d`].
    #[inline]
    pub fn is_equal(&self, x: f64, y: f64) -> bool {
        (x - y).abs() < self.tolerance
    }
}
