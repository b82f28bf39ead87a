//! Signed triangle area and the point-vs-segment orientation predicate.
//!
//! Purpose
//! - `area_triangle_2d`: signed area of `(a, b, c)`, positive for a
//!   counterclockwise winding.
//! - `orientation_2d`: classify `c` against the directed segment `a → b`
//!   into one of seven [`RelativePosition`]s.
//!
//! Classification order (fixed; degenerate inputs depend on it)
//! 0. NaN or infinite coordinates are rejected with [`GeomError::NonFinite`].
//! 1. Zero-length segment (`a == b`) is rejected with
//!    [`GeomError::DegenerateSegment`].
//! 2. Area within tolerance of zero is snapped to exactly zero.
//! 3. Positive area → `Left`, negative → `Right`.
//! 4. Collinear and pointing away from `b` on either axis → `Behind`.
//! 5. `|ab| < |ac|` → `Beyond`.
//! 6. `a == c` → `Origin`, then `b == c` → `Destination`.
//! 7. Otherwise `Between`.
//!
//! Code cross-refs: `cross::cross_product_2d`, `cfg::GeomCfg`.

mod position;

pub use position::RelativePosition;

use crate::cfg::GeomCfg;
use crate::cross::cross_product_2d;
use crate::error::GeomError;
use crate::vector::{Point2d, X, Y};

/// Signed area of triangle `(a, b, c)`: half of `(b - a) × (c - a)`.
#[inline]
pub fn area_triangle_2d(a: Point2d, b: Point2d, c: Point2d) -> f64 {
    cross_product_2d(b - a, c - a) / 2.0
}

/// Same as [`area_triangle_2d`], snapped to zero when within `cfg.tolerance`.
pub fn area_triangle_2d_with(a: Point2d, b: Point2d, c: Point2d, cfg: &GeomCfg) -> f64 {
    let area = area_triangle_2d(a, b, c);
    if area != 0.0 && cfg.is_equal(area, 0.0) {
        tracing::trace!(area, tol = cfg.tolerance, "snapping near-zero area to collinear");
        0.0
    } else {
        area
    }
}

/// Classify `c` against the directed segment `a → b` with the default tolerance.
#[inline]
pub fn orientation_2d(a: Point2d, b: Point2d, c: Point2d) -> Result<RelativePosition, GeomError> {
    orientation_2d_with(a, b, c, &GeomCfg::default())
}

/// Classify `c` against the directed segment `a → b`.
pub fn orientation_2d_with(
    a: Point2d,
    b: Point2d,
    c: Point2d,
    cfg: &GeomCfg,
) -> Result<RelativePosition, GeomError> {
    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        tracing::debug!(%a, %b, %c, "rejecting non-finite input");
        return Err(GeomError::NonFinite);
    }
    if a.approx_eq_with(&b, cfg) {
        tracing::debug!(%a, %b, "rejecting zero-length segment");
        return Err(GeomError::DegenerateSegment);
    }

    let area = area_triangle_2d_with(a, b, c, cfg);
    if area > 0.0 {
        return Ok(RelativePosition::Left);
    }
    if area < 0.0 {
        return Ok(RelativePosition::Right);
    }

    let ab = b - a;
    let ac = c - a;
    if ab[X] * ac[X] < 0.0 || ab[Y] * ac[Y] < 0.0 {
        return Ok(RelativePosition::Behind);
    }
    if ab.magnitude() < ac.magnitude() {
        return Ok(RelativePosition::Beyond);
    }
    if a.approx_eq_with(&c, cfg) {
        return Ok(RelativePosition::Origin);
    }
    if b.approx_eq_with(&c, cfg) {
        return Ok(RelativePosition::Destination);
    }
    Ok(RelativePosition::Between)
}
