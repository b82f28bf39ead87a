//! Entry points for callers that already hold `nalgebra` vectors.
//!
//! - `signed_area` computes the same quantity as `orient::area_triangle_2d`
//!   through a 2×2 determinant.
//! - `orientation_code` returns the integer tag of `RelativePosition`.

use nalgebra::{Matrix2, Vector2};

use crate::error::GeomError;
use crate::orient::{orientation_2d, RelativePosition};

/// Pre: `a`, `b`, `c` are 2D column vectors.
/// Post: half the determinant of `[b - a, c - a]`; positive for a
/// counterclockwise triangle.
pub fn signed_area(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let m = Matrix2::from_columns(&[b - a, c - a]);
    m.determinant() / 2.0
}

/// Integer code of the position of `c` against `a → b` (`LEFT = 0` …
/// `DESTINATION = 6`).
pub fn orientation_code(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
) -> Result<i32, GeomError> {
    orientation_2d(a.into(), b.into(), c.into()).map(RelativePosition::code)
}
