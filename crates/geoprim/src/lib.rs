//! Fixed-dimension vector algebra and the 2D orientation predicate.
//!
//! Layers (leaf first)
//! - `cfg`: absolute tolerance and `is_equal_d`.
//! - `vector`: generic `Vector<T, D>` (points are vectors).
//! - `cross`: 2D scalar and 3D vector cross products.
//! - `orient`: signed triangle area and `orientation_2d`.
//!
//! `api` adapts the predicate to `nalgebra` inputs; `sample` draws
//! reproducible test inputs.

pub mod api;
pub mod cfg;
pub mod cross;
pub mod error;
pub mod orient;
pub mod sample;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{is_equal_d, GeomCfg, TOLERANCE};
pub use cross::{cross_product_2d, cross_product_3d};
pub use error::GeomError;
pub use orient::{
    area_triangle_2d, area_triangle_2d_with, orientation_2d, orientation_2d_with,
    RelativePosition,
};
pub use vector::{
    dot_product, Coord, Point2d, Point3d, Vector, Vector2d, Vector2f, Vector3d, Vector3f,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{is_equal_d, GeomCfg, TOLERANCE};
    pub use crate::cross::{cross_product_2d, cross_product_3d};
    pub use crate::error::GeomError;
    pub use crate::orient::{area_triangle_2d, orientation_2d, RelativePosition};
    pub use crate::sample::{sample_collinear, sample_triple, ReplayToken, SampleCfg};
    pub use crate::vector::{dot_product, Point2d, Point3d, Vector, Vector2f, Vector3f, X, Y, Z};
}
