//! Cross products in 2D (scalar) and 3D (vector).

use crate::vector::{Coord, Vector, X, Y, Z};

/// Signed z-component of the 3D cross product of two planar vectors.
/// Equals twice the signed area of the triangle `(0, v1, v2)`; positive when
/// `v1 → v2` turns counterclockwise.
#[inline]
pub fn cross_product_2d<T: Coord>(v1: Vector<T, 2>, v2: Vector<T, 2>) -> T {
    v1[X] * v2[Y] - v1[Y] * v2[X]
}

/// Right-handed cross product `v1 × v2`.
#[inline]
pub fn cross_product_3d<T: Coord>(v1: Vector<T, 3>, v2: Vector<T, 3>) -> Vector<T, 3> {
    Vector::xyz(
        v1[Y] * v2[Z] - v1[Z] * v2[Y],
        v1[Z] * v2[X] - v1[X] * v2[Z],
        v1[X] * v2[Y] - v1[Y] * v2[X],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{Vector2d, Vector2f, Vector3d, Vector3f};
    use nalgebra::Vector3;
    use proptest::prelude::*;

    #[test]
    fn cross_2d_sign_and_magnitude() {
        let ex = Vector2f::xy(1.0, 0.0);
        let ey = Vector2f::xy(0.0, 1.0);
        assert_eq!(cross_product_2d(ex, ey), 1.0);
        assert_eq!(cross_product_2d(ey, ex), -1.0);
        assert_eq!(cross_product_2d(ex, ex * 3.0), 0.0);
        assert_eq!(cross_product_2d(Vector::xy(2, 1), Vector::xy(1, 3)), 5);
    }

    #[test]
    fn cross_3d_basis() {
        let ex = Vector3f::xyz(1.0, 0.0, 0.0);
        let ey = Vector3f::xyz(0.0, 1.0, 0.0);
        let ez = Vector3f::xyz(0.0, 0.0, 1.0);
        assert_eq!(cross_product_3d(ex, ey), ez);
        assert_eq!(cross_product_3d(ey, ez), ex);
        assert_eq!(cross_product_3d(ez, ex), ey);
        assert_eq!(cross_product_3d(ey, ex), -ez);
        // planar inputs: z-component is the 2D cross product
        let a = Vector3f::from_xy(2.0, 1.0);
        let b = Vector3f::from_xy(-1.0, 4.0);
        let c = cross_product_3d(a, b);
        assert_eq!((c.x(), c.y()), (0.0, 0.0));
        assert_eq!(c.z(), cross_product_2d(Vector2f::xy(2.0, 1.0), Vector2f::xy(-1.0, 4.0)));
    }

    #[test]
    fn cross_3d_matches_nalgebra() {
        let a = Vector3d::xyz(0.3, -1.2, 2.5);
        let b = Vector3d::xyz(-4.0, 0.7, 1.1);
        let expected = Vector3::<f64>::from(a).cross(&Vector3::from(b));
        assert_eq!(cross_product_3d(a, b), Vector3d::from(expected));
    }

    fn vec2() -> impl Strategy<Value = Vector2d> {
        (-1e3..1e3f64, -1e3..1e3f64).prop_map(|(x, y)| Vector2d::xy(x, y))
    }

    proptest! {
        #[test]
        fn cross_2d_is_antisymmetric(u in vec2(), v in vec2()) {
            prop_assert_eq!(cross_product_2d(u, v), -cross_product_2d(v, u));
        }

        #[test]
        fn cross_3d_is_orthogonal(x in -10.0..10.0f64, y in -10.0..10.0f64, z in -10.0..10.0f64) {
            let u = Vector3d::xyz(x, y, z);
            let v = Vector3d::xyz(y, -z, 1.0);
            let w = cross_product_3d(u, v);
            prop_assert!(w.dot(&u).abs() < 1e-9);
            prop_assert!(w.dot(&v).abs() < 1e-9);
        }
    }
}
