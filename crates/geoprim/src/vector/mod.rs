//! Fixed-dimension vectors and points.
//!
//! Purpose
//! - One generic value type `Vector<T, D>` over an arithmetic scalar `T` and
//!   a compile-time dimension `D ≥ 2`. Points are the same type under the
//!   `Point2d`/`Point3d` aliases.
//! - Equality is tolerance-aware (every coordinate pair within `TOLERANCE`),
//!   so `Vector` deliberately has no `PartialOrd`; lexicographic ordering is
//!   exposed as `lex_lt`/`lex_gt`/`lex_cmp` instead.
//!
//! Code cross-refs: `cfg::{TOLERANCE, GeomCfg}`, `cross`, `orient`.

mod ops;

use std::cmp::Ordering;
use std::fmt;

use nalgebra::SVector;
use num_traits::{Float, Num, NumCast};

use crate::cfg::GeomCfg;
use crate::error::GeomError;

pub const DIM2: usize = 2;
pub const DIM3: usize = 3;

/// Axis indices.
pub const X: usize = 0;
pub const Y: usize = 1;
pub const Z: usize = 2;

/// Scalar types a `Vector` can hold (integers and floats).
pub trait Coord: Copy + PartialOrd + Num + NumCast + fmt::Debug + 'static {
    /// Widen to f64 for norms, dot products and tolerance checks.
    #[inline]
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl<T> Coord for T where T: Copy + PartialOrd + Num + NumCast + fmt::Debug + 'static {}

/// Fixed-size coordinate tuple.
///
/// Invariants:
/// - `D ≥ 2` (rejected at compile time by every constructor).
/// - Plain value type: `Copy`, operators return new vectors; only
///   `normalize`, `assign` and the `*Assign` operators mutate.
#[derive(Clone, Copy, Debug)]
pub struct Vector<T, const D: usize> {
    coords: [T; D],
}

pub type Vector2f = Vector<f32, DIM2>;
pub type Vector3f = Vector<f32, DIM3>;
pub type Vector2d = Vector<f64, DIM2>;
pub type Vector3d = Vector<f64, DIM3>;
pub type Point2d = Vector<f64, DIM2>;
pub type Point3d = Vector<f64, DIM3>;

impl<T: Coord, const D: usize> Vector<T, D> {
    const DIM_AT_LEAST_2: () = assert!(D >= DIM2, "vector dimension should be at least 2");

    #[inline]
    pub fn new(coords: [T; D]) -> Self {
        let () = Self::DIM_AT_LEAST_2;
        Self { coords }
    }

    #[inline]
    pub fn zeros() -> Self {
        Self::new([T::zero(); D])
    }

    #[inline]
    pub const fn dim(&self) -> usize {
        D
    }

    #[inline]
    pub fn coords(&self) -> &[T; D] {
        &self.coords
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.coords.iter()
    }

    #[inline]
    pub fn x(&self) -> T {
        self.coords[X]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.coords[Y]
    }

    /// Coordinate at `index`, or `None` outside `[0, D)`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<T> {
        self.coords.get(index).copied()
    }

    /// Set one coordinate. Panics when `index >= D`.
    #[inline]
    pub fn assign(&mut self, index: usize, value: T) {
        self.coords[index] = value;
    }

    /// Set one coordinate, reporting an out-of-range index instead of panicking.
    pub fn try_assign(&mut self, index: usize, value: T) -> Result<(), GeomError> {
        let slot = self
            .coords
            .get_mut(index)
            .ok_or(GeomError::IndexOutOfBounds { index, dim: D })?;
        *slot = value;
        Ok(())
    }

    /// Every coordinate pair within `cfg.tolerance`.
    pub fn approx_eq_with(&self, other: &Self, cfg: &GeomCfg) -> bool {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .all(|(&a, &b)| cfg.is_equal(a.as_f64(), b.as_f64()))
    }

    /// Sum of pairwise coordinate products, accumulated in f64.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .map(|(&a, &b)| a.as_f64() * b.as_f64())
            .sum()
    }

    /// Euclidean norm. Scaled by the largest |coordinate| so finite inputs
    /// near `f64::MAX` do not overflow the sum of squares.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        let (scale, unit) = self.scaled_norm();
        scale * unit
    }

    /// `(s, n)` with `s = max |c_i|` and `n = |v / s|`; `(0, 0)` for the zero
    /// vector. NaN or infinite coordinates give a NaN or infinite `s`.
    fn scaled_norm(&self) -> (f64, f64) {
        let mut scale = 0.0_f64;
        for &c in self.coords.iter() {
            let a = c.as_f64().abs();
            if a.is_nan() {
                return (f64::NAN, 1.0);
            }
            scale = scale.max(a);
        }
        if scale == 0.0 {
            return (0.0, 0.0);
        }
        if scale.is_infinite() {
            return (scale, 1.0);
        }
        let unit = self
            .coords
            .iter()
            .map(|&c| {
                let r = c.as_f64() / scale;
                r * r
            })
            .sum::<f64>()
            .sqrt();
        (scale, unit)
    }

    /// Every coordinate is finite (no NaN, no infinity).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.coords.iter().all(|&c| c.as_f64().is_finite())
    }

    /// Strict lexicographic `<`: the first differing coordinate decides.
    pub fn lex_lt(&self, other: &Self) -> bool {
        for (a, b) in self.coords.iter().zip(other.coords.iter()) {
            if a < b {
                return true;
            } else if a > b {
                return false;
            }
        }
        false
    }

    /// Strict lexicographic `>`: the first differing coordinate decides.
    pub fn lex_gt(&self, other: &Self) -> bool {
        for (a, b) in self.coords.iter().zip(other.coords.iter()) {
            if a > b {
                return true;
            } else if a < b {
                return false;
            }
        }
        false
    }

    /// Lexicographic comparison; `None` if a NaN is reached before a decision.
    pub fn lex_cmp(&self, other: &Self) -> Option<Ordering> {
        for (a, b) in self.coords.iter().zip(other.coords.iter()) {
            match a.partial_cmp(b)? {
                Ordering::Equal => continue,
                ord => return Some(ord),
            }
        }
        Some(Ordering::Equal)
    }
}

impl<T: Coord + Float, const D: usize> Vector<T, D> {
    /// Divide every coordinate by the magnitude, in place.
    ///
    /// On failure the vector is left unchanged: a NaN or infinite coordinate
    /// gives [`GeomError::NonFinite`], a magnitude within tolerance of zero
    /// gives [`GeomError::ZeroVector`].
    pub fn normalize(&mut self) -> Result<(), GeomError> {
        if !self.is_finite() {
            return Err(GeomError::NonFinite);
        }
        let (scale, unit) = self.scaled_norm();
        if crate::cfg::is_equal_d(scale * unit, 0.0) {
            return Err(GeomError::ZeroVector);
        }
        let mut out = self.coords;
        for c in out.iter_mut() {
            // |c / scale / unit| <= 1, always representable in T
            *c = <T as NumCast>::from((*c).as_f64() / scale / unit).ok_or(GeomError::NonFinite)?;
        }
        self.coords = out;
        Ok(())
    }

    /// Unit vector in the same direction.
    pub fn normalized(mut self) -> Result<Self, GeomError> {
        self.normalize()?;
        Ok(self)
    }
}

impl<T: Coord> Vector<T, DIM2> {
    #[inline]
    pub fn xy(x: T, y: T) -> Self {
        Self::new([x, y])
    }
}

impl<T: Coord> Vector<T, DIM3> {
    #[inline]
    pub fn xyz(x: T, y: T, z: T) -> Self {
        Self::new([x, y, z])
    }

    /// 3D vector in the `z = 0` plane.
    #[inline]
    pub fn from_xy(x: T, y: T) -> Self {
        Self::new([x, y, T::zero()])
    }

    #[inline]
    pub fn z(&self) -> T {
        self.coords[Z]
    }
}

impl<T: Coord, const D: usize> Default for Vector<T, D> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Coord, const D: usize> From<[T; D]> for Vector<T, D> {
    #[inline]
    fn from(coords: [T; D]) -> Self {
        Self::new(coords)
    }
}

impl<T: Coord, const D: usize> From<Vector<T, D>> for SVector<T, D> {
    #[inline]
    fn from(v: Vector<T, D>) -> Self {
        SVector::from(v.coords)
    }
}

impl<T: Coord, const D: usize> From<SVector<T, D>> for Vector<T, D> {
    #[inline]
    fn from(v: SVector<T, D>) -> Self {
        Self::new(std::array::from_fn(|i| v[i]))
    }
}

/// Tolerance-aware: equal iff every coordinate pair satisfies `is_equal_d`.
impl<T: Coord, const D: usize> PartialEq for Vector<T, D> {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq_with(other, &GeomCfg::default())
    }
}

impl<T: fmt::Display, const D: usize> fmt::Display for Vector<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

/// Free-function form of [`Vector::dot`].
#[inline]
pub fn dot_product<T: Coord, const D: usize>(v1: &Vector<T, D>, v2: &Vector<T, D>) -> f64 {
    v1.dot(v2)
}
