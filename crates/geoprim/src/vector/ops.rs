//! Component-wise operators and indexing for `Vector`.

use std::ops::{Add, AddAssign, Index, IndexMut, Mul, Neg, Sub, SubAssign};

use super::{Coord, Vector};

impl<T: Coord, const D: usize> Add for Vector<T, D> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(std::array::from_fn(|i| self.coords[i] + rhs.coords[i]))
    }
}

impl<T: Coord, const D: usize> Sub for Vector<T, D> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(std::array::from_fn(|i| self.coords[i] - rhs.coords[i]))
    }
}

impl<T: Coord + Neg<Output = T>, const D: usize> Neg for Vector<T, D> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(self.coords.map(|c| -c))
    }
}

/// Scalar multiplication.
impl<T: Coord, const D: usize> Mul<T> for Vector<T, D> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        Self::new(self.coords.map(|c| c * rhs))
    }
}

impl<T: Coord, const D: usize> AddAssign for Vector<T, D> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Coord, const D: usize> SubAssign for Vector<T, D> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

// Out-of-range indices panic like slice indexing; use `get`/`try_assign`
// for the non-panicking forms.
impl<T, const D: usize> Index<usize> for Vector<T, D> {
    type Output = T;
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.coords[index]
    }
}

impl<T, const D: usize> IndexMut<usize> for Vector<T, D> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.coords[index]
    }
}
