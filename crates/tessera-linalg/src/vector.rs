//! Fixed-length vectors.
//!
//! `FixedVector<T, N>` is an ordered tuple of `N` values. Matrices store
//! their rows as fixed vectors, and the augmented solver keeps its
//! right-hand side in one.

use std::array;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};
use std::slice;

use tessera_scalar::{is_equal, Field, Scalar};

use crate::error::{check_index, Axis, LinalgError, Result};

/// A vector of `N` components.
#[derive(Clone, Copy, Debug)]
pub struct FixedVector<T, const N: usize>([T; N]);

impl<T, const N: usize> FixedVector<T, N> {
    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(components: [T; N]) -> Self {
        Self(components)
    }

    /// Creates a vector whose component `i` is `f(i)`.
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self(array::from_fn(f))
    }

    /// Returns the number of components.
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns true for the zero-length vector.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the components as an array.
    #[must_use]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Consumes the vector and returns its components.
    #[must_use]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Iterates over the components.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Applies `f` to every component.
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> FixedVector<U, N> {
        FixedVector(self.0.map(f))
    }

    /// Swaps components `i` and `j` in place.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Index`] if either index is `>= N`.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        check_index(Axis::Component, i, N)?;
        check_index(Axis::Component, j, N)?;
        self.0.swap(i, j);
        Ok(())
    }
}

impl<T: Copy, const N: usize> FixedVector<T, N> {
    /// Creates a vector from a slice of exactly `N` values.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if `values.len() != N`.
    pub fn from_slice(values: &[T]) -> Result<Self> {
        if values.len() != N {
            return Err(LinalgError::DimensionMismatch {
                expected: N,
                found: values.len(),
            });
        }
        Ok(Self::from_fn(|i| values[i]))
    }

    /// Returns component `i`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Index`] if `i >= N`.
    pub fn get(&self, i: usize) -> Result<T> {
        check_index(Axis::Component, i, N)?;
        Ok(self.0[i])
    }

    /// Replaces component `i`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Index`] if `i >= N`.
    pub fn set(&mut self, i: usize, value: T) -> Result<()> {
        check_index(Axis::Component, i, N)?;
        self.0[i] = value;
        Ok(())
    }
}

impl<T: Scalar, const N: usize> FixedVector<T, N> {
    /// The vector with every component zero.
    #[must_use]
    pub fn zero() -> Self {
        Self([T::zero(); N])
    }

    /// The unit vector along axis `i`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Index`] if `i >= N`.
    pub fn unit(i: usize) -> Result<Self> {
        check_index(Axis::Component, i, N)?;
        Ok(Self::from_fn(|j| if i == j { T::one() } else { T::zero() }))
    }

    /// Computes the dot product `Σ self[i] * other[i]`.
    #[must_use]
    pub fn dot(&self, other: &Self) -> T {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }
}

impl<T: Scalar, const N: usize> Default for FixedVector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const N: usize> From<[T; N]> for FixedVector<T, N> {
    fn from(components: [T; N]) -> Self {
        Self(components)
    }
}

impl<T, const N: usize> From<FixedVector<T, N>> for [T; N] {
    fn from(vector: FixedVector<T, N>) -> Self {
        vector.0
    }
}

impl<T, const N: usize> Index<usize> for FixedVector<T, N> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.0[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedVector<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.0[i]
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedVector<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Component-wise, epsilon-tolerant equality.
impl<T: Scalar, const N: usize> PartialEq for FixedVector<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| is_equal(a, b))
    }
}

impl<T: Copy + Add<Output = T>, const N: usize> Add for FixedVector<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

impl<T: Copy + Sub<Output = T>, const N: usize> Sub for FixedVector<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}

impl<T: Copy + Neg<Output = T>, const N: usize> Neg for FixedVector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|v| -v)
    }
}

impl<T: Scalar, const N: usize> Mul<T> for FixedVector<T, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.map(|v| v * rhs)
    }
}

impl<T: Field, const N: usize> Div<T> for FixedVector<T, N> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        self.map(|v| v / rhs)
    }
}

impl<T: Copy + AddAssign, const N: usize> AddAssign for FixedVector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a += b;
        }
    }
}

impl<T: Copy + SubAssign, const N: usize> SubAssign for FixedVector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a -= b;
        }
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for FixedVector<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        for a in &mut self.0 {
            *a *= rhs;
        }
    }
}

impl<T: Field, const N: usize> DivAssign<T> for FixedVector<T, N> {
    fn div_assign(&mut self, rhs: T) {
        for a in &mut self.0 {
            *a /= rhs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice() {
        let v = FixedVector::<f64, 3>::from_slice(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(v, FixedVector::new([1.0, 2.0, 3.0]));

        let err = FixedVector::<f64, 3>::from_slice(&[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            LinalgError::DimensionMismatch {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_get_set_bounds() {
        let mut v = FixedVector::new([1i64, 2, 3]);
        assert_eq!(v.get(2), Ok(3));
        assert!(v.get(3).is_err());
        v.set(0, 10).unwrap();
        assert_eq!(v[0], 10);
        assert_eq!(
            v.set(5, 0),
            Err(LinalgError::Index {
                axis: Axis::Component,
                index: 5,
                len: 3
            })
        );
    }

    #[test]
    fn test_arithmetic() {
        let a = FixedVector::new([1.0f64, 2.0, 3.0]);
        let b = FixedVector::new([4.0f64, 5.0, 6.0]);
        assert_eq!(a + b, FixedVector::new([5.0, 7.0, 9.0]));
        assert_eq!(b - a, FixedVector::new([3.0, 3.0, 3.0]));
        assert_eq!(a * 2.0, FixedVector::new([2.0, 4.0, 6.0]));
        assert_eq!(b / 2.0, FixedVector::new([2.0, 2.5, 3.0]));
        assert_eq!(-a, FixedVector::new([-1.0, -2.0, -3.0]));

        let mut c = a;
        c += b;
        c *= 0.5;
        assert_eq!(c, FixedVector::new([2.5, 3.5, 4.5]));
    }

    #[test]
    fn test_dot() {
        let a = FixedVector::new([1i64, 2, 3, 4]);
        let b = FixedVector::new([5i64, 6, 7, 8]);
        // 1*5 + 2*6 + 3*7 + 4*8 = 70
        assert_eq!(a.dot(&b), 70);
    }

    #[test]
    fn test_unit() {
        let e1 = FixedVector::<f64, 3>::unit(1).unwrap();
        assert_eq!(e1, FixedVector::new([0.0, 1.0, 0.0]));
        assert!(FixedVector::<f64, 3>::unit(3).is_err());
    }

    #[test]
    fn test_approx_eq() {
        let a = FixedVector::new([0.1f64 + 0.2, 1.0]);
        let b = FixedVector::new([0.3f64, 1.0]);
        assert_eq!(a, b);
        assert_ne!(a, FixedVector::new([0.3, 1.001]));
    }
}
