//! Dense matrices with compile-time dimensions.
//!
//! `Matrix<T, N, M>` has `N` columns and `M` rows. Elements are addressed
//! as `(x, y)` with `x` the column and `y` the row. Row-major input is the
//! only element order exposed by the constructors; the rows are stored as
//! [`FixedVector`]s, which the solver relies on for its row operations.

use std::array;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use tessera_scalar::{Field, Scalar};

use crate::error::{check_index, Axis, LinalgError, Result};
use crate::vector::FixedVector;

/// A matrix with `N` columns and `M` rows.
#[derive(Clone, Copy, Debug)]
pub struct Matrix<T, const N: usize, const M: usize> {
    rows: [FixedVector<T, N>; M],
}

impl<T, const N: usize, const M: usize> Matrix<T, N, M> {
    /// Creates a matrix from `M` rows of `N` values each.
    #[must_use]
    pub fn from_rows(rows: [[T; N]; M]) -> Self {
        Self {
            rows: rows.map(FixedVector::new),
        }
    }

    /// Creates a matrix from `M` row vectors.
    #[must_use]
    pub const fn from_row_vectors(rows: [FixedVector<T, N>; M]) -> Self {
        Self { rows }
    }

    /// Creates a matrix whose element `(x, y)` is `f(x, y)`.
    pub fn from_fn<F: FnMut(usize, usize) -> T>(mut f: F) -> Self {
        Self {
            rows: array::from_fn(|y| FixedVector::from_fn(|x| f(x, y))),
        }
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn num_cols(&self) -> usize {
        N
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn num_rows(&self) -> usize {
        M
    }

    /// Returns the rows of the matrix.
    #[must_use]
    pub const fn rows(&self) -> &[FixedVector<T, N>; M] {
        &self.rows
    }

    /// Consumes the matrix and returns its rows.
    #[must_use]
    pub fn into_row_vectors(self) -> [FixedVector<T, N>; M] {
        self.rows
    }

    pub(crate) fn row_ref(&self, y: usize) -> &FixedVector<T, N> {
        &self.rows[y]
    }

    pub(crate) fn row_mut(&mut self, y: usize) -> &mut FixedVector<T, N> {
        &mut self.rows[y]
    }

    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        self.rows.swap(a, b);
    }
}

impl<T: Copy, const N: usize, const M: usize> Matrix<T, N, M> {
    /// Creates a matrix from `N * M` values given in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if `values` does not hold
    /// exactly `N * M` elements.
    pub fn from_row_major(values: &[T]) -> Result<Self> {
        if values.len() != N * M {
            return Err(LinalgError::DimensionMismatch {
                expected: N * M,
                found: values.len(),
            });
        }
        Ok(Self::from_fn(|x, y| values[y * N + x]))
    }

    /// Returns element `(X, Y)`, checked at compile time.
    ///
    /// The bounds check is a post-monomorphization error: it fires when the
    /// call is instantiated with concrete indices, not during type checking
    /// of generic code.
    ///
    /// ```compile_fail
    /// use tessera_linalg::Matrix;
    ///
    /// let m = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
    /// let _ = m.at::<2, 0>();
    /// ```
    #[must_use]
    pub fn at<const X: usize, const Y: usize>(&self) -> T {
        const { assert!(X < N && Y < M, "matrix index out of bounds") };
        self.rows[Y][X]
    }

    /// Replaces element `(X, Y)`, checked at compile time like [`Self::at`].
    pub fn set_at<const X: usize, const Y: usize>(&mut self, value: T) {
        const { assert!(X < N && Y < M, "matrix index out of bounds") };
        self.rows[Y][X] = value;
    }

    /// Returns element `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Index`] if `x >= N` or `y >= M`.
    pub fn get(&self, x: usize, y: usize) -> Result<T> {
        check_index(Axis::Column, x, N)?;
        check_index(Axis::Row, y, M)?;
        Ok(self.rows[y][x])
    }

    /// Replaces element `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Index`] if `x >= N` or `y >= M`.
    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<()> {
        check_index(Axis::Column, x, N)?;
        check_index(Axis::Row, y, M)?;
        self.rows[y][x] = value;
        Ok(())
    }

    /// Returns row `y`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Index`] if `y >= M`.
    pub fn row(&self, y: usize) -> Result<FixedVector<T, N>> {
        check_index(Axis::Row, y, M)?;
        Ok(self.rows[y])
    }

    /// Returns column `x`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Index`] if `x >= N`.
    pub fn column(&self, x: usize) -> Result<FixedVector<T, M>> {
        check_index(Axis::Column, x, N)?;
        Ok(FixedVector::from_fn(|y| self.rows[y][x]))
    }

    /// Replaces row `y`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Index`] if `y >= M`.
    pub fn set_row(&mut self, y: usize, row: FixedVector<T, N>) -> Result<()> {
        check_index(Axis::Row, y, M)?;
        self.rows[y] = row;
        Ok(())
    }

    /// Replaces column `x`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Index`] if `x >= N`.
    pub fn set_column(&mut self, x: usize, column: FixedVector<T, M>) -> Result<()> {
        check_index(Axis::Column, x, N)?;
        for (row, value) in self.rows.iter_mut().zip(column.iter()) {
            row[x] = *value;
        }
        Ok(())
    }

    /// Returns the transpose, with `result(x, y) == self(y, x)`.
    #[must_use]
    pub fn transpose(&self) -> Matrix<T, M, N> {
        Matrix::from_fn(|x, y| self.rows[x][y])
    }

    /// Applies `f` to every element.
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Matrix<U, N, M> {
        Matrix {
            rows: self.rows.map(|row| row.map(&mut f)),
        }
    }

    /// Deletes column `x` and row `y`.
    ///
    /// `P` and `Q` must be `N - 1` and `M - 1`; the [`crate::Minor`] impls
    /// supply them for each concrete size.
    pub(crate) fn strike<const P: usize, const Q: usize>(
        &self,
        x: usize,
        y: usize,
    ) -> Matrix<T, P, Q> {
        const { assert!(P + 1 == N && Q + 1 == M, "minor must drop one row and one column") };
        Matrix::from_fn(|mx, my| {
            let sx = if mx < x { mx } else { mx + 1 };
            let sy = if my < y { my } else { my + 1 };
            self.rows[sy][sx]
        })
    }
}

impl<T: Scalar, const N: usize, const M: usize> Matrix<T, N, M> {
    /// The matrix with every element zero.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            rows: [FixedVector::zero(); M],
        }
    }
}

impl<T: Field, const N: usize, const M: usize> Matrix<T, N, M> {
    /// Divides every row by its element of largest magnitude.
    ///
    /// Returns the scaled matrix together with the divisor of each row, or
    /// `None` if some row is exactly zero. The largest magnitude of every
    /// scaled row is one, so absolute tolerances become scale-free.
    pub(crate) fn row_equilibrated(&self) -> Option<(Self, FixedVector<T, M>)> {
        let divisors = FixedVector::from_fn(|y| {
            self.rows[y].iter().copied().fold(T::zero(), |best, v| {
                if v.magnitude() > best.magnitude() {
                    v
                } else {
                    best
                }
            })
        });
        if divisors.iter().any(|d| *d == T::zero()) {
            return None;
        }
        let rows = array::from_fn(|y| self.rows[y] / divisors[y]);
        Some((Self { rows }, divisors))
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// The identity matrix.
    #[must_use]
    pub fn identity() -> Self {
        Self::from_fn(|x, y| if x == y { T::one() } else { T::zero() })
    }

    /// Returns the sum of the diagonal.
    #[must_use]
    pub fn trace(&self) -> T {
        (0..N).fold(T::zero(), |acc, i| acc + self.rows[i][i])
    }
}

impl<T, const N: usize, const M: usize> Index<(usize, usize)> for Matrix<T, N, M> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &T {
        &self.rows[y][x]
    }
}

impl<T, const N: usize, const M: usize> IndexMut<(usize, usize)> for Matrix<T, N, M> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        &mut self.rows[y][x]
    }
}

impl<T: Scalar, const N: usize, const M: usize> From<[[T; N]; M]> for Matrix<T, N, M> {
    fn from(rows: [[T; N]; M]) -> Self {
        Self::from_rows(rows)
    }
}

/// Element-wise, epsilon-tolerant equality.
impl<T: Scalar, const N: usize, const M: usize> PartialEq for Matrix<T, N, M> {
    fn eq(&self, other: &Self) -> bool {
        self.rows.iter().zip(other.rows.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Scalar, const N: usize, const M: usize> Add for Matrix<T, N, M> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            rows: array::from_fn(|y| self.rows[y] + rhs.rows[y]),
        }
    }
}

impl<T: Scalar, const N: usize, const M: usize> Sub for Matrix<T, N, M> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            rows: array::from_fn(|y| self.rows[y] - rhs.rows[y]),
        }
    }
}

impl<T: Scalar, const N: usize, const M: usize> Neg for Matrix<T, N, M> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|v| -v)
    }
}

impl<T: Scalar, const N: usize, const M: usize> Mul<T> for Matrix<T, N, M> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.map(|v| v * rhs)
    }
}

impl<T: Field, const N: usize, const M: usize> Div<T> for Matrix<T, N, M> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        self.map(|v| v / rhs)
    }
}

/// Matrix product: `(N x M) * (O x N) -> (O x M)` in columns-by-rows.
impl<T: Scalar, const N: usize, const M: usize, const O: usize> Mul<Matrix<T, O, N>>
    for Matrix<T, N, M>
{
    type Output = Matrix<T, O, M>;

    fn mul(self, rhs: Matrix<T, O, N>) -> Matrix<T, O, M> {
        Matrix::from_fn(|x, y| {
            (0..N).fold(T::zero(), |acc, k| acc + self.rows[y][k] * rhs.rows[k][x])
        })
    }
}

impl<T: Scalar, const N: usize, const M: usize> Mul<FixedVector<T, N>> for Matrix<T, N, M> {
    type Output = FixedVector<T, M>;

    fn mul(self, rhs: FixedVector<T, N>) -> FixedVector<T, M> {
        FixedVector::from_fn(|y| self.rows[y].dot(&rhs))
    }
}

impl<T: Scalar, const N: usize, const M: usize> AddAssign for Matrix<T, N, M> {
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.rows.iter_mut().zip(rhs.rows) {
            *a += b;
        }
    }
}

impl<T: Scalar, const N: usize, const M: usize> SubAssign for Matrix<T, N, M> {
    fn sub_assign(&mut self, rhs: Self) {
        for (a, b) in self.rows.iter_mut().zip(rhs.rows) {
            *a -= b;
        }
    }
}

impl<T: Scalar, const N: usize, const M: usize> MulAssign<T> for Matrix<T, N, M> {
    fn mul_assign(&mut self, rhs: T) {
        for row in &mut self.rows {
            *row *= rhs;
        }
    }
}

impl<T: Field, const N: usize, const M: usize> DivAssign<T> for Matrix<T, N, M> {
    fn div_assign(&mut self, rhs: T) {
        for row in &mut self.rows {
            *row /= rhs;
        }
    }
}
