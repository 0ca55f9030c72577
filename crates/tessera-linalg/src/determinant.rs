//! Minors, determinants, cofactors and inverses.
//!
//! The determinant is computed by Laplace expansion along row 0, which
//! recurses through `minor(x, 0)` down to a 1x1 matrix. Stable const
//! generics cannot spell `N - 1` for a generic `N`, so [`Minor`] and
//! [`Determinant`] are implemented for each concrete size up to
//! [`MAX_DIM`]; the 1x1 [`Determinant`] impl is the base case that ends
//! the recursion.
//!
//! Expansion costs O(N!) and is only meant for the small sizes supported
//! here.

use log::debug;
use tessera_scalar::{is_zero, Field, Scalar};

use crate::augmented::AugmentedSystem;
use crate::error::{check_index, Axis, LinalgError, Result};
use crate::matrix::Matrix;
use crate::vector::FixedVector;

/// Largest dimension with [`Minor`] and [`Determinant`] impls.
pub const MAX_DIM: usize = 8;

/// Submatrix extraction by deleting one column and one row.
///
/// Implemented for every `Matrix<T, N, M>` with `2 <= N, M <= MAX_DIM`.
pub trait Minor {
    /// The `(N - 1) x (M - 1)` result type.
    type Output;

    /// Returns the matrix without column `x` and row `y`, remaining
    /// elements keeping their relative order.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Index`] if `x` or `y` is out of range.
    fn minor(&self, x: usize, y: usize) -> Result<Self::Output>;
}

/// Determinant and cofactor matrix of a square matrix.
///
/// Implemented for every `Matrix<T, N, N>` with `1 <= N <= MAX_DIM`.
pub trait Determinant: Sized {
    /// The element type.
    type Scalar: Scalar;

    /// Computes `Σ_x (-1)^x * get(x, 0) * minor(x, 0).det()`.
    fn det(&self) -> Self::Scalar;

    /// Computes the matrix `C` with `C(x, y) = (-1)^(x + y) * minor(x, y).det()`.
    fn cofactors(&self) -> Self;
}

/// Strategy used by [`Matrix::inverse`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InverseMethod {
    /// `adjoint() / det()`.
    Adjoint,
    /// Reduce `[A | I]` to `[I | A^-1]` with [`AugmentedSystem`].
    Gaussian,
}

impl Default for InverseMethod {
    /// `Gaussian` when built with the `gaussian-inverse` feature, `Adjoint`
    /// otherwise.
    fn default() -> Self {
        if cfg!(feature = "gaussian-inverse") {
            InverseMethod::Gaussian
        } else {
            InverseMethod::Adjoint
        }
    }
}

fn alternate<T: Scalar>(sign_index: usize, value: T) -> T {
    if sign_index % 2 == 0 {
        value
    } else {
        -value
    }
}

impl<T: Scalar> Determinant for Matrix<T, 1, 1> {
    type Scalar = T;

    fn det(&self) -> T {
        self[(0, 0)]
    }

    fn cofactors(&self) -> Self {
        // The minor of a 1x1 matrix is empty and has determinant one.
        Self::identity()
    }
}

macro_rules! impl_determinant {
    ($($n:literal),* $(,)?) => {
        $(
            impl<T: Scalar> Determinant for Matrix<T, $n, $n> {
                type Scalar = T;

                fn det(&self) -> T {
                    (0..$n).fold(T::zero(), |acc, x| {
                        let minor: Matrix<T, { $n - 1 }, { $n - 1 }> = self.strike(x, 0);
                        acc + alternate(x, self[(x, 0)] * minor.det())
                    })
                }

                fn cofactors(&self) -> Self {
                    Matrix::from_fn(|x, y| {
                        let minor: Matrix<T, { $n - 1 }, { $n - 1 }> = self.strike(x, y);
                        alternate(x + y, minor.det())
                    })
                }
            }
        )*
    };
}

macro_rules! impl_minor {
    (@cols $rows:tt; $($n:literal),*) => {
        $(
            impl_minor!(@rows $n; $rows);
        )*
    };
    (@rows $n:literal; [$($m:literal),*]) => {
        $(
            impl<T: Copy> Minor for Matrix<T, $n, $m> {
                type Output = Matrix<T, { $n - 1 }, { $m - 1 }>;

                fn minor(&self, x: usize, y: usize) -> Result<Self::Output> {
                    check_index(Axis::Column, x, $n)?;
                    check_index(Axis::Row, y, $m)?;
                    Ok(self.strike(x, y))
                }
            }
        )*
    };
    ($($n:literal),* $(,)?) => {
        impl_minor!(@cols [$($n),*]; $($n),*);
    };
}

impl_determinant!(2, 3, 4, 5, 6, 7, 8);
impl_minor!(2, 3, 4, 5, 6, 7, 8);

impl<T: Scalar, const N: usize> Matrix<T, N, N>
where
    Self: Determinant<Scalar = T>,
{
    /// Returns the determinant.
    #[must_use]
    pub fn det(&self) -> T {
        Determinant::det(self)
    }

    /// Returns the cofactor matrix.
    #[must_use]
    pub fn cofactors(&self) -> Self {
        Determinant::cofactors(self)
    }

    /// Returns the adjoint (adjugate), `cofactors().transpose()`.
    #[must_use]
    pub fn adjoint(&self) -> Self {
        self.cofactors().transpose()
    }
}

/// Singularity is judged on the row-equilibrated matrix (every row divided
/// by its largest element), so both inverse strategies accept or reject a
/// matrix regardless of its overall scale.
impl<T: Field, const N: usize> Matrix<T, N, N>
where
    Self: Determinant<Scalar = T>,
{
    /// Returns the inverse using [`InverseMethod::default`].
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::SingularMatrix`] if the matrix is singular.
    pub fn inverse(&self) -> Result<Self> {
        self.inverse_with(InverseMethod::default())
    }

    /// Returns the inverse computed with `method`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::SingularMatrix`] if the matrix is singular.
    pub fn inverse_with(&self, method: InverseMethod) -> Result<Self> {
        match method {
            InverseMethod::Adjoint => self.inverse_adjoint(),
            InverseMethod::Gaussian => self.inverse_gaussian(),
        }
    }

    /// Returns `adjoint() / det()`.
    ///
    /// Evaluated as `S⁻¹ D⁻¹` where `self = D S` and `D` holds the row
    /// divisors of the equilibrated matrix `S`, which keeps the division
    /// away from under- and overflow.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::SingularMatrix`] if the equilibrated
    /// determinant is within epsilon of zero.
    pub fn inverse_adjoint(&self) -> Result<Self> {
        let (scaled, divisors, det) = self.equilibrated_det()?;
        let inverse = scaled.adjoint() / det;
        Ok(Matrix::from_fn(|x, y| inverse[(x, y)] / divisors[x]))
    }

    /// Divides every element by the determinant.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::SingularMatrix`] if the matrix is singular.
    pub fn unit(&self) -> Result<Self> {
        self.equilibrated_det()?;
        let det = self.det();
        if det == T::zero() {
            debug!("determinant underflows to zero");
            return Err(LinalgError::SingularMatrix);
        }
        Ok(*self / det)
    }

    fn equilibrated_det(&self) -> Result<(Self, FixedVector<T, N>, T)> {
        let Some((scaled, divisors)) = self.row_equilibrated() else {
            debug!("matrix has a zero row");
            return Err(LinalgError::SingularMatrix);
        };
        let det = scaled.det();
        if is_zero(&det) {
            debug!("equilibrated determinant {det:?} is within epsilon of zero");
            return Err(LinalgError::SingularMatrix);
        }
        Ok((scaled, divisors, det))
    }
}

impl<T: Field, const N: usize> Matrix<T, N, N> {
    /// Returns the inverse by Gaussian elimination of `[A | I]`.
    ///
    /// Row `i` of the identity rides along as the auxiliary value of
    /// equation `i`; once the coefficients are reduced to the identity the
    /// auxiliary column holds the rows of the inverse. Rows are equilibrated
    /// first, so the pivot tolerance is relative to each row's scale.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::SingularMatrix`] if elimination leaves a
    /// zero row.
    pub fn inverse_gaussian(&self) -> Result<Self> {
        let (scaled, divisors) = self
            .row_equilibrated()
            .ok_or(LinalgError::SingularMatrix)?;
        let identity = Self::identity().into_row_vectors();
        let auxiliary = FixedVector::from_fn(|y| identity[y] / divisors[y]);
        let solution = AugmentedSystem::new(scaled, auxiliary)
            .solve()
            .map_err(|err| match err {
                LinalgError::SingularSystem => LinalgError::SingularMatrix,
                other => other,
            })?;
        Ok(Matrix::from_row_vectors(solution.into_array()))
    }
}
