//! Augmented systems and Gaussian elimination.
//!
//! An [`AugmentedSystem`] pairs a square coefficient matrix with one
//! auxiliary value per row and stands for the `N` equations
//! `coefficients.row(i) · x = auxiliary[i]`. Reduction runs through three
//! representations of the same solution set:
//!
//! ```text
//! raw -> ordered -> row_echelon -> reduced_row_echelon
//! ```
//!
//! Each stage returns a new system. The row operations underneath are the
//! only mutating methods, and every one of them applies to a coefficient
//! row and its auxiliary value together.
//!
//! Every operation divides at some point, so the scalar type must be a
//! [`Field`]; integer systems are rejected at compile time.
//!
//! # Pivoting
//!
//! Rows are ordered by leading index only. This is not magnitude-based
//! partial pivoting and can lose precision on ill-conditioned systems.

use std::array;
use std::fmt::Debug;
use std::ops::{Add, Mul};

use log::{debug, trace};
use tessera_scalar::{is_zero, Field};

use crate::error::{check_index, Axis, LinalgError, Result};
use crate::matrix::Matrix;
use crate::vector::FixedVector;

/// Values that can ride along with a coefficient row.
///
/// Row operations scale auxiliary values by `T` and add them together.
/// Any scalar qualifies, as does `FixedVector<T, K>`, which solves for
/// `K` right-hand sides at once.
pub trait Auxiliary<T>: Copy + Debug + Send + Sync + Add<Output = Self> + Mul<T, Output = Self> {}

impl<T, A> Auxiliary<T> for A where
    A: Copy + Debug + Send + Sync + Add<Output = A> + Mul<T, Output = A>
{
}

/// A square linear system `coefficients · x = auxiliary`.
#[derive(Clone, Copy, Debug)]
pub struct AugmentedSystem<T, const N: usize, A = T> {
    coefficients: Matrix<T, N, N>,
    auxiliary: FixedVector<A, N>,
}

impl<T: Field, const N: usize, A: Auxiliary<T>> AugmentedSystem<T, N, A> {
    /// Creates a system from its coefficients and one auxiliary value per row.
    #[must_use]
    pub fn new(coefficients: Matrix<T, N, N>, auxiliary: FixedVector<A, N>) -> Self {
        Self {
            coefficients,
            auxiliary,
        }
    }

    /// Creates a system from a runtime-sized list of auxiliary values.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if `auxiliary.len() != N`.
    pub fn from_slice(coefficients: Matrix<T, N, N>, auxiliary: &[A]) -> Result<Self> {
        Ok(Self::new(coefficients, FixedVector::from_slice(auxiliary)?))
    }

    /// Returns the coefficient matrix.
    #[must_use]
    pub fn coefficients(&self) -> &Matrix<T, N, N> {
        &self.coefficients
    }

    /// Returns the auxiliary values.
    #[must_use]
    pub fn auxiliary(&self) -> &FixedVector<A, N> {
        &self.auxiliary
    }

    /// Consumes the system and returns its parts.
    #[must_use]
    pub fn into_parts(self) -> (Matrix<T, N, N>, FixedVector<A, N>) {
        (self.coefficients, self.auxiliary)
    }

    /// Returns the column of the first non-zero coefficient in row `y`, or
    /// `N` if the row is entirely zero.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Index`] if `y >= N`.
    pub fn leading_index(&self, y: usize) -> Result<usize> {
        check_index(Axis::Row, y, N)?;
        Ok(self.lead(y))
    }

    fn lead(&self, y: usize) -> usize {
        self.coefficients
            .row_ref(y)
            .iter()
            .position(|v| !is_zero(v))
            .unwrap_or(N)
    }

    /// Returns true if some coefficient row is entirely zero.
    #[must_use]
    pub fn has_zero_row(&self) -> bool {
        (0..N).any(|y| self.lead(y) == N)
    }

    /// Returns true if the row-echelon form has a zero coefficient row.
    ///
    /// [`AugmentedSystem::solve`] fails exactly on singular systems.
    #[must_use]
    pub fn is_singular(&self) -> bool {
        self.row_echelon().has_zero_row()
    }

    /// Returns the system with rows sorted by ascending leading index.
    ///
    /// Rows with equal leading indices keep their relative order.
    #[must_use]
    pub fn ordered(&self) -> Self {
        let leads: [usize; N] = array::from_fn(|y| self.lead(y));
        let mut order: [usize; N] = array::from_fn(|y| y);
        order.sort_by_key(|&y| leads[y]);

        Self {
            coefficients: Matrix::from_row_vectors(array::from_fn(|i| {
                *self.coefficients.row_ref(order[i])
            })),
            auxiliary: FixedVector::from_fn(|i| self.auxiliary[order[i]]),
        }
    }

    /// Swaps rows `a` and `b` in place.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Index`] if either row is out of range.
    pub fn swap_rows(&mut self, a: usize, b: usize) -> Result<()> {
        check_index(Axis::Row, a, N)?;
        check_index(Axis::Row, b, N)?;
        self.coefficients.swap_rows(a, b);
        self.auxiliary.swap(a, b)
    }

    /// Multiplies row `y` by `scale` in place.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Index`] if `y >= N`, or
    /// [`LinalgError::DegenerateScale`] if `scale` is within epsilon of zero.
    pub fn scale_row(&mut self, y: usize, scale: T) -> Result<()> {
        check_index(Axis::Row, y, N)?;
        if is_zero(&scale) {
            return Err(LinalgError::DegenerateScale { row: y });
        }
        self.scale(y, scale);
        Ok(())
    }

    fn scale(&mut self, y: usize, scale: T) {
        *self.coefficients.row_mut(y) *= scale;
        self.auxiliary[y] = self.auxiliary[y] * scale;
    }

    /// Adds `scale` times row `source` to row `target` in place.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Index`] if either row is out of range, or
    /// [`LinalgError::SelfAddition`] if `target == source`.
    pub fn add_row(&mut self, target: usize, source: usize, scale: T) -> Result<()> {
        check_index(Axis::Row, target, N)?;
        check_index(Axis::Row, source, N)?;
        if target == source {
            return Err(LinalgError::SelfAddition { row: target });
        }
        let addend = *self.coefficients.row_ref(source) * scale;
        *self.coefficients.row_mut(target) += addend;
        self.auxiliary[target] = self.auxiliary[target] + self.auxiliary[source] * scale;
        Ok(())
    }

    /// Clears coefficient `(x, y)` by adding a multiple of another row whose
    /// entry in column `x` is non-zero and whose leading index is at least
    /// `x`, so no column left of `x` is disturbed.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Index`] for out-of-range indices, or
    /// [`LinalgError::NoEliminableRow`] if no such row exists.
    pub fn eliminate_from_right(&mut self, x: usize, y: usize) -> Result<()> {
        check_index(Axis::Column, x, N)?;
        check_index(Axis::Row, y, N)?;
        if is_zero(&self.coefficients[(x, y)]) {
            return Ok(());
        }
        let donor = (0..N)
            .find(|&iy| iy != y && self.can_donate(x, iy))
            .ok_or(LinalgError::NoEliminableRow { x, y })?;
        self.eliminate_with(x, y, donor)
    }

    /// Clears coefficient `(x, y)` like [`Self::eliminate_from_right`], but
    /// only takes the donor from rows strictly below `y`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Index`] for out-of-range indices, or
    /// [`LinalgError::NoEliminableRow`] if no such row exists.
    pub fn eliminate_from_below(&mut self, x: usize, y: usize) -> Result<()> {
        check_index(Axis::Column, x, N)?;
        check_index(Axis::Row, y, N)?;
        if is_zero(&self.coefficients[(x, y)]) {
            return Ok(());
        }
        let donor = (y + 1..N)
            .find(|&iy| self.can_donate(x, iy))
            .ok_or(LinalgError::NoEliminableRow { x, y })?;
        self.eliminate_with(x, y, donor)
    }

    fn can_donate(&self, x: usize, iy: usize) -> bool {
        !is_zero(&self.coefficients[(x, iy)]) && self.lead(iy) >= x
    }

    fn eliminate_with(&mut self, x: usize, y: usize, donor: usize) -> Result<()> {
        let factor = -(self.coefficients[(x, y)] / self.coefficients[(x, donor)]);
        trace!("eliminating ({x}, {y}) with row {donor}, factor {factor:?}");
        self.add_row(y, donor, factor)?;
        // cancel round-off left in the cleared entry
        self.coefficients[(x, y)] = T::zero();
        Ok(())
    }

    /// Returns the row-echelon form.
    ///
    /// Column by column, every row that shares its leading index with the
    /// row above is cleared against the first row leading in that column.
    /// The system is re-ordered after each elimination, since clearing an
    /// entry moves that row's leading index right. All-zero columns are
    /// skipped.
    #[must_use]
    pub fn row_echelon(&self) -> Self {
        let mut system = self.ordered();

        for x in 0..N {
            loop {
                let Some(pivot) = (0..N).find(|&y| system.lead(y) == x) else {
                    break;
                };
                let Some(y) = (pivot + 1..N).find(|&y| system.lead(y) == x) else {
                    break;
                };
                if let Err(err) = system.eliminate_from_right(x, y) {
                    debug!("leaving column {x} as is: {err}");
                    break;
                }
                system = system.ordered();
            }
        }

        system.ordered()
    }

    /// Returns the reduced row-echelon form, in which every leading
    /// coefficient is one and is the only non-zero entry of its column.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::SingularSystem`] if the row-echelon form has a
    /// zero row.
    pub fn reduced_row_echelon(&self) -> Result<Self> {
        let mut system = self.row_echelon();
        if system.has_zero_row() {
            debug!("row-echelon form has a zero row");
            return Err(LinalgError::SingularSystem);
        }

        for y in 0..N {
            let lead = system.lead(y);
            let pivot = system.coefficients[(lead, y)];
            system.scale(y, T::one() / pivot);
            system.coefficients[(lead, y)] = T::one();

            for x in lead + 1..N {
                system.eliminate_from_below(x, y)?;
            }
        }

        Ok(system)
    }

    /// Solves the system.
    ///
    /// Once the coefficients are reduced to the identity, the auxiliary
    /// values are the solution.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::SingularSystem`] if the system is singular.
    pub fn solve(&self) -> Result<FixedVector<A, N>> {
        Ok(self.reduced_row_echelon()?.auxiliary)
    }
}

impl<T: Field, const N: usize> AugmentedSystem<T, N, T> {
    /// Returns `coefficients · x - auxiliary`.
    #[must_use]
    pub fn residual(&self, x: &FixedVector<T, N>) -> FixedVector<T, N> {
        self.coefficients * *x - self.auxiliary
    }
}
