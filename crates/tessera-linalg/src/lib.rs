//! # tessera-linalg
//!
//! Fixed-dimension linear algebra over any [`Scalar`](tessera_scalar::Scalar).
//!
//! This crate provides:
//! - [`Matrix<T, N, M>`] with `N` columns and `M` rows, sized at compile time
//! - [`FixedVector<T, N>`] for columns, rows and right-hand sides
//! - Minors, determinants by Laplace expansion, cofactors, adjoints, inverses
//! - [`AugmentedSystem`] with row operations, echelon forms and `solve`
//! - Scale, translation, rotation and projection matrices
//! - Parallel batch solving via rayon
//!
//! Indices are `(x, y)`: `x` picks the column, `y` the row.
//!
//! ## Rings and fields
//!
//! Determinants, cofactors, adjoints and products need only
//! [`Scalar`](tessera_scalar::Scalar), so integer matrices support them
//! exactly:
//!
//! ```
//! use tessera_linalg::Matrix;
//!
//! let m = Matrix::from_rows([[2i64, 0], [0, 2]]);
//! assert_eq!(m.det(), 4);
//! assert_eq!(m.adjoint() * m, Matrix::<i64, 2, 2>::identity() * 4);
//! ```
//!
//! Inverses, `unit` and [`AugmentedSystem`] divide, and require
//! [`Field`](tessera_scalar::Field), which integers do not implement:
//!
//! ```compile_fail
//! use tessera_linalg::Matrix;
//!
//! let m = Matrix::from_rows([[2i64, 0], [0, 2]]);
//! let _ = m.inverse();
//! ```
//!
//! ```compile_fail
//! use tessera_linalg::{AugmentedSystem, FixedVector, Matrix};
//!
//! let system = AugmentedSystem::new(
//!     Matrix::from_rows([[2i64, 1], [1, -1]]),
//!     FixedVector::new([3, 0]),
//! );
//! let _ = system.solve();
//! ```
//!
//! ## Inverse strategy
//!
//! [`Matrix::inverse`] uses the adjoint method unless the crate is built
//! with the `gaussian-inverse` feature. Both strategies stay callable
//! through [`Matrix::inverse_with`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod augmented;
pub mod determinant;
pub mod error;
pub mod matrix;
pub mod parallel;
pub mod transform;
pub mod vector;

mod proptests;

pub use augmented::{AugmentedSystem, Auxiliary};
pub use determinant::{Determinant, InverseMethod, Minor, MAX_DIM};
pub use error::{Axis, LinalgError, Result};
pub use matrix::Matrix;
pub use parallel::{solve_batch, BatchConfig};
pub use vector::FixedVector;
