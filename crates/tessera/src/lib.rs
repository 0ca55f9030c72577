//! # Tessera
//!
//! Generic fixed-dimension linear algebra.
//!
//! Matrix and vector sizes are const generics, so shape mismatches in
//! products, sums and comparisons are compile errors rather than runtime
//! failures.
//!
//! ## Features
//!
//! - **Scalars**: `f32`, `f64`, `i32`, `i64`, and complex numbers with the
//!   `complex` feature, all compared with a per-type epsilon
//! - **Matrices**: transpose, minors, determinants, cofactors, adjoints,
//!   inverses by the adjoint method or Gaussian elimination
//! - **Systems**: row operations, row-echelon and reduced row-echelon forms,
//!   solving for one or many right-hand sides
//! - **Transforms**: scale, translation, rotation and projection matrices
//!
//! ## Quick Start
//!
//! ```rust
//! use tessera::prelude::*;
//!
//! let a = Matrix::from_rows([[2.0, 1.0], [1.0, -1.0]]);
//! let x = AugmentedSystem::new(a, FixedVector::new([3.0, 0.0])).solve()?;
//! assert_eq!(x, FixedVector::new([1.0, 1.0]));
//! assert_eq!(a * a.inverse()?, Matrix::identity());
//! # Ok::<(), LinalgError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use tessera_linalg as linalg;
pub use tessera_scalar as scalar;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use tessera_linalg::transform;
    pub use tessera_linalg::{
        AugmentedSystem, Determinant, FixedVector, InverseMethod, LinalgError, Matrix, Minor,
    };
    pub use tessera_scalar::{is_equal, is_zero, Field, FloatScalar, Scalar};
}
