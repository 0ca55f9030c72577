//! # tessera-scalar
//!
//! Scalar contract for the tessera linear algebra crates.
//!
//! This crate provides:
//! - The [`Scalar`] trait every vector and matrix element implements
//! - [`Field`] for scalars with division (inverses, elimination)
//! - [`FloatScalar`] for real floating types (rotations, projections)
//! - Epsilon-tolerant predicates [`is_zero`] and [`is_equal`]
//! - Implementations for `f32`, `f64`, `i32`, `i64` and, with the
//!   `complex` feature, `num_complex::Complex<f32>` / `Complex<f64>`
//!
//! ## Tolerances
//!
//! | type                 | `EPSILON` |
//! |----------------------|-----------|
//! | `f64`, `Complex<f64>`| `1e-12`   |
//! | `f32`, `Complex<f32>`| `1e-5`    |
//! | `i32`, `i64`         | `0`       |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod approx;
pub mod traits;

#[cfg(feature = "complex")]
pub mod complex;

mod proptests;

pub use approx::{is_equal, is_zero};
pub use traits::{Field, FloatScalar, Scalar};
