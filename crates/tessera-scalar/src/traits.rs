//! Scalar traits.
//!
//! This module defines the arithmetic contract that matrix and vector
//! elements must satisfy, together with the per-type tolerance used by the
//! epsilon predicates in [`crate::approx`].

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{Float, FloatConst, One, Zero};

/// An element type usable in vectors and matrices.
///
/// This is a ring contract: determinants, cofactors, adjoints and
/// products need nothing more, so integers qualify. Operations that
/// divide require [`Field`].
///
/// # Laws
///
/// - `zero()` and `one()` are the additive and multiplicative identities
/// - `+`, `-` and `*` behave like the operations of a commutative ring, up
///   to round-off for floating types
/// - `magnitude()` is non-negative and zero exactly for `zero()`
pub trait Scalar:
    Copy
    + PartialEq
    + Debug
    + Send
    + Sync
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
{
    /// The type of [`Scalar::magnitude`].
    type Real: Copy + PartialOrd + Debug + Zero + One + Mul<Output = Self::Real>;

    /// Largest magnitude that still counts as zero.
    const EPSILON: Self::Real;

    /// Absolute value (modulus for complex types).
    fn magnitude(&self) -> Self::Real;
}

/// A scalar with division: every non-zero value has a multiplicative
/// inverse.
///
/// Required by inverses, `unit` and Gaussian elimination. Implemented for
/// the floating types and, with the `complex` feature, complex numbers;
/// never for integers, whose division truncates.
pub trait Field: Scalar + Div<Output = Self> + DivAssign {}

/// A real floating-point scalar.
///
/// Required by operations that need transcendental functions, such as the
/// rotation and projection factories. `PI` is available as
/// [`FloatConst::PI`].
pub trait FloatScalar: Field<Real = Self> + Float + FloatConst {}

impl<T: Field<Real = T> + Float + FloatConst> FloatScalar for T {}

macro_rules! impl_float_scalar {
    ($($t:ty => $eps:expr),* $(,)?) => {
        $(
            impl Scalar for $t {
                type Real = $t;

                const EPSILON: $t = $eps;

                #[inline]
                fn magnitude(&self) -> $t {
                    self.abs()
                }
            }

            impl Field for $t {}
        )*
    };
}

macro_rules! impl_int_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                type Real = $t;

                const EPSILON: $t = 0;

                /// Saturates at `MAX` for `MIN`, whose absolute value does
                /// not fit.
                #[inline]
                fn magnitude(&self) -> $t {
                    self.saturating_abs()
                }
            }
        )*
    };
}

impl_float_scalar!(f32 => 1e-5, f64 => 1e-12);
impl_int_scalar!(i32, i64);
