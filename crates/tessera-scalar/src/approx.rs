//! Epsilon-tolerant zero and equality tests.
//!
//! Floating-point round-off is the only source of "soft" error in the
//! library, and every comparison made by the matrix and solver code goes
//! through these two predicates instead of `==`.

use num_traits::One;

use crate::traits::Scalar;

/// Returns true if `value` is within [`Scalar::EPSILON`] of zero.
///
/// For integer scalars the tolerance is zero, so this is an exact test.
#[inline]
#[must_use]
pub fn is_zero<T: Scalar>(value: &T) -> bool {
    value.magnitude() <= T::EPSILON
}

/// Returns true if `a` and `b` differ by no more than the tolerance of `T`.
///
/// The tolerance is absolute for values of magnitude up to one and grows
/// with the larger operand beyond that.
#[inline]
#[must_use]
pub fn is_equal<T: Scalar>(a: &T, b: &T) -> bool {
    let diff = (*a - *b).magnitude();
    let scale = max(max(T::Real::one(), a.magnitude()), b.magnitude());
    diff <= T::EPSILON * scale
}

fn max<R: PartialOrd>(a: R, b: R) -> R {
    if b > a {
        b
    } else {
        a
    }
}
