//! Complex scalars.
//!
//! Complex numbers satisfy the same arithmetic contract as the real types;
//! their magnitude is the modulus, compared against the tolerance of the
//! underlying real type.

use num_complex::Complex;

use crate::traits::{Field, Scalar};

macro_rules! impl_complex_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for Complex<$t> {
                type Real = $t;

                const EPSILON: $t = <$t as Scalar>::EPSILON;

                #[inline]
                fn magnitude(&self) -> $t {
                    self.norm()
                }
            }

            impl Field for Complex<$t> {}
        )*
    };
}

impl_complex_scalar!(f32, f64);
