//! Property-based tests for determinants, inverses and elimination.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{AugmentedSystem, FixedVector, InverseMethod, Matrix};

    // Magnitudes in [0.5, 1) keep first-column pivots away from zero
    fn entry() -> impl Strategy<Value = f64> {
        prop_oneof![-1.0f64..-0.5, 0.5f64..1.0]
    }

    // Strictly diagonally dominant, hence non-singular
    fn dominant<const N: usize>() -> impl Strategy<Value = Matrix<f64, N, N>> {
        prop::array::uniform(prop::array::uniform(entry())).prop_map(|rows: [[f64; N]; N]| {
            let mut m = Matrix::from_rows(rows);
            for i in 0..N {
                m[(i, i)] += if m[(i, i)] < 0.0 { -(N as f64) } else { N as f64 };
            }
            m
        })
    }

    fn small_int_matrix<const N: usize>() -> impl Strategy<Value = Matrix<i64, N, N>> {
        prop::array::uniform(prop::array::uniform(-10i64..10)).prop_map(Matrix::from_rows)
    }

    fn rhs<const N: usize>() -> impl Strategy<Value = FixedVector<f64, N>> {
        prop::array::uniform(-100.0f64..100.0).prop_map(FixedVector::new)
    }

    proptest! {
        #[test]
        fn inverse_round_trip(m in dominant::<4>()) {
            let inv = m.inverse().unwrap();
            prop_assert_eq!(m * inv, Matrix::identity());
            prop_assert_eq!(inv.inverse().unwrap(), m);
        }

        #[test]
        fn det_of_transpose(m in small_int_matrix::<4>()) {
            prop_assert_eq!(m.transpose().det(), m.det());
        }

        #[test]
        fn adjoint_times_matrix_is_det_identity(m in small_int_matrix::<3>()) {
            prop_assert_eq!(m.adjoint() * m, Matrix::<i64, 3, 3>::identity() * m.det());
        }

        #[test]
        fn integer_adjoint_matches_float_inverse(m in small_int_matrix::<3>()) {
            let det = m.det();
            prop_assume!(det != 0);
            let float = m.map(|v| v as f64);
            let expected = m.adjoint().map(|v| v as f64) / det as f64;
            prop_assert_eq!(float.inverse_gaussian().unwrap(), expected);
        }

        #[test]
        fn inverse_strategies_agree_under_scaling(m in dominant::<3>(), exponent in -10i32..10) {
            let m = m * 10f64.powi(exponent);
            prop_assert_eq!(m.inverse_adjoint().unwrap(), m.inverse_gaussian().unwrap());
        }

        #[test]
        fn inverse_strategies_agree(m in dominant::<5>()) {
            prop_assert_eq!(
                m.inverse_with(InverseMethod::Adjoint).unwrap(),
                m.inverse_with(InverseMethod::Gaussian).unwrap()
            );
        }

        #[test]
        fn solution_satisfies_system(m in dominant::<4>(), b in rhs::<4>()) {
            let x = AugmentedSystem::new(m, b).solve().unwrap();
            prop_assert_eq!(m * x, b);
        }

        #[test]
        fn row_operations_preserve_solution(
            m in dominant::<3>(),
            b in rhs::<3>(),
            rows in (0usize..3, 0usize..3),
            scale in 0.5f64..2.0,
            factor in -2.0f64..2.0,
        ) {
            let (a, c) = rows;
            prop_assume!(a != c);
            let system = AugmentedSystem::new(m, b);
            let expected = system.solve().unwrap();

            let mut swapped = system;
            swapped.swap_rows(a, c).unwrap();
            prop_assert_eq!(swapped.solve().unwrap(), expected);

            let mut scaled = system;
            scaled.scale_row(a, scale).unwrap();
            prop_assert_eq!(scaled.solve().unwrap(), expected);

            let mut added = system;
            added.add_row(a, c, factor).unwrap();
            prop_assert_eq!(added.solve().unwrap(), expected);
        }

        #[test]
        fn ordering_is_idempotent(m in small_int_matrix::<4>().prop_map(|m| m.map(|v| v as f64))) {
            let system = AugmentedSystem::new(m, FixedVector::new([1.0, 2.0, 3.0, 4.0]));
            let once = system.ordered();
            let twice = once.ordered();
            prop_assert_eq!(once.coefficients(), twice.coefficients());
            prop_assert_eq!(once.auxiliary(), twice.auxiliary());
        }
    }
}
