//! Parallel batch solving.
//!
//! Independent systems share nothing, so a batch can be spread over
//! rayon's work-stealing pool without coordination.

use log::debug;
use rayon::prelude::*;
use tessera_scalar::Field;

use crate::augmented::{AugmentedSystem, Auxiliary};
use crate::error::Result;
use crate::vector::FixedVector;

/// Configuration for batch solving.
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Minimum batch size to enable parallelism.
    pub parallel_threshold: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 64,
        }
    }
}

/// Solves every system in `systems`.
///
/// Result `i` belongs to `systems[i]`; a singular system fails on its own
/// without affecting the rest of the batch.
pub fn solve_batch<T, const N: usize, A>(
    systems: &[AugmentedSystem<T, N, A>],
    config: &BatchConfig,
) -> Vec<Result<FixedVector<A, N>>>
where
    T: Field,
    A: Auxiliary<T>,
{
    if systems.len() < config.parallel_threshold {
        // Fall back to sequential for small batches
        return systems.iter().map(AugmentedSystem::solve).collect();
    }

    debug!("solving {} systems in parallel", systems.len());
    systems.par_iter().map(AugmentedSystem::solve).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinalgError;
    use crate::matrix::Matrix;

    fn diagonal_system(k: f64) -> AugmentedSystem<f64, 2> {
        AugmentedSystem::new(
            Matrix::from_rows([[k, 0.0], [0.0, 2.0 * k]]),
            FixedVector::new([k, 4.0 * k]),
        )
    }

    #[test]
    fn test_sequential_batch() {
        let systems: Vec<_> = (1..=3).map(|k| diagonal_system(f64::from(k))).collect();
        let results = solve_batch(&systems, &BatchConfig::default());
        assert_eq!(results.len(), 3);
        for result in results {
            assert_eq!(result, Ok(FixedVector::new([1.0, 2.0])));
        }
    }

    #[test]
    fn test_parallel_batch_keeps_order() {
        let config = BatchConfig {
            parallel_threshold: 4,
        };
        let systems: Vec<_> = (1..=100)
            .map(|k| {
                let k = f64::from(k);
                AugmentedSystem::new(
                    Matrix::from_rows([[1.0, 1.0], [0.0, 1.0]]),
                    FixedVector::new([k + 1.0, 1.0]),
                )
            })
            .collect();

        let results = solve_batch(&systems, &config);
        for (k, result) in (1..=100).zip(results) {
            assert_eq!(result, Ok(FixedVector::new([f64::from(k), 1.0])));
        }
    }

    #[test]
    fn test_singular_member_fails_alone() {
        let config = BatchConfig {
            parallel_threshold: 1,
        };
        let singular = AugmentedSystem::new(
            Matrix::from_rows([[1.0, 2.0], [2.0, 4.0]]),
            FixedVector::new([1.0, 2.0]),
        );
        let systems = [diagonal_system(1.0), singular, diagonal_system(3.0)];

        let results = solve_batch(&systems, &config);
        assert!(results[0].is_ok());
        assert_eq!(results[1], Err(LinalgError::SingularSystem));
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_empty_batch() {
        let systems: [AugmentedSystem<f64, 2>; 0] = [];
        assert!(solve_batch(&systems, &BatchConfig::default()).is_empty());
    }
}
