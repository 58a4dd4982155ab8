//! Hebbian weight matrix.
//!
//! Training folds each pattern into a running sum of outer products, the
//! same way an accumulator folds examples into running sums. Binary patterns
//! are rescaled into {-1, 1} first (`2v - 1`), bipolar patterns are used as
//! is. Once every pattern is in, the diagonal is cleared.
//!
//! The result is symmetric because every rank-1 term `r·rᵀ` is, and has a zero
//! diagonal because it is cleared explicitly. Both properties are what make
//! asynchronous recall descend the energy function.
//!
//! # Example
//!
//! ```rust
//! use hopfield::kernel::{Mode, Pattern};
//! use hopfield::memory::WeightMatrix;
//!
//! let patterns = vec![
//!     Pattern::from_ints(&[1, 1, 0, 0]),
//!     Pattern::from_ints(&[0, 0, 1, 1]),
//! ];
//! let w = WeightMatrix::build(&patterns, Mode::Binary).unwrap();
//! assert_eq!(w.get(0, 1), 2.0);
//! assert_eq!(w.get(2, 2), 0.0);
//! ```

use crate::error::{HopfieldError, Result};
use crate::kernel::{Mode, Pattern};
use ndarray::{Array2, ArrayView1};
use std::borrow::Borrow;
use tracing::{debug, info};

// =============================================================================
// Builder
// =============================================================================

/// Incremental Hebbian learner.
///
/// The first pattern fixes the dimensionality N; every later pattern must
/// match it.
#[derive(Clone, Debug)]
pub struct WeightMatrixBuilder {
    mode: Mode,
    /// Running sum of outer products (diagonal not yet cleared)
    sums: Option<Array2<f64>>,
    /// Number of patterns folded in
    count: usize,
}

impl WeightMatrixBuilder {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            sums: None,
            count: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Number of patterns added so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Dimensionality, once the first pattern has fixed it.
    pub fn dim(&self) -> Option<usize> {
        self.sums.as_ref().map(|s| s.nrows())
    }

    /// Add one training pattern's outer product to the running sum.
    pub fn add(&mut self, pattern: &Pattern) -> Result<()> {
        let n = pattern.dimensions();
        let mode = self.mode;
        let sums = self.sums.get_or_insert_with(|| Array2::zeros((n, n)));
        if sums.nrows() != n {
            return Err(HopfieldError::DimensionMismatch {
                expected: sums.nrows(),
                got: n,
            });
        }

        let r: Vec<f64> = pattern.data().iter().map(|&v| mode.rescale(v)).collect();
        for ((i, j), w) in sums.indexed_iter_mut() {
            *w += r[i] * r[j];
        }

        self.count += 1;
        debug!(pattern = self.count, dim = n, "added training pattern");
        Ok(())
    }

    /// Clear the diagonal and freeze the matrix.
    pub fn build(self) -> Result<WeightMatrix> {
        let mut weights = self.sums.ok_or(HopfieldError::EmptyTrainingSet)?;
        weights.diag_mut().fill(0.0);

        info!(
            mode = %self.mode,
            patterns = self.count,
            dim = weights.nrows(),
            "built weight matrix"
        );

        Ok(WeightMatrix {
            weights,
            mode: self.mode,
            patterns: self.count,
        })
    }
}

// =============================================================================
// WeightMatrix
// =============================================================================

/// Symmetric, zero-diagonal N×N weight matrix.
///
/// Immutable after construction. Recall only ever borrows it, so one matrix
/// can serve any number of concurrent recalls.
#[derive(Clone, Debug)]
pub struct WeightMatrix {
    weights: Array2<f64>,
    mode: Mode,
    patterns: usize,
}

impl WeightMatrix {
    /// Learn a weight matrix from a training sequence in one call.
    ///
    /// Fails with [`HopfieldError::EmptyTrainingSet`] on an empty sequence and
    /// [`HopfieldError::DimensionMismatch`] on ragged input.
    pub fn build<I, P>(patterns: I, mode: Mode) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Borrow<Pattern>,
    {
        let mut builder = WeightMatrixBuilder::new(mode);
        for pattern in patterns {
            builder.add(pattern.borrow())?;
        }
        builder.build()
    }

    /// Number of units N.
    pub fn dim(&self) -> usize {
        self.weights.nrows()
    }

    /// Encoding the matrix was trained in.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Number of training patterns.
    pub fn pattern_count(&self) -> usize {
        self.patterns
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.weights[[i, j]]
    }

    pub fn weights(&self) -> &Array2<f64> {
        &self.weights
    }

    pub fn is_symmetric(&self) -> bool {
        self.weights == self.weights.t()
    }

    pub fn has_zero_diagonal(&self) -> bool {
        self.weights.diag().iter().all(|&w| w == 0.0)
    }

    /// Recurrent input to unit `i`: `Σ_j state[j] · W[j][i]`.
    ///
    /// Reads row `i`, which equals column `i` since the matrix is symmetric.
    #[inline]
    pub fn net_input(&self, i: usize, state: &[f64]) -> f64 {
        let row = self.weights.row(i);
        match row.as_slice() {
            Some(row) => dot(row, state),
            None => row.iter().zip(state).map(|(w, s)| w * s).sum(),
        }
    }

    /// Energy `-½ sᵀWs - qᵀs + θ·Σs` of `state` under bias `query`.
    ///
    /// Asynchronous updates never increase it while every unit stays in the
    /// output alphabet.
    pub fn energy(&self, state: &Pattern, query: &Pattern, theta: f64) -> Result<f64> {
        for p in [state, query] {
            if p.dimensions() != self.dim() {
                return Err(HopfieldError::DimensionMismatch {
                    expected: self.dim(),
                    got: p.dimensions(),
                });
            }
        }

        let s = ArrayView1::from(state.data());
        let q = ArrayView1::from(query.data());
        let recurrent = s.dot(&self.weights.dot(&s));
        Ok(-0.5 * recurrent - q.dot(&s) + theta * s.sum())
    }
}

#[cfg(feature = "simd")]
#[inline]
fn dot(a: &[f64], b: &[f64]) -> f64 {
    use simsimd::SpatialSimilarity;
    f64::dot(a, b).unwrap_or_else(|| a.iter().zip(b).map(|(x, y)| x * y).sum())
}

#[cfg(not(feature = "simd"))]
#[inline]
fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use rand_chacha::ChaCha8Rng;

    fn random_patterns(n: usize, count: usize, mode: Mode, seed: u64) -> Vec<Pattern> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (0..count)
            .map(|_| {
                Pattern::from_data(
                    (0..n)
                        .map(|_| if rng.gen_bool(0.5) { mode.high() } else { mode.low() })
                        .collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_binary_two_patterns() {
        let patterns = vec![
            Pattern::from_ints(&[1, 1, 0, 0]),
            Pattern::from_ints(&[0, 0, 1, 1]),
        ];
        let w = WeightMatrix::build(&patterns, Mode::Binary).unwrap();

        // Both rescale to ±[1, 1, -1, -1], so the outer products coincide
        let expected = [
            [0.0, 2.0, -2.0, -2.0],
            [2.0, 0.0, -2.0, -2.0],
            [-2.0, -2.0, 0.0, 2.0],
            [-2.0, -2.0, 2.0, 0.0],
        ];
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(w.get(i, j), expected[i][j], "W[{}][{}]", i, j);
            }
        }
        assert_eq!(w.pattern_count(), 2);
        assert_eq!(w.mode(), Mode::Binary);
    }

    #[test]
    fn test_bipolar_uses_values_directly() {
        let w = WeightMatrix::build(&[Pattern::from_ints(&[1, -1, 1])], Mode::Bipolar).unwrap();
        assert_eq!(w.get(0, 1), -1.0);
        assert_eq!(w.get(0, 2), 1.0);
        assert_eq!(w.get(1, 2), -1.0);
    }

    #[test]
    fn test_symmetric_zero_diagonal() {
        for (mode, seed) in [(Mode::Binary, 1), (Mode::Bipolar, 2), (Mode::Binary, 3)] {
            let patterns = random_patterns(63, 7, mode, seed);
            let w = WeightMatrix::build(&patterns, mode).unwrap();
            assert!(w.is_symmetric(), "{} matrix not symmetric", mode);
            assert!(w.has_zero_diagonal(), "{} matrix has self-connections", mode);
            for i in 0..63 {
                for j in 0..63 {
                    assert_eq!(w.get(i, j), w.get(j, i));
                }
            }
        }
    }

    #[test]
    fn test_empty_training_set() {
        let none: Vec<Pattern> = Vec::new();
        let result = WeightMatrix::build(&none, Mode::Binary);
        assert!(matches!(result, Err(HopfieldError::EmptyTrainingSet)));

        let builder = WeightMatrixBuilder::new(Mode::Bipolar);
        assert!(matches!(builder.build(), Err(HopfieldError::EmptyTrainingSet)));
    }

    #[test]
    fn test_ragged_training_set() {
        let patterns = vec![Pattern::from_ints(&[1, 0, 1]), Pattern::from_ints(&[1, 0])];
        let result = WeightMatrix::build(&patterns, Mode::Binary);
        assert!(matches!(
            result,
            Err(HopfieldError::DimensionMismatch {
                expected: 3,
                got: 2
            })
        ));
    }

    #[test]
    fn test_incremental_matches_one_shot() {
        let patterns = random_patterns(20, 4, Mode::Bipolar, 9);
        let mut builder = WeightMatrixBuilder::new(Mode::Bipolar);
        assert_eq!(builder.dim(), None);
        for p in &patterns {
            builder.add(p).unwrap();
        }
        assert_eq!(builder.dim(), Some(20));
        assert_eq!(builder.count(), 4);

        let incremental = builder.build().unwrap();
        let one_shot = WeightMatrix::build(patterns, Mode::Bipolar).unwrap();
        assert_eq!(incremental.weights(), one_shot.weights());
    }

    #[test]
    fn test_net_input_reads_column() {
        let patterns = random_patterns(16, 3, Mode::Bipolar, 4);
        let w = WeightMatrix::build(&patterns, Mode::Bipolar).unwrap();
        let state = &patterns[0];
        for i in 0..16 {
            let by_column: f64 = (0..16).map(|j| state[j] * w.get(j, i)).sum();
            assert!((w.net_input(i, state.data()) - by_column).abs() < 1e-12);
        }
    }

    #[test]
    fn test_energy_lower_at_stored_pattern() {
        let stored = Pattern::from_ints(&[1, -1, 1, -1, 1, 1, -1, -1]);
        let w = WeightMatrix::build(&[stored.clone()], Mode::Bipolar).unwrap();
        let noisy = stored.flipped(2, Mode::Bipolar);

        let e_stored = w.energy(&stored, &stored, 0.0).unwrap();
        let e_noisy = w.energy(&noisy, &stored, 0.0).unwrap();
        assert!(e_stored < e_noisy, "{} should be below {}", e_stored, e_noisy);
    }

    #[test]
    fn test_energy_dimension_check() {
        let w = WeightMatrix::build(&[Pattern::from_ints(&[1, -1])], Mode::Bipolar).unwrap();
        let short = Pattern::from_ints(&[1]);
        assert!(w.energy(&short, &short, 0.0).is_err());
    }

    #[test]
    fn test_matrix_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WeightMatrix>();
    }
}
