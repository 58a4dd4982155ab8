//! Asynchronous recall.
//!
//! [`RecallEngine`] relaxes a query toward an attractor of a
//! [`WeightMatrix`]. The query plays two roles: it seeds the working state,
//! and it stays on as a constant per-unit bias for the whole run.
//!
//! Each sweep visits every unit once, in a freshly shuffled order, and
//! writes its new value immediately so later units in the same sweep see it.
//! A sweep that changes nothing means the state is a fixed point.
//!
//! # Example
//!
//! ```rust
//! use hopfield::kernel::{Activation, Mode, Pattern};
//! use hopfield::memory::{RecallEngine, WeightMatrix};
//!
//! let w = WeightMatrix::build(
//!     &[Pattern::from_ints(&[1, 1, 0, 0]), Pattern::from_ints(&[0, 0, 1, 1])],
//!     Mode::Binary,
//! )
//! .unwrap();
//!
//! let engine = RecallEngine::new(Activation::with_mode(Mode::Binary));
//! let recall = engine.recall(&Pattern::from_ints(&[1, 1, 0, 1]), &w).unwrap();
//! assert!(recall.converged);
//! assert_eq!(recall.pattern, Pattern::from_ints(&[1, 1, 0, 0]));
//! ```

use super::weights::WeightMatrix;
use crate::error::{HopfieldError, Result};
use crate::kernel::{Activation, Pattern};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

/// Default sweep budget.
pub const DEFAULT_MAX_SWEEPS: usize = 100;

/// Outcome of one recall.
#[derive(Clone, Debug)]
pub struct Recall {
    /// Final state: the attractor if `converged`, otherwise the last sweep's state
    pub pattern: Pattern,
    /// Sweeps performed, including the final unchanged one
    pub sweeps: usize,
    /// Whether a full sweep left the state unchanged
    pub converged: bool,
    /// Energy of `pattern` under the query bias
    pub energy: f64,
}

impl Recall {
    /// The attractor, or [`HopfieldError::NonConvergence`] carrying the last state.
    pub fn into_converged(self) -> Result<Pattern> {
        if self.converged {
            Ok(self.pattern)
        } else {
            Err(HopfieldError::NonConvergence {
                sweeps: self.sweeps,
                last_state: self.pattern,
            })
        }
    }
}

/// Runs asynchronous relaxation against a borrowed weight matrix.
///
/// The engine holds only parameters; every call to [`recall`](Self::recall)
/// owns its own working state and RNG.
#[derive(Clone, Debug)]
pub struct RecallEngine {
    activation: Activation,
    max_sweeps: usize,
    seed: Option<u64>,
}

impl RecallEngine {
    /// Engine with the default sweep budget and entropy-seeded sweep order.
    pub fn new(activation: Activation) -> Self {
        Self {
            activation,
            max_sweeps: DEFAULT_MAX_SWEEPS,
            seed: None,
        }
    }

    /// Cap the number of sweeps. Zero sweeps returns the query unconverged.
    pub fn with_max_sweeps(mut self, max_sweeps: usize) -> Self {
        self.max_sweeps = max_sweeps;
        self
    }

    /// Make sweep order reproducible.
    ///
    /// The per-recall RNG is seeded from SHA-256 of `seed || query`, so the
    /// same query always sees the same sequence of permutations.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn activation(&self) -> &Activation {
        &self.activation
    }

    pub fn max_sweeps(&self) -> usize {
        self.max_sweeps
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Relax `query` to a fixed point of `w`.
    ///
    /// Fails with [`HopfieldError::DimensionMismatch`] if the query length
    /// differs from the matrix size, and [`HopfieldError::ModeMismatch`] if
    /// the matrix was trained in another encoding. Running out of sweeps is
    /// not an error here: the returned [`Recall`] has `converged == false`.
    pub fn recall(&self, query: &Pattern, w: &WeightMatrix) -> Result<Recall> {
        let n = w.dim();
        if query.dimensions() != n {
            return Err(HopfieldError::DimensionMismatch {
                expected: n,
                got: query.dimensions(),
            });
        }
        if w.mode() != self.activation.mode() {
            return Err(HopfieldError::ModeMismatch {
                trained: w.mode(),
                requested: self.activation.mode(),
            });
        }

        let mut rng = self.rng_for(query);
        let mut order: Vec<usize> = (0..n).collect();
        let bias = query.data();
        let mut state = query.clone();

        for sweep in 1..=self.max_sweeps {
            let snapshot = state.clone();
            order.shuffle(&mut rng);

            for &i in &order {
                let net = bias[i] + w.net_input(i, state.data());
                state[i] = self.activation.apply(net, state[i]);
            }

            let changed = state.hamming(&snapshot);
            debug!(sweep, changed, "sweep complete");

            if changed == 0 {
                let energy = w.energy(&state, query, self.activation.theta())?;
                info!(sweeps = sweep, energy, "recall converged");
                return Ok(Recall {
                    pattern: state,
                    sweeps: sweep,
                    converged: true,
                    energy,
                });
            }
        }

        let energy = w.energy(&state, query, self.activation.theta())?;
        warn!(
            max_sweeps = self.max_sweeps,
            energy, "recall stopped without reaching a fixed point"
        );
        Ok(Recall {
            pattern: state,
            sweeps: self.max_sweeps,
            converged: false,
            energy,
        })
    }

    fn rng_for(&self, query: &Pattern) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => {
                let mut hasher = Sha256::new();
                hasher.update(seed.to_le_bytes());
                hasher.update(query.to_le_bytes());
                let hash = hasher.finalize();

                let mut head = [0u8; 8];
                head.copy_from_slice(&hash[0..8]);
                ChaCha8Rng::seed_from_u64(u64::from_le_bytes(head))
            }
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
