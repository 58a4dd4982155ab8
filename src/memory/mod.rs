//! Memory layer: Hebbian storage and asynchronous recall.
//!
//! - [`WeightMatrix`] / [`WeightMatrixBuilder`]: sum of outer products of the
//!   training patterns, symmetric with a zero diagonal.
//! - [`RecallEngine`]: relaxes a noisy query to a fixed point of the matrix,
//!   bounded by a sweep budget, and reports the outcome as a [`Recall`].
//!
//! # Usage
//!
//! ```rust
//! use hopfield::kernel::{Activation, Mode, Pattern};
//! use hopfield::memory::{RecallEngine, WeightMatrixBuilder};
//!
//! let mut builder = WeightMatrixBuilder::new(Mode::Bipolar);
//! builder.add(&Pattern::from_ints(&[1, -1, 1, -1, 1, -1])).unwrap();
//! builder.add(&Pattern::from_ints(&[1, 1, 1, -1, -1, -1])).unwrap();
//! let w = builder.build().unwrap();
//!
//! let engine = RecallEngine::new(Activation::with_mode(Mode::Bipolar)).with_seed(7);
//! let recall = engine.recall(&Pattern::from_ints(&[1, -1, 1, -1, 1, 1]), &w).unwrap();
//! println!("{:?} after {} sweeps", recall.pattern.data(), recall.sweeps);
//! ```

pub mod recall;
pub mod weights;

pub use recall::{Recall, RecallEngine, DEFAULT_MAX_SWEEPS};
pub use weights::{WeightMatrix, WeightMatrixBuilder};
