//! # Hopfield: discrete associative memory for glyphs
//!
//! A classic Hopfield network. Training folds bitmap glyphs into a
//! symmetric, zero-diagonal weight matrix with the Hebbian outer-product
//! rule; recall relaxes a noisy or partial glyph to the nearest stored
//! attractor with asynchronous single-unit updates.
//!
//! ## Quick Start
//!
//! ```rust
//! use hopfield::{Activation, Mode, Pattern, RecallEngine, WeightMatrix};
//!
//! // Learn two 4-pixel glyphs
//! let w = WeightMatrix::build(
//!     &[Pattern::from_ints(&[1, 1, 0, 0]), Pattern::from_ints(&[0, 0, 1, 1])],
//!     Mode::Binary,
//! )?;
//!
//! // Recall from a corrupted copy of the first one
//! let engine = RecallEngine::new(Activation::with_mode(Mode::Binary));
//! let recall = engine.recall(&Pattern::from_ints(&[1, 1, 0, 1]), &w)?;
//! assert_eq!(recall.pattern, Pattern::from_ints(&[1, 1, 0, 0]));
//! # Ok::<(), hopfield::HopfieldError>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Modes**: binary {0, 1} or bipolar {-1, 1}; binary glyphs are mapped
//!   through `2v - 1` before learning
//! - **Weight matrix**: sum of outer products, diagonal cleared, read-only
//!   after construction and shareable across threads
//! - **Recall**: shuffled sequential sweeps until a sweep changes nothing,
//!   capped by a sweep budget
//! - **Tie-break**: what a unit does when its net input equals the threshold
//!
//! ## Layers
//!
//! - [`kernel`]: modes, activation, patterns
//! - [`memory`]: weight matrix and recall engine
//! - [`glyph`]: pattern files, training directories, ASCII rendering
//! - [`highlevel`]: [`Hopfield`], a train-once, recall-many wrapper

pub mod config;
pub mod error;
pub mod glyph;
pub mod highlevel;
pub mod kernel;
pub mod memory;

// Re-exports for convenience
pub use config::HopfieldConfig;
pub use error::{HopfieldError, Result};
pub use glyph::{GlyphRenderer, TrainingSource};
pub use highlevel::Hopfield;
pub use kernel::{activate, Activation, Mode, Pattern, TieBreak};
pub use memory::{Recall, RecallEngine, WeightMatrix, WeightMatrixBuilder};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_pattern_scenario() {
        let patterns = [
            Pattern::from_ints(&[1, 1, 0, 0]),
            Pattern::from_ints(&[0, 0, 1, 1]),
        ];
        let net = Hopfield::from_patterns(HopfieldConfig::default(), Mode::Binary, &patterns)
            .unwrap();

        let recalled = net
            .recall(&Pattern::from_ints(&[1, 1, 0, 1]))
            .unwrap()
            .into_converged()
            .unwrap();
        assert_eq!(recalled, patterns[0]);
    }

    #[test]
    fn test_empty_training_set() {
        let none: [Pattern; 0] = [];
        let result = Hopfield::from_patterns(HopfieldConfig::default(), Mode::Bipolar, &none);
        assert!(matches!(result, Err(HopfieldError::EmptyTrainingSet)));
    }

    #[test]
    fn test_glyph_sized_recall() {
        // 9x7 "I" and "O"
        #[rustfmt::skip]
        let i_glyph = Pattern::from_ints(&[
            -1,  1,  1,  1,  1,  1, -1,
            -1, -1, -1,  1, -1, -1, -1,
            -1, -1, -1,  1, -1, -1, -1,
            -1, -1, -1,  1, -1, -1, -1,
            -1, -1, -1,  1, -1, -1, -1,
            -1, -1, -1,  1, -1, -1, -1,
            -1, -1, -1,  1, -1, -1, -1,
            -1, -1, -1,  1, -1, -1, -1,
            -1,  1,  1,  1,  1,  1, -1,
        ]);
        #[rustfmt::skip]
        let o_glyph = Pattern::from_ints(&[
            -1, -1,  1,  1,  1, -1, -1,
            -1,  1, -1, -1, -1,  1, -1,
             1, -1, -1, -1, -1, -1,  1,
             1, -1, -1, -1, -1, -1,  1,
             1, -1, -1, -1, -1, -1,  1,
             1, -1, -1, -1, -1, -1,  1,
             1, -1, -1, -1, -1, -1,  1,
            -1,  1, -1, -1, -1,  1, -1,
            -1, -1,  1,  1,  1, -1, -1,
        ]);

        let config = HopfieldConfig {
            seed: Some(2024),
            ..Default::default()
        };
        let net =
            Hopfield::from_patterns(config, Mode::Bipolar, [&i_glyph, &o_glyph]).unwrap();

        let mut noisy = o_glyph.clone();
        for k in [0, 10, 30, 50] {
            noisy = noisy.flipped(k, Mode::Bipolar);
        }
        let recall = net.recall(&noisy).unwrap();
        assert!(recall.converged);
        assert_eq!(recall.pattern, o_glyph);

        let art = net.render(&recall.pattern).unwrap();
        assert_eq!(art.matches('#').count(), 20);
    }
}
