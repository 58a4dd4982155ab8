//! Convenience wrapper that owns a trained [`WeightMatrix`], a
//! [`RecallEngine`] and a [`GlyphRenderer`] for one mode.
//!
//! For full control, import from [`kernel`](crate::kernel),
//! [`memory`](crate::memory) and [`glyph`](crate::glyph) directly.

use crate::config::HopfieldConfig;
use crate::error::{HopfieldError, Result};
use crate::glyph::{read_pattern_of_len, GlyphRenderer, TrainingSource};
use crate::kernel::{Mode, Pattern};
use crate::memory::{Recall, RecallEngine, WeightMatrix, WeightMatrixBuilder};
use std::borrow::Borrow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A trained network, ready for any number of recalls.
///
/// # When to use `Hopfield` vs direct imports
///
/// | Use case | Recommendation |
/// |----------|---------------|
/// | CLI, scripts, glyph directories on disk | `Hopfield` |
/// | Library code, patterns from elsewhere | [`WeightMatrix`] + [`RecallEngine`] |
///
/// # Example
///
/// ```rust
/// use hopfield::config::HopfieldConfig;
/// use hopfield::highlevel::Hopfield;
/// use hopfield::kernel::{Mode, Pattern};
///
/// let config = HopfieldConfig { glyph_rows: 2, glyph_cols: 2, ..Default::default() };
/// let net = Hopfield::from_patterns(
///     config,
///     Mode::Binary,
///     &[Pattern::from_ints(&[1, 1, 0, 0]), Pattern::from_ints(&[0, 0, 1, 1])],
/// )
/// .unwrap();
///
/// let recall = net.recall(&Pattern::from_ints(&[1, 1, 0, 1])).unwrap();
/// assert_eq!(net.render(&recall.pattern).unwrap(), "#  #  \n\n-  -  \n\n");
/// ```
pub struct Hopfield {
    config: HopfieldConfig,
    mode: Mode,
    weights: WeightMatrix,
    engine: RecallEngine,
    renderer: GlyphRenderer,
}

impl Hopfield {
    /// Train on the configured glyph directory for `mode`.
    ///
    /// Every glyph must have `glyph_rows × glyph_cols` units.
    pub fn train(config: HopfieldConfig, mode: Mode) -> Result<Self> {
        let source = TrainingSource::from_config(&config, mode);
        info!(root = %source.root().display(), limit = source.limit(), "training");

        let mut builder = WeightMatrixBuilder::new(mode);
        for example in source.iter()? {
            let example = example?;
            check_len(&example.pattern, config.glyph_len())?;
            debug!(label = %example.label, "learning glyph");
            builder.add(&example.pattern)?;
        }
        let weights = builder.build()?;
        Ok(Self::from_weights(config, mode, weights))
    }

    /// Train on patterns already in memory.
    pub fn from_patterns<I, P>(config: HopfieldConfig, mode: Mode, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Borrow<Pattern>,
    {
        let weights = WeightMatrix::build(patterns, mode)?;
        Ok(Self::from_weights(config, mode, weights))
    }

    fn from_weights(config: HopfieldConfig, mode: Mode, weights: WeightMatrix) -> Self {
        let engine = config.engine(mode);
        let renderer = GlyphRenderer::new(config.glyph_rows, config.glyph_cols);
        Self {
            config,
            mode,
            weights,
            engine,
            renderer,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn config(&self) -> &HopfieldConfig {
        &self.config
    }

    pub fn weights(&self) -> &WeightMatrix {
        &self.weights
    }

    pub fn engine(&self) -> &RecallEngine {
        &self.engine
    }

    /// Relax `query` to an attractor.
    pub fn recall(&self, query: &Pattern) -> Result<Recall> {
        self.engine.recall(query, &self.weights)
    }

    /// Read a query glyph from `path` and recall it.
    pub fn recall_file(&self, path: impl AsRef<Path>) -> Result<Recall> {
        let query = read_pattern_of_len(path, self.weights.dim())?;
        self.recall(&query)
    }

    /// The configured query file for this network's mode.
    pub fn query_path(&self) -> PathBuf {
        self.config.query_path(self.mode)
    }

    /// Draw a pattern as ASCII art.
    pub fn render(&self, pattern: &Pattern) -> Result<String> {
        self.renderer.render(pattern)
    }
}

fn check_len(pattern: &Pattern, expected: usize) -> Result<()> {
    if pattern.dimensions() != expected {
        return Err(HopfieldError::DimensionMismatch {
            expected,
            got: pattern.dimensions(),
        });
    }
    Ok(())
}
