//! Run configuration.
//!
//! Every tunable lives in one [`HopfieldConfig`] value that callers pass to
//! the constructors that need it. Defaults reproduce the reference setup:
//! zero thresholds, at most 100 training glyphs, 9×7 glyphs, data under
//! `training_data/` and `test_data/`.
//!
//! Any subset of fields can be given as JSON; missing fields keep their
//! defaults.
//!
//! ```rust
//! use hopfield::config::HopfieldConfig;
//!
//! let config: HopfieldConfig =
//!     serde_json::from_str(r#"{"bipolar_theta": 0.5, "max_sweeps": 20}"#).unwrap();
//! assert_eq!(config.max_sweeps, 20);
//! assert_eq!(config.input_limit, 100);
//! ```

use crate::error::Result;
use crate::kernel::{Activation, Mode, TieBreak};
use crate::memory::{RecallEngine, DEFAULT_MAX_SWEEPS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Thresholds, limits, shapes and data locations for one run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HopfieldConfig {
    /// Threshold for binary units
    pub binary_theta: f64,
    /// Threshold for bipolar units
    pub bipolar_theta: f64,
    /// Behaviour when a net input lands exactly on the threshold
    pub tie_break: TieBreak,
    /// Sweep budget per recall
    pub max_sweeps: usize,
    /// Seed for reproducible sweep order; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Maximum number of training glyphs read per run
    pub input_limit: usize,
    /// Glyph height
    pub glyph_rows: usize,
    /// Glyph width
    pub glyph_cols: usize,
    /// Holds `binary/<label>/<file>` and `bipolar/<label>/<file>`
    pub training_dir: PathBuf,
    /// Holds `binary.txt` and `bipolar.txt` queries
    pub test_dir: PathBuf,
}

impl Default for HopfieldConfig {
    fn default() -> Self {
        Self {
            binary_theta: 0.0,
            bipolar_theta: 0.0,
            tie_break: TieBreak::PassThrough,
            max_sweeps: DEFAULT_MAX_SWEEPS,
            seed: None,
            input_limit: 100,
            glyph_rows: 9,
            glyph_cols: 7,
            training_dir: PathBuf::from("training_data"),
            test_dir: PathBuf::from("test_data"),
        }
    }
}

impl HopfieldConfig {
    /// Load from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Threshold for `mode`.
    pub fn theta(&self, mode: Mode) -> f64 {
        match mode {
            Mode::Binary => self.binary_theta,
            Mode::Bipolar => self.bipolar_theta,
        }
    }

    pub fn activation(&self, mode: Mode) -> Activation {
        Activation::new(mode, self.theta(mode), self.tie_break)
    }

    /// Recall engine carrying this configuration's activation, budget and seed.
    pub fn engine(&self, mode: Mode) -> RecallEngine {
        let engine = RecallEngine::new(self.activation(mode)).with_max_sweeps(self.max_sweeps);
        match self.seed {
            Some(seed) => engine.with_seed(seed),
            None => engine,
        }
    }

    /// Units per glyph.
    pub fn glyph_len(&self) -> usize {
        self.glyph_rows * self.glyph_cols
    }

    /// Directory of labeled training glyphs for `mode`.
    pub fn training_root(&self, mode: Mode) -> PathBuf {
        self.training_dir.join(mode.as_str())
    }

    /// Query file for `mode`.
    pub fn query_path(&self, mode: Mode) -> PathBuf {
        self.test_dir.join(format!("{}.txt", mode.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HopfieldError;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = HopfieldConfig::default();
        assert_eq!(config.theta(Mode::Binary), 0.0);
        assert_eq!(config.theta(Mode::Bipolar), 0.0);
        assert_eq!(config.input_limit, 100);
        assert_eq!(config.glyph_len(), 63);
        assert_eq!(config.tie_break, TieBreak::PassThrough);
        assert_eq!(config.max_sweeps, DEFAULT_MAX_SWEEPS);
    }

    #[test]
    fn test_paths() {
        let config = HopfieldConfig::default();
        assert_eq!(
            config.training_root(Mode::Bipolar),
            Path::new("training_data").join("bipolar")
        );
        assert_eq!(
            config.query_path(Mode::Binary),
            Path::new("test_data").join("binary.txt")
        );
    }

    #[test]
    fn test_engine_from_config() {
        let config = HopfieldConfig {
            bipolar_theta: 1.5,
            tie_break: TieBreak::Hold,
            max_sweeps: 7,
            seed: Some(3),
            ..Default::default()
        };
        let engine = config.engine(Mode::Bipolar);
        assert_eq!(engine.max_sweeps(), 7);
        assert_eq!(engine.seed(), Some(3));
        assert_eq!(engine.activation().theta(), 1.5);
        assert_eq!(engine.activation().tie_break(), TieBreak::Hold);
        assert_eq!(config.engine(Mode::Binary).activation().theta(), 0.0);
    }

    #[test]
    fn test_load_partial_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"tie_break": "hold", "input_limit": 5, "training_dir": "/data/glyphs"}}"#
        )
        .unwrap();

        let config = HopfieldConfig::load(file.path()).unwrap();
        assert_eq!(config.tie_break, TieBreak::Hold);
        assert_eq!(config.input_limit, 5);
        assert_eq!(config.training_dir, PathBuf::from("/data/glyphs"));
        assert_eq!(config.glyph_rows, 9);
    }

    #[test]
    fn test_load_errors() {
        let missing = HopfieldConfig::load("/nonexistent/hopfield.json");
        assert!(matches!(missing, Err(HopfieldError::Io(_))));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let bad = HopfieldConfig::load(file.path());
        assert!(matches!(bad, Err(HopfieldError::JsonParse(_))));
    }
}
