//! Labeled training glyphs on disk.
//!
//! Layout: `<root>/<label>/<file>`, one pattern per file. Labels and files
//! are visited in name order so a run is reproducible. At most `limit`
//! patterns are produced per pass, and every call to
//! [`TrainingSource::iter`] starts a fresh pass.

use super::parse::read_pattern;
use crate::config::HopfieldConfig;
use crate::error::Result;
use crate::kernel::{Mode, Pattern};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One training glyph and the label directory it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingExample {
    pub label: String,
    pub pattern: Pattern,
}

/// Count-limited, restartable source of training glyphs.
#[derive(Clone, Debug)]
pub struct TrainingSource {
    root: PathBuf,
    limit: usize,
}

impl TrainingSource {
    pub fn new(root: impl Into<PathBuf>, limit: usize) -> Self {
        Self {
            root: root.into(),
            limit,
        }
    }

    /// Source for `mode` under the configured training directory.
    pub fn from_config(config: &HopfieldConfig, mode: Mode) -> Self {
        Self::new(config.training_root(mode), config.input_limit)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// `(label, path)` of every file the next pass will read, in order.
    pub fn files(&self) -> Result<Vec<(String, PathBuf)>> {
        let mut files = Vec::new();
        if self.limit == 0 {
            return Ok(files);
        }

        for label_dir in sorted_entries(&self.root)? {
            if !label_dir.is_dir() {
                debug!(path = %label_dir.display(), "skipping non-directory in training root");
                continue;
            }
            let label = label_dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            for path in sorted_entries(&label_dir)? {
                if !path.is_file() {
                    continue;
                }
                files.push((label.clone(), path));
                if files.len() >= self.limit {
                    return Ok(files);
                }
            }
        }
        Ok(files)
    }

    /// Start a pass. Directory listing happens now; files are parsed lazily.
    pub fn iter(&self) -> Result<impl Iterator<Item = Result<TrainingExample>>> {
        let files = self.files()?;
        debug!(root = %self.root.display(), count = files.len(), "training pass");
        Ok(files.into_iter().map(|(label, path)| {
            let pattern = read_pattern(&path)?;
            Ok(TrainingExample { label, pattern })
        }))
    }
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    paths.sort();
    Ok(paths)
}
