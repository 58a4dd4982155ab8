//! ASCII glyph rendering.
//!
//! A recalled pattern is reshaped row-major to `rows × cols`. A cell whose
//! value is exactly `1` prints as `#`; anything else (0, -1, or a
//! pass-through tie value) prints as `-`. Each cell is followed by two
//! spaces and each row by a blank line.

use crate::error::{HopfieldError, Result};
use crate::kernel::Pattern;

const FILLED: char = '#';
const EMPTY: char = '-';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphRenderer {
    rows: usize,
    cols: usize,
}

impl GlyphRenderer {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn render(&self, pattern: &Pattern) -> Result<String> {
        let len = pattern.dimensions();
        if self.rows * self.cols != len || len == 0 {
            return Err(HopfieldError::InvalidShape {
                rows: self.rows,
                cols: self.cols,
                len,
            });
        }

        let mut out = String::with_capacity(len * 3 + self.rows * 2);
        for row in pattern.data().chunks(self.cols) {
            for &v in row {
                out.push(if v == 1.0 { FILLED } else { EMPTY });
                out.push_str("  ");
            }
            out.push_str("\n\n");
        }
        Ok(out)
    }
}

impl Default for GlyphRenderer {
    fn default() -> Self {
        Self::new(9, 7)
    }
}
