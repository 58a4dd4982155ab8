//! Glyph I/O around the core: pattern files in, ASCII art out.
//!
//! - [`parse_pattern`] / [`read_pattern`]: whitespace-separated integers
//! - [`TrainingSource`]: labeled training directories, count-limited
//! - [`GlyphRenderer`]: reshape and draw a recalled pattern

pub mod parse;
pub mod render;
pub mod source;

pub use parse::{parse_pattern, read_pattern, read_pattern_of_len};
pub use render::GlyphRenderer;
pub use source::{TrainingExample, TrainingSource};
