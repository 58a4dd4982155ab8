//! Kernel layer: scalar and vector building blocks.
//!
//! - [`Mode`]: binary {0, 1} or bipolar {-1, 1} encoding
//! - [`activate`] / [`Activation`]: per-unit threshold step with an explicit
//!   [`TieBreak`] policy
//! - [`Pattern`]: an N-length unit vector
//!
//! This layer has no dependencies on [`memory`](crate::memory) or
//! [`highlevel`](crate::highlevel).
//!
//! # Example
//!
//! ```rust
//! use hopfield::kernel::{activate, Mode, Pattern};
//!
//! let glyph = Pattern::from_ints(&[1, 0, 1]);
//! assert!(glyph.is_canonical(Mode::Binary));
//! assert_eq!(activate(-2.0, Mode::Bipolar, 0.0), -1.0);
//! ```

pub mod activation;
pub mod mode;
pub mod pattern;

pub use activation::{activate, Activation, TieBreak};
pub use mode::Mode;
pub use pattern::Pattern;
