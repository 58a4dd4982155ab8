//! High-level convenience API.
//!
//! This layer provides [`Hopfield`], an ergonomic wrapper that trains a
//! [`WeightMatrix`](crate::memory::WeightMatrix) from a glyph directory and
//! delegates recall and rendering to the [`memory`](crate::memory) and
//! [`glyph`](crate::glyph) layers.
//!
//! For library code working with in-memory patterns, prefer importing from
//! [`kernel`](crate::kernel) and [`memory`](crate::memory) directly.

pub mod client;

pub use client::Hopfield;
