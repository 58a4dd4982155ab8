//! Pattern vectors.
//!
//! A pattern is a flattened glyph: N unit values, binary {0, 1} or bipolar
//! {-1, 1}. Values are stored as `f64` because the pass-through tie-break
//! can write a raw net input into a unit.

use super::mode::Mode;
use std::ops::{Index, IndexMut};

/// An N-length vector of unit values.
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    data: Vec<f64>,
}

impl Pattern {
    /// Create an all-zero pattern of given dimensionality.
    pub fn zeros(dimensions: usize) -> Self {
        Self {
            data: vec![0.0; dimensions],
        }
    }

    /// Create a pattern from raw data.
    pub fn from_data(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// Create a pattern from integer pixel values.
    pub fn from_ints(values: &[i32]) -> Self {
        Self {
            data: values.iter().map(|&v| v as f64).collect(),
        }
    }

    /// Get the dimensionality.
    pub fn dimensions(&self) -> usize {
        self.data.len()
    }

    /// Get the raw data as a slice.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Get mutable access to the raw data.
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<f64> {
        self.data
    }

    /// Whether every unit is in `mode`'s output alphabet.
    pub fn is_canonical(&self, mode: Mode) -> bool {
        self.data.iter().all(|&v| mode.contains(v))
    }

    /// Number of positions where the two patterns differ.
    pub fn hamming(&self, other: &Pattern) -> usize {
        self.data
            .iter()
            .zip(other.data.iter())
            .filter(|(a, b)| a != b)
            .count()
            + self.dimensions().abs_diff(other.dimensions())
    }

    /// Copy with unit `index` swapped to the other value of `mode`'s alphabet.
    pub fn flipped(&self, index: usize, mode: Mode) -> Pattern {
        let mut out = self.clone();
        out.data[index] = if self.data[index] == mode.high() {
            mode.low()
        } else {
            mode.high()
        };
        out
    }

    /// Little-endian bytes of every unit, for hashing.
    pub(crate) fn to_le_bytes(&self) -> Vec<u8> {
        self.data.iter().flat_map(|v| v.to_le_bytes()).collect()
    }
}

impl Index<usize> for Pattern {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<usize> for Pattern {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl From<Vec<f64>> for Pattern {
    fn from(data: Vec<f64>) -> Self {
        Self::from_data(data)
    }
}
