//! Value encodings.
//!
//! A network runs in exactly one of two encodings. The mode decides how
//! training vectors are rescaled before the Hebbian outer product, and which
//! alphabet the activation function emits.

use crate::error::{HopfieldError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Encoding of unit values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Units take values in {0, 1}.
    Binary,
    /// Units take values in {-1, 1}.
    Bipolar,
}

impl Mode {
    /// Canonical lowercase name, as accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Binary => "binary",
            Mode::Bipolar => "bipolar",
        }
    }

    /// Value emitted below threshold.
    pub fn low(self) -> f64 {
        match self {
            Mode::Binary => 0.0,
            Mode::Bipolar => -1.0,
        }
    }

    /// Value emitted above threshold.
    pub fn high(self) -> f64 {
        1.0
    }

    /// Map a training value into {-1, 1} for the outer product.
    ///
    /// Binary values go through `2v - 1`; bipolar values are already there.
    pub fn rescale(self, v: f64) -> f64 {
        match self {
            Mode::Binary => 2.0 * v - 1.0,
            Mode::Bipolar => v,
        }
    }

    /// Whether `v` belongs to this mode's output alphabet.
    pub fn contains(self, v: f64) -> bool {
        v == self.low() || v == self.high()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = HopfieldError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "binary" => Ok(Mode::Binary),
            "bipolar" => Ok(Mode::Bipolar),
            other => Err(HopfieldError::InvalidMode(other.to_string())),
        }
    }
}
