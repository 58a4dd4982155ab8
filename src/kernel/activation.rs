//! Threshold activation.
//!
//! A unit's new value is a step function of its net input:
//!
//! | mode    | `net < theta` | `net > theta` | `net == theta` |
//! |---------|---------------|---------------|----------------|
//! | binary  | 0             | 1             | tie-break      |
//! | bipolar | -1            | 1             | tie-break      |
//!
//! The tie-break is an explicit [`TieBreak`] policy. [`TieBreak::PassThrough`]
//! emits the raw net input, which can leave the output alphabet (a bipolar
//! unit with `theta = 0` becomes `0`). [`TieBreak::Hold`] keeps the unit's
//! previous value and never leaves the alphabet.

use super::mode::Mode;
use serde::{Deserialize, Serialize};

/// What a unit does when its net input equals the threshold exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Emit the net input itself.
    #[default]
    PassThrough,
    /// Keep the unit's previous value.
    Hold,
}

/// Step activation with pass-through tie-break.
///
/// Pure per-scalar function; called once per unit update.
pub fn activate(net: f64, mode: Mode, theta: f64) -> f64 {
    if net < theta {
        mode.low()
    } else if net > theta {
        mode.high()
    } else {
        net
    }
}

/// Activation parameters for one network: mode, threshold and tie-break.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Activation {
    mode: Mode,
    theta: f64,
    tie_break: TieBreak,
}

impl Activation {
    pub fn new(mode: Mode, theta: f64, tie_break: TieBreak) -> Self {
        Self {
            mode,
            theta,
            tie_break,
        }
    }

    /// Zero threshold, pass-through tie-break.
    pub fn with_mode(mode: Mode) -> Self {
        Self::new(mode, 0.0, TieBreak::PassThrough)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// New value for a unit whose current value is `previous`.
    #[inline]
    pub fn apply(&self, net: f64, previous: f64) -> f64 {
        if net == self.theta && self.tie_break == TieBreak::Hold {
            return previous;
        }
        activate(net, self.mode, self.theta)
    }
}
