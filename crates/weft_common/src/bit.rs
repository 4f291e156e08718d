//! Two-state logic values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Not;

/// A single driven logic level.
///
/// Unlike a simulation value, a netlist constant is always fully driven:
/// a net is tied to `Zero`, tied to `One`, or not constant at all (in
/// which case no `Bit` is attached to it).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Bit {
    /// Logic low.
    Zero,
    /// Logic high.
    One,
}

impl Bit {
    /// Converts a boolean into a `Bit` (`true` is `One`).
    pub fn from_bool(value: bool) -> Self {
        if value {
            Bit::One
        } else {
            Bit::Zero
        }
    }

    /// Returns `true` if this is `Bit::One`.
    pub fn is_one(self) -> bool {
        self == Bit::One
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bit::Zero => write!(f, "0"),
            Bit::One => write!(f, "1"),
        }
    }
}

impl Not for Bit {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Bit::Zero => Bit::One,
            Bit::One => Bit::Zero,
        }
    }
}
