//! Stable diagnostic codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The broad class a diagnostic code belongs to, fixing its prefix letter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    /// Grammar and literal errors found while parsing, prefixed `E`.
    Parse,
    /// Graph-consistency errors found after parsing, prefixed `G`.
    Graph,
    /// Filesystem and I/O errors at the entry-point boundary, prefixed `F`.
    Io,
}

impl Category {
    /// Returns the prefix letter for this category.
    pub fn prefix(self) -> char {
        match self {
            Category::Parse => 'E',
            Category::Graph => 'G',
            Category::Io => 'F',
        }
    }
}

/// A diagnostic code: category prefix plus a zero-padded number,
/// displayed as e.g. `E102` or `G003`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DiagnosticCode {
    /// The code's category.
    pub category: Category,
    /// The number within the category.
    pub number: u16,
}

impl DiagnosticCode {
    /// Creates a code from category and number.
    pub const fn new(category: Category, number: u16) -> Self {
        Self { category, number }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.category.prefix(), self.number)
    }
}
