//! Attribute and parameter values attached to instances.

use serde::{Deserialize, Serialize};
use weft_common::BitVector;
use weft_source::Span;

/// The payload of a [`Const`]: a decoded bit pattern or verbatim text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConstKind {
    /// A decoded bit-vector value.
    Bits(BitVector),
    /// A string kept as written (quotes stripped).
    Text(String),
}

/// A literal value from the input, tagged with where it was written.
///
/// The front end stores constants without interpreting them; the span is
/// kept so later pipeline stages can point back at the defining token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Const {
    /// The decoded or verbatim value.
    pub kind: ConstKind,
    /// Where in the input the value was written.
    pub span: Span,
}

impl Const {
    /// Creates a bit-vector constant.
    pub fn bits(value: BitVector, span: Span) -> Self {
        Self {
            kind: ConstKind::Bits(value),
            span,
        }
    }

    /// Creates a text constant.
    pub fn text(value: impl Into<String>, span: Span) -> Self {
        Self {
            kind: ConstKind::Text(value.into()),
            span,
        }
    }

    /// Returns the bit-vector payload, if this constant is one.
    pub fn as_bits(&self) -> Option<&BitVector> {
        match &self.kind {
            ConstKind::Bits(bits) => Some(bits),
            ConstKind::Text(_) => None,
        }
    }

    /// Returns the text payload, if this constant is one.
    pub fn as_text(&self) -> Option<&str> {
        match &self.kind {
            ConstKind::Text(text) => Some(text),
            ConstKind::Bits(_) => None,
        }
    }
}
