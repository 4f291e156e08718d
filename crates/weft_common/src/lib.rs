//! Shared foundational types for the Weft place-and-route front end.
//!
//! This crate provides interned identifiers, two-state logic values, and
//! the packed bit-vectors used for netlist constants and parameters.

#![warn(missing_docs)]

pub mod bit;
pub mod bits;
pub mod ident;

pub use bit::Bit;
pub use bits::BitVector;
pub use ident::{Ident, Interner};
