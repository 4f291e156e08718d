//! Source text management for the Weft front end.
//!
//! Input files are loaded into a [`SourceDb`], which hands out [`FileId`]s
//! and resolves byte-offset [`Span`]s back to 1-indexed line/column
//! coordinates when a diagnostic is rendered.

#![warn(missing_docs)]

mod db;
mod file;
mod span;

pub use db::SourceDb;
pub use file::SourceFile;
pub use span::{FileId, ResolvedSpan, Span};
