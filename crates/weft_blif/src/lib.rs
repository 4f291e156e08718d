//! BLIF front end: parses a textual logic network into a validated
//! [`Design`](weft_netlist::Design).
//!
//! The supported dialect is the gate-level BLIF that synthesis tools
//! emit for iCE40 flows: a single `.model`, `.inputs`/`.outputs`,
//! constant and buffer `.names` tables, `.gate` instantiations of the
//! standard cells, and `.attr`/`.param` annotations (including Radiant
//! numeric literals inside `.param` strings).
//!
//! # Architecture
//!
//! - **Lexer** ([`lexer`]): splits raw text into logical lines of
//!   spanned words, handling `#` comments and `\` continuations.
//! - **Parser** ([`parser`]): the directive state machine building the
//!   netlist graph, with the literal dialects in [`literal`].
//! - **Unify/validate** (internal): post-parse net unification via
//!   union-find, then single-driver and pad-wiring checks.
//!
//! Parsing is fail-fast: any malformation aborts the whole parse with a
//! [`Diagnostic`] and no partial design.

#![warn(missing_docs)]

pub mod codes;
pub mod directive;
pub mod lexer;
pub mod literal;
pub mod parser;
mod unify;
mod validate;

pub use directive::Directive;
pub use parser::BlifParser;

use std::path::{Path, PathBuf};
use weft_common::Interner;
use weft_diagnostics::Diagnostic;
use weft_netlist::Design;
use weft_source::{FileId, SourceDb};

/// A failed BLIF read.
#[derive(Debug, thiserror::Error)]
pub enum BlifError {
    /// The input file could not be opened or read.
    #[error("failed to open `{}': {source}", .path.display())]
    Io {
        /// The path that was opened (after `~` expansion).
        path: PathBuf,
        /// The underlying system error.
        #[source]
        source: std::io::Error,
    },
    /// The input was malformed; the diagnostic points at the problem.
    #[error("{0}")]
    Parse(Diagnostic),
}

impl BlifError {
    /// Returns the parse diagnostic, if this is a parse failure.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            BlifError::Parse(diag) => Some(diag),
            BlifError::Io { .. } => None,
        }
    }
}

/// Reads and parses a BLIF file from disk.
///
/// The path may start with `~`; it is expanded before opening. The file
/// is registered in `sources` so diagnostics can be rendered against it.
pub fn read_blif(
    path: &Path,
    sources: &mut SourceDb,
    interner: &Interner,
) -> Result<Design, BlifError> {
    let file = sources.load_file(path).map_err(|source| BlifError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_blif(file, sources, interner)
}

/// Parses BLIF text already loaded into the source database.
///
/// The label the text was registered under is used in diagnostics.
pub fn parse_blif(
    file: FileId,
    sources: &SourceDb,
    interner: &Interner,
) -> Result<Design, BlifError> {
    BlifParser::new(file, sources, interner)
        .parse()
        .map_err(BlifError::Parse)
}
