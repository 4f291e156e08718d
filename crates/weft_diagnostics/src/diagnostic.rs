//! The diagnostic value itself.

use crate::code::DiagnosticCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use weft_source::Span;

/// How severe a diagnostic is.
///
/// The BLIF front end only ever emits `Error` (every malformation is
/// fatal); `Warning` exists for later pipeline stages that share this
/// crate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Severity {
    /// A fatal problem; the producing stage aborted.
    Error,
    /// A non-fatal observation.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A coded message tied to a source location.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity of the problem.
    pub severity: Severity,
    /// The stable code identifying the kind of problem.
    pub code: DiagnosticCode,
    /// The human-readable message.
    pub message: String,
    /// Where in the input the problem was detected. [`Span::NONE`] when
    /// no location applies (e.g. file-open failures).
    pub span: Span,
    /// Explanatory footnotes.
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Creates an error diagnostic.
    pub fn error(code: DiagnosticCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            span,
            notes: Vec::new(),
        }
    }

    /// Appends a footnote.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::Category;

    #[test]
    fn error_construction() {
        let d = Diagnostic::error(
            DiagnosticCode::new(Category::Parse, 1),
            "expected directive",
            Span::NONE,
        );
        assert_eq!(d.severity, Severity::Error);
        assert_eq!(d.message, "expected directive");
        assert!(d.notes.is_empty());
    }

    #[test]
    fn display_header() {
        let d = Diagnostic::error(
            DiagnosticCode::new(Category::Graph, 4),
            "net `x' has multiple drivers",
            Span::NONE,
        );
        assert_eq!(format!("{d}"), "error[G004]: net `x' has multiple drivers");
    }

    #[test]
    fn with_note_appends() {
        let d = Diagnostic::error(
            DiagnosticCode::new(Category::Parse, 2),
            "unknown directive '.foo'",
            Span::NONE,
        )
        .with_note("directives recognized here: .model .inputs .outputs .names .gate .attr .param .end");
        assert_eq!(d.notes.len(), 1);
    }

    #[test]
    fn serde_roundtrip() {
        let d = Diagnostic::error(
            DiagnosticCode::new(Category::Parse, 9),
            "invalid character in integer constant",
            Span::NONE,
        );
        let json = serde_json::to_string(&d).unwrap();
        let back: Diagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(back.message, d.message);
        assert_eq!(back.code, d.code);
    }
}
