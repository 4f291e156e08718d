//! The diagnostic codes this front end can emit.

use weft_diagnostics::{Category, DiagnosticCode};

/// A non-blank line that does not begin with a directive.
pub const EXPECTED_DIRECTIVE: DiagnosticCode = DiagnosticCode::new(Category::Parse, 1);
/// A directive word the parser does not recognize.
pub const UNKNOWN_DIRECTIVE: DiagnosticCode = DiagnosticCode::new(Category::Parse, 2);
/// A directive with the wrong shape: bad argument count, malformed
/// formal=actual, or an unterminated string literal.
pub const BAD_DIRECTIVE: DiagnosticCode = DiagnosticCode::new(Category::Parse, 3);
/// A directive used outside its required context (no model, no gate, or
/// a second `.model`).
pub const BAD_CONTEXT: DiagnosticCode = DiagnosticCode::new(Category::Parse, 4);
/// A `.gate` referencing an unknown model or formal pin.
pub const UNKNOWN_NAME: DiagnosticCode = DiagnosticCode::new(Category::Parse, 5);
/// A malformed `.names` truth-table entry.
pub const BAD_NAMES_ENTRY: DiagnosticCode = DiagnosticCode::new(Category::Parse, 6);
/// A character outside the binary-constant alphabet.
pub const BAD_LITERAL: DiagnosticCode = DiagnosticCode::new(Category::Parse, 7);
/// A decimal parameter too large for 64 bits.
pub const DECIMAL_OVERFLOW: DiagnosticCode = DiagnosticCode::new(Category::Parse, 8);

/// The input never defined a model.
pub const NO_TOP_MODEL: DiagnosticCode = DiagnosticCode::new(Category::Graph, 1);
/// A `.names` buffer chain that loops back on itself.
pub const NAMES_CYCLE: DiagnosticCode = DiagnosticCode::new(Category::Graph, 2);
/// Two `.names` buffers driving the same net.
pub const CONFLICTING_NAMES: DiagnosticCode = DiagnosticCode::new(Category::Graph, 3);
/// A net with more than one driver.
pub const MULTIPLE_DRIVERS: DiagnosticCode = DiagnosticCode::new(Category::Graph, 4);
/// A toplevel inout port not wired to an `SB_IO` pad.
pub const BAD_INOUT_PORT: DiagnosticCode = DiagnosticCode::new(Category::Graph, 5);
/// An `SB_IO` pad whose `PACKAGE_PIN` is not wired to a toplevel port.
pub const BAD_PACKAGE_PIN: DiagnosticCode = DiagnosticCode::new(Category::Graph, 6);
