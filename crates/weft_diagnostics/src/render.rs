//! Terminal and JSON rendering of diagnostics.

use crate::diagnostic::Diagnostic;
use weft_source::SourceDb;

/// Renders a diagnostic in rustc-style terminal form:
///
/// ```text
/// error[E003]: invalid .names entry: gate must be either 1 or 0
///   --> blinky.blif:14:1
///    |
/// 14 | 2
///    | ^
/// ```
pub fn render_terminal(diag: &Diagnostic, sources: &SourceDb) -> String {
    let mut out = String::new();
    out.push_str(&format!("{diag}\n"));

    if !diag.span.is_none() {
        let resolved = sources.resolve(diag.span);
        out.push_str(&format!("  --> {resolved}\n"));

        let file = sources.file(diag.span.file);
        let (line, col) = file.line_col(diag.span.start);
        let line_num = line.to_string();
        let gutter = " ".repeat(line_num.len());
        let text = file.line_text(diag.span.start);

        out.push_str(&format!("{gutter} |\n"));
        out.push_str(&format!("{line_num} | {text}\n"));

        let width = (diag.span.end.saturating_sub(diag.span.start)).max(1) as usize;
        let indent = " ".repeat((col as usize).saturating_sub(1));
        out.push_str(&format!("{gutter} | {indent}{}\n", "^".repeat(width)));
    }

    for note in &diag.notes {
        out.push_str(&format!("   = note: {note}\n"));
    }

    out
}

/// Renders a diagnostic as a single JSON object, with the span resolved
/// to path/line/column for machine consumers.
pub fn render_json(diag: &Diagnostic, sources: &SourceDb) -> String {
    let location = if diag.span.is_none() {
        None
    } else {
        let resolved = sources.resolve(diag.span);
        Some(serde_json::json!({
            "path": resolved.path,
            "line": resolved.line,
            "column": resolved.column,
        }))
    };
    serde_json::json!({
        "severity": diag.severity,
        "code": diag.code.to_string(),
        "message": diag.message,
        "location": location,
        "notes": diag.notes,
    })
    .to_string()
}
