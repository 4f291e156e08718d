//! Structured diagnostics for the Weft front end.
//!
//! Every failure the front end can report is a [`Diagnostic`]: a coded,
//! severity-tagged message pointing at a source [`Span`](weft_source::Span).
//! Parsing is fail-fast, so diagnostics travel in `Result::Err` rather
//! than accumulating in a sink; [`render_terminal`] and [`render_json`]
//! turn one into output.

#![warn(missing_docs)]

mod code;
mod diagnostic;
mod render;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::{Diagnostic, Severity};
pub use render::{render_json, render_terminal};
