//! Weft CLI — the command-line interface for the Weft front end.
//!
//! `weft check` reads a BLIF netlist, builds and validates the netlist
//! graph, and prints a summary (or the fatal diagnostic) in text or
//! JSON form.

#![warn(missing_docs)]

mod check;

use clap::{Parser, Subcommand, ValueEnum};
use std::process;

/// Weft — a place-and-route toolchain front end for iCE40 FPGAs.
#[derive(Parser, Debug)]
#[command(name = "weft", version, about = "Weft place-and-route front end")]
pub struct Cli {
    /// Suppress the summary on success.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse and validate a BLIF netlist.
    Check(CheckArgs),
}

/// Arguments for the `weft check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the `.blif` file (a leading `~` is expanded).
    pub file: String,

    /// Output format for the summary and for diagnostics.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Output format selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

fn main() {
    let cli = Cli::parse();
    let exit = match cli.command {
        Command::Check(args) => check::run(&args, cli.quiet),
    };
    process::exit(exit);
}
