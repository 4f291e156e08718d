//! `weft check`: parse and validate one BLIF netlist.

use crate::{CheckArgs, ReportFormat};
use std::collections::BTreeMap;
use std::path::Path;
use weft_blif::{read_blif, BlifError};
use weft_common::Interner;
use weft_diagnostics::{render_json, render_terminal};
use weft_netlist::{Design, Direction, Model};
use weft_source::SourceDb;

/// Runs the check, returning the process exit code.
pub fn run(args: &CheckArgs, quiet: bool) -> i32 {
    let interner = Interner::new();
    let mut sources = SourceDb::new();
    match read_blif(Path::new(&args.file), &mut sources, &interner) {
        Ok(design) => {
            if !quiet {
                match args.format {
                    ReportFormat::Text => print!("{}", text_summary(&design, &interner)),
                    ReportFormat::Json => println!("{}", json_summary(&design, &interner)),
                }
            }
            0
        }
        Err(BlifError::Parse(diag)) => {
            match args.format {
                ReportFormat::Text => eprint!("{}", render_terminal(&diag, &sources)),
                ReportFormat::Json => eprintln!("{}", render_json(&diag, &sources)),
            }
            1
        }
        Err(err) => {
            eprintln!("error: {err}");
            1
        }
    }
}

fn port_counts(top: &Model) -> (usize, usize, usize) {
    let mut counts = (0, 0, 0);
    for &port in top.interface() {
        match top.port(port).direction {
            Direction::In => counts.0 += 1,
            Direction::Out => counts.1 += 1,
            Direction::InOut => counts.2 += 1,
        }
    }
    counts
}

/// Instances of the top model grouped by the name of the model they
/// instantiate, alphabetically.
fn cell_histogram(design: &Design, interner: &Interner) -> BTreeMap<String, usize> {
    let mut histogram = BTreeMap::new();
    if let Some(top) = design.top_model() {
        for (_, instance) in top.instances() {
            let cell = interner.resolve(design.model(instance.instance_of).name);
            *histogram.entry(cell.to_string()).or_insert(0) += 1;
        }
    }
    histogram
}

fn text_summary(design: &Design, interner: &Interner) -> String {
    let Some(top) = design.top_model() else {
        return String::new();
    };
    let (inputs, outputs, inouts) = port_counts(top);
    let mut out = format!(
        "top model `{}': {} ports ({inputs} in, {outputs} out, {inouts} inout), {} nets, {} instances\n",
        interner.resolve(top.name),
        top.interface().len(),
        top.nets().count(),
        top.instances().count(),
    );
    for (cell, count) in cell_histogram(design, interner) {
        out.push_str(&format!("  {count:>6} {cell}\n"));
    }
    out
}

fn json_summary(design: &Design, interner: &Interner) -> String {
    let Some(top) = design.top_model() else {
        return "{}".to_string();
    };
    let (inputs, outputs, inouts) = port_counts(top);
    serde_json::json!({
        "top": interner.resolve(top.name),
        "ports": { "in": inputs, "out": outputs, "inout": inouts },
        "nets": top.nets().count(),
        "instances": top.instances().count(),
        "cells": cell_histogram(design, interner),
    })
    .to_string()
}
