//! Show document information.

use std::path::Path;

use anyhow::Context;
use ink::{Brush, InkDocument};

use crate::config::Settings;

pub fn run(file: &Path, settings: &Settings) -> anyhow::Result<()> {
    let document = InkDocument::open(file, settings.offsets())
        .with_context(|| format!("Failed to load {}", file.display()))?;

    let meta = document.metadata();
    println!("Document: {}", file.display());
    println!("  Paper: {}x{}", meta.paper_width, meta.paper_height);
    println!(
        "  Digitizer: {}x{}",
        meta.digitizer_width, meta.digitizer_height
    );
    match document.pen_mag() {
        Some(pen_mag) => println!("  pen_mag: {pen_mag:.2}"),
        None => println!("  pen_mag: undefined"),
    }
    let offsets = document.offsets();
    println!("  Offsets: x={} y={}", offsets.x, offsets.y);
    println!();

    println!("Traces: {}", document.trace_count());
    println!("  Pencil: {}", document.count_brush(Brush::Pencil));
    println!("  Eraser: {}", document.count_brush(Brush::Eraser));
    let samples: usize = document.traces().iter().map(|t| t.len()).sum();
    println!("  Samples: {samples}");

    let problems = document.problems();
    if !problems.is_empty() {
        println!();
        println!("Not playable:");
        for problem in &problems {
            println!("  {problem}");
        }
    }

    if !document.issues().is_empty() {
        println!();
        println!("Decode issues:");
        for issue in document.issues() {
            println!("  {issue}");
        }
    }

    Ok(())
}
