//! Replay a document and write the canvas to an image file.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use image::GrayImage;
use ink::{InkDocument, PlaybackSession, StampSet};
use tracing::info;

use crate::config::Settings;

pub fn run(
    file: &Path,
    output: Option<PathBuf>,
    steps: Option<usize>,
    settings: &Settings,
) -> anyhow::Result<()> {
    let document = InkDocument::open(file, settings.offsets())
        .with_context(|| format!("Failed to load {}", file.display()))?;

    let steps = steps.unwrap_or_else(|| {
        settings
            .config
            .initial_steps
            .position(document.trace_count())
    });
    let image = render_image(&document, steps)?;

    let output = output.unwrap_or_else(|| file.with_extension("png"));
    image
        .save(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!(
        "render: {} of {} traces -> {}",
        steps,
        document.trace_count(),
        output.display()
    );
    println!("Wrote {}", output.display());
    Ok(())
}

/// Draw the first `steps` traces of `document` into an 8-bit grayscale image.
pub fn render_image(document: &InkDocument, steps: usize) -> anyhow::Result<GrayImage> {
    let problems = document.problems();
    if !problems.is_empty() {
        let reasons: Vec<String> = problems.iter().map(ToString::to_string).collect();
        bail!("Document cannot be played back: {}", reasons.join(", "));
    }

    let mut session = PlaybackSession::open(document, StampSet::generated(), 0);
    session.seek(steps)?;

    let canvas = session.into_canvas();
    let (width, height) = (canvas.width(), canvas.height());
    if width == 0 || height == 0 {
        bail!("Canvas is empty after applying offsets ({width}x{height})");
    }
    GrayImage::from_raw(width, height, canvas.into_bytes())
        .context("Canvas size does not match its pixel buffer")
}
