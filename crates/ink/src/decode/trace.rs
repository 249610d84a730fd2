//! `trace` element decoding

use roxmltree::Node;
use tracing::debug;

use crate::mapping::CoordinateMapper;
use crate::types::{Brush, Sample, Trace, TraceKind};
use crate::width::quantize_width;

use super::channels::{Channel, GroupDecoder};
use super::error::DecodeIssue;

/// Pen state from the `type` attribute. Anything but `penDown` is pen-up.
pub(crate) fn trace_kind(node: Node<'_, '_>) -> TraceKind {
    match node.attribute("type") {
        Some("penDown") => TraceKind::PenDown,
        _ => TraceKind::PenUp,
    }
}

/// Brush from the `brushRef` attribute, defaulting to pencil.
pub(crate) fn trace_brush(node: Node<'_, '_>, index: usize, issues: &mut Vec<DecodeIssue>) -> Brush {
    let Some(reference) = node.attribute("brushRef") else {
        return Brush::Pencil;
    };
    Brush::from_reference(reference).unwrap_or_else(|| {
        issues.push(DecodeIssue::UnknownBrushReference {
            trace: index,
            reference: reference.to_string(),
        });
        Brush::Pencil
    })
}

/// Decode one pen-down `trace` element.
pub(crate) fn decode_trace(
    node: Node<'_, '_>,
    index: usize,
    mapper: &CoordinateMapper,
    issues: &mut Vec<DecodeIssue>,
) -> Trace {
    let brush = trace_brush(node, index, issues);
    let text: String = node
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();

    let samples = decode_samples(&text, brush, mapper).unwrap_or_else(|(samples, group)| {
        issues.push(DecodeIssue::EncodingMismatch {
            trace: index,
            group,
            decoded: samples.len(),
        });
        samples
    });

    debug!(
        "decode_trace: trace {} brush={:?} samples={}",
        index,
        brush,
        samples.len()
    );
    Trace::new(TraceKind::PenDown, brush, samples)
}

/// Decode a trace's text into samples.
///
/// On an encoding mismatch, returns the samples decoded so far together with
/// the index of the offending group.
pub fn decode_samples(
    text: &str,
    brush: Brush,
    mapper: &CoordinateMapper,
) -> Result<Vec<Sample>, (Vec<Sample>, usize)> {
    let text = text.trim();
    let mut samples = Vec::new();
    if text.is_empty() {
        return Ok(samples);
    }

    let mut decoder = GroupDecoder::new();
    for (group_index, group) in text.split(',').enumerate() {
        let Some(values) = decoder.decode(group) else {
            return Err((samples, group_index));
        };

        let x = values[Channel::X as usize];
        let y = values[Channel::Y as usize];
        let w = values[Channel::W as usize];
        let point = mapper.map(x, y);

        samples.push(Sample {
            x,
            y,
            w,
            plot_x: point.plot_x,
            plot_y: point.plot_y,
            draw_x: point.draw_x,
            draw_y: point.draw_y,
            width: quantize_width(brush, mapper.scale_width(w)),
        });
    }

    Ok(samples)
}
