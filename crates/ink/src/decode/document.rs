//! Document shapes and metadata discovery
//!
//! Two root shapes are understood:
//!
//! - `ink`: `annotation` children carry `x`/`y` sizes under nodes typed
//!   `paper` or `digitizer`; `trace` elements are direct children.
//! - `paper`: sizes come from `channel` `max` attributes under
//!   `definitions/canvas/traceFormat` (paper) and
//!   `definitions/context/inkSource/traceFormat` (digitizer, in hundredths);
//!   `trace` elements may be nested anywhere.
//!
//! Both walk the document in order, so a trace is decoded with whatever sizes
//! were seen before it.

use roxmltree::Node;
use tracing::debug;

use crate::constants::DIGITIZER_MAX_SCALE;
use crate::mapping::CoordinateMapper;
use crate::types::{DocumentMetadata, Offsets, Trace, TraceKind};

use super::collapse::collapse_duplicates;
use super::error::DecodeIssue;
use super::trace::{decode_trace, trace_kind};

/// Root element layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentShape {
    Ink,
    Paper,
}

impl DocumentShape {
    /// Roots other than `paper` are read with the `ink` layout.
    pub fn of(root: Node<'_, '_>) -> Self {
        match root.tag_name().name() {
            "paper" => DocumentShape::Paper,
            _ => DocumentShape::Ink,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum SizeTarget {
    Paper,
    Digitizer,
}

/// Accumulates metadata and traces while walking one document.
#[derive(Debug, Default)]
pub(crate) struct DocumentBuilder {
    offsets: Offsets,
    pub(crate) metadata: DocumentMetadata,
    pub(crate) traces: Vec<Trace>,
    pub(crate) issues: Vec<DecodeIssue>,
    trace_index: usize,
}

impl DocumentBuilder {
    pub(crate) fn new(offsets: Offsets) -> Self {
        Self {
            offsets,
            ..Default::default()
        }
    }

    pub(crate) fn walk(&mut self, root: Node<'_, '_>) {
        let shape = DocumentShape::of(root);
        debug!(
            "DocumentBuilder::walk: root <{}> read as {:?}",
            root.tag_name().name(),
            shape
        );
        match shape {
            DocumentShape::Ink => self.walk_ink(root),
            DocumentShape::Paper => self.walk_paper(root),
        }
    }

    fn walk_ink(&mut self, root: Node<'_, '_>) {
        for child in root.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "annotation" => self.read_annotation(child),
                "trace" => self.add_trace(child),
                // timestamps and ink source definitions are not used
                _ => {}
            }
        }
    }

    fn walk_paper(&mut self, root: Node<'_, '_>) {
        for node in root.descendants().filter(Node::is_element) {
            match node.tag_name().name() {
                "channel" => self.read_channel(node),
                "trace" => self.add_trace(node),
                _ => {}
            }
        }
    }

    fn read_annotation(&mut self, annotation: Node<'_, '_>) {
        for node in annotation.children().filter(Node::is_element) {
            let target = match node.attribute("type") {
                Some("paper") => SizeTarget::Paper,
                Some("digitizer") => SizeTarget::Digitizer,
                _ => continue,
            };
            for axis in node.children().filter(Node::is_element) {
                let Some(value) = axis.text().and_then(parse_size) else {
                    continue;
                };
                match axis.tag_name().name() {
                    "x" => self.set_size(target, Some(value), None),
                    "y" => self.set_size(target, None, Some(value)),
                    _ => {}
                }
            }
        }
    }

    fn read_channel(&mut self, channel: Node<'_, '_>) {
        let path: Vec<&str> = channel
            .ancestors()
            .skip(1)
            .filter(Node::is_element)
            .map(|n| n.tag_name().name())
            .collect();

        let (target, scale) = match path.as_slice() {
            ["traceFormat", "canvas", "definitions", ..] => (SizeTarget::Paper, 1.0),
            ["traceFormat", "inkSource", "context", "definitions", ..] => {
                (SizeTarget::Digitizer, DIGITIZER_MAX_SCALE)
            }
            _ => return,
        };
        let Some(max) = channel.attribute("max").and_then(parse_size) else {
            return;
        };

        match channel.attribute("name") {
            Some("X") => self.set_size(target, Some(max * scale), None),
            Some("Y") => self.set_size(target, None, Some(max * scale)),
            _ => {}
        }
    }

    fn set_size(&mut self, target: SizeTarget, width: Option<f64>, height: Option<f64>) {
        let meta = &mut self.metadata;
        let (w, h) = match target {
            SizeTarget::Paper => (&mut meta.paper_width, &mut meta.paper_height),
            SizeTarget::Digitizer => (&mut meta.digitizer_width, &mut meta.digitizer_height),
        };
        if let Some(width) = width {
            *w = width;
        }
        if let Some(height) = height {
            *h = height;
        }
    }

    fn add_trace(&mut self, node: Node<'_, '_>) {
        let index = self.trace_index;
        self.trace_index += 1;

        if trace_kind(node) != TraceKind::PenDown {
            return;
        }
        let Some(mapper) = CoordinateMapper::new(&self.metadata, self.offsets) else {
            self.issues.push(DecodeIssue::MetadataMissing { trace: index });
            return;
        };

        let trace = decode_trace(node, index, &mapper, &mut self.issues);
        self.traces.push(collapse_duplicates(&trace));
    }
}

fn parse_size(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}
