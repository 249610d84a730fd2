//! Ink document decoding
//!
//! This module provides:
//! - [`InkDocument`] - metadata and pen-down traces of one loaded file
//! - [`GroupDecoder`] - the three-mode sample group state machine
//! - [`collapse_duplicates`] - consecutive duplicate removal per trace
//!
//! Decoding is best-effort. Only an unreadable or unparsable file is an
//! error; everything else is recorded as a [`DecodeIssue`] on the document
//! and the affected trace is skipped or truncated.

mod channels;
mod collapse;
mod document;
mod error;
mod trace;

use std::path::Path;

use tracing::{info, warn};

use crate::mapping::{CoordinateMapper, RasterProjection};
use crate::surface::{canvas_fits, canvas_size};
use crate::types::{Brush, DocumentMetadata, Offsets, Trace};

pub use channels::{Channel, Channels, EncodingMode, GroupDecoder};
pub use collapse::collapse_duplicates;
pub use document::DocumentShape;
pub use error::{DecodeError, DecodeIssue, DocumentProblem};
pub use trace::decode_samples;

use document::DocumentBuilder;

/// A decoded ink document. Never mutated after loading.
#[derive(Debug, Clone, Default)]
pub struct InkDocument {
    metadata: DocumentMetadata,
    offsets: Offsets,
    traces: Vec<Trace>,
    issues: Vec<DecodeIssue>,
}

impl InkDocument {
    /// Parse a document from its XML text.
    pub fn parse(text: &str, offsets: Offsets) -> Result<Self, DecodeError> {
        let xml = roxmltree::Document::parse(text)?;

        let mut builder = DocumentBuilder::new(offsets);
        builder.walk(xml.root_element());

        for issue in &builder.issues {
            warn!("InkDocument::parse: {}", issue);
        }

        let document = Self {
            metadata: builder.metadata,
            offsets,
            traces: builder.traces,
            issues: builder.issues,
        };
        info!(
            "InkDocument::parse: {} traces, pen_mag={:?}, {} issues",
            document.traces.len(),
            document.pen_mag(),
            document.issues.len()
        );
        Ok(document)
    }

    /// Read and parse a document file.
    pub fn open(path: impl AsRef<Path>, offsets: Offsets) -> Result<Self, DecodeError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text, offsets)
    }

    /// Parse, falling back to an empty document (no traces, zero sizes) when
    /// the text is not a readable document.
    pub fn load_or_empty(text: &str, offsets: Offsets) -> Self {
        Self::parse(text, offsets).unwrap_or_else(|e| {
            warn!("InkDocument::load_or_empty: {}", e);
            Self {
                offsets,
                ..Self::default()
            }
        })
    }

    #[inline]
    pub fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }

    #[inline]
    pub fn offsets(&self) -> Offsets {
        self.offsets
    }

    pub fn pen_mag(&self) -> Option<f64> {
        self.metadata.pen_mag()
    }

    pub fn mapper(&self) -> Option<CoordinateMapper> {
        CoordinateMapper::new(&self.metadata, self.offsets)
    }

    pub fn projection(&self) -> RasterProjection {
        RasterProjection::new(&self.metadata, self.offsets)
    }

    /// Pen-down traces in document order.
    #[inline]
    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }

    pub fn into_traces(self) -> Vec<Trace> {
        self.traces
    }

    pub fn trace_count(&self) -> usize {
        self.traces.len()
    }

    pub fn count_brush(&self, brush: Brush) -> usize {
        self.traces.iter().filter(|t| t.brush() == brush).count()
    }

    #[inline]
    pub fn issues(&self) -> &[DecodeIssue] {
        &self.issues
    }

    /// Everything that prevents playback. Empty when the document is usable.
    pub fn problems(&self) -> Vec<DocumentProblem> {
        let mut problems = Vec::new();
        if self.traces.is_empty() {
            problems.push(DocumentProblem::NoTraces);
        }
        if !self.metadata.has_paper_size() {
            problems.push(DocumentProblem::PaperSizeMissing);
        }
        if !self.metadata.has_digitizer_size() {
            problems.push(DocumentProblem::DigitizerSizeMissing);
        }
        let (width, height) = canvas_size(&self.metadata, self.offsets);
        if !canvas_fits(width, height) {
            problems.push(DocumentProblem::CanvasTooLarge { width, height });
        }
        problems
    }
}

/// Load a document into its metadata and retained traces.
pub fn load(text: &str, offsets: Offsets) -> Result<(DocumentMetadata, Vec<Trace>), DecodeError> {
    let document = InkDocument::parse(text, offsets)?;
    Ok((document.metadata, document.traces))
}
