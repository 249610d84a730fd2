//! Decode error types

use thiserror::Error;

/// Failure to produce any document at all.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Failed to read ink document: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed ink document: {0}")]
    Malformed(#[from] roxmltree::Error),
}

/// Non-fatal problem hit while decoding. The document still loads.
///
/// `trace` is the position of the `trace` element among all trace elements,
/// counted from zero in document order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeIssue {
    #[error("Trace {trace} skipped: paper or digitizer size not known yet")]
    MetadataMissing { trace: usize },
    #[error("Trace {trace} truncated at group {group} ({decoded} samples kept): encoding mismatch")]
    EncodingMismatch {
        trace: usize,
        group: usize,
        decoded: usize,
    },
    #[error("Trace {trace}: unknown brush reference {reference:?}, drawing as pencil")]
    UnknownBrushReference { trace: usize, reference: String },
}

/// Reason a loaded document cannot be played back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DocumentProblem {
    #[error("Trace data is zero")]
    NoTraces,
    #[error("Paper size not found")]
    PaperSizeMissing,
    #[error("Digitizer size not found")]
    DigitizerSizeMissing,
    #[error("Canvas of {width}x{height} pixels is too large")]
    CanvasTooLarge { width: u32, height: u32 },
}
