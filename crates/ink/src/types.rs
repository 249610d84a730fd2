use serde::{Deserialize, Serialize};

use crate::constants::{ERASER_BRUSH_REF, PENCIL_BRUSH_REF};

/// Stroke tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum Brush {
    #[default]
    Pencil = 0,
    Eraser = 1,
}

impl Brush {
    /// Resolve a `brushRef` attribute value. Returns None for unknown references.
    pub fn from_reference(reference: &str) -> Option<Self> {
        match reference {
            PENCIL_BRUSH_REF => Some(Brush::Pencil),
            ERASER_BRUSH_REF => Some(Brush::Eraser),
            _ => None,
        }
    }
}

/// Pen state of a trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum TraceKind {
    #[default]
    PenUp = 0,
    PenDown = 1,
}

/// Horizontal/vertical offsets configured by the host.
///
/// Only `x` shifts decoded coordinates; `y` only shrinks the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Offsets {
    pub x: i32,
    pub y: i32,
}

impl Offsets {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Paper and digitizer dimensions discovered in a document.
///
/// A zero field means the document never supplied it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub paper_width: f64,
    pub paper_height: f64,
    pub digitizer_width: f64,
    pub digitizer_height: f64,
}

impl DocumentMetadata {
    pub fn new(
        paper_width: f64,
        paper_height: f64,
        digitizer_width: f64,
        digitizer_height: f64,
    ) -> Self {
        Self {
            paper_width,
            paper_height,
            digitizer_width,
            digitizer_height,
        }
    }

    /// Digitizer-to-paper magnification, rounded half away from zero to two
    /// decimal places.
    ///
    /// Undefined until both widths are known and the rounded ratio is non-zero.
    pub fn pen_mag(&self) -> Option<f64> {
        if !(self.paper_width > 0.0 && self.digitizer_width > 0.0) {
            return None;
        }
        let mag = round_half_away(self.digitizer_width / self.paper_width, 2);
        (mag > 0.0 && mag.is_finite()).then_some(mag)
    }

    pub fn has_paper_size(&self) -> bool {
        self.paper_width != 0.0 && self.paper_height != 0.0
    }

    pub fn has_digitizer_size(&self) -> bool {
        self.digitizer_width != 0.0 && self.digitizer_height != 0.0
    }
}

/// `f64::round` already rounds half away from zero; this scales it to `digits`.
fn round_half_away(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}

/// One decoded digitizer sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Raw digitizer X
    pub x: f64,
    /// Raw digitizer Y
    pub y: f64,
    /// Raw pressure-width channel
    pub w: f64,
    /// Digitizer-oriented X used for interpolation
    pub plot_x: u32,
    /// Digitizer-oriented Y used for interpolation
    pub plot_y: u32,
    /// Canvas column of the stamp center
    pub draw_x: i32,
    /// Canvas row of the stamp center
    pub draw_y: i32,
    /// Quantized stamp width in pixels
    pub width: u32,
}

impl Sample {
    /// The fields that identify a sample on the canvas.
    #[inline]
    pub fn footprint(&self) -> (i32, i32, u32) {
        (self.draw_x, self.draw_y, self.width)
    }
}

/// A decoded stroke. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    kind: TraceKind,
    brush: Brush,
    samples: Vec<Sample>,
}

impl Trace {
    pub fn new(kind: TraceKind, brush: Brush, samples: Vec<Sample>) -> Self {
        Self {
            kind,
            brush,
            samples,
        }
    }

    pub fn pen_up(brush: Brush) -> Self {
        Self::new(TraceKind::PenUp, brush, Vec::new())
    }

    #[inline]
    pub fn kind(&self) -> TraceKind {
        self.kind
    }

    #[inline]
    pub fn brush(&self) -> Brush {
        self.brush
    }

    #[inline]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn is_pen_down(&self) -> bool {
        self.kind == TraceKind::PenDown
    }
}
