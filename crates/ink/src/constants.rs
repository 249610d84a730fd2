/// Number of channels in a trace sample group (X, Y, F, Z, OTx, OTy, W, T).
pub const CHANNEL_COUNT: usize = 8;

/// Narrowest pencil stroke in pixels.
pub const MIN_PEN_WIDTH: u32 = 1;

/// Widest pencil stroke in pixels.
pub const MAX_PEN_WIDTH: u32 = 11;

/// Narrowest eraser stroke in pixels (eraser widths are always even).
pub const MIN_ERASER_WIDTH: u32 = 6;

/// Widest eraser stroke in pixels.
pub const MAX_ERASER_WIDTH: u32 = 62;

/// Pencil stamp used when the provider has no bitmap for the requested width.
pub const FALLBACK_PEN_WIDTH: u32 = 2;

/// Eraser stamp used when the provider has no bitmap for the requested width.
pub const FALLBACK_ERASER_WIDTH: u32 = MIN_ERASER_WIDTH;

/// Maximum points produced for one interpolated segment. Extra points are dropped.
pub const INTERPOLATION_CAPACITY: usize = 512;

/// Largest canvas, in pixels, a document may ask for.
pub const MAX_CANVAS_PIXELS: u64 = 1 << 28;

/// Canvas value for an inked pixel.
pub const INK: u8 = 0x00;

/// Canvas value for an untouched pixel.
pub const BACKGROUND: u8 = 0xFF;

/// `brushRef` attribute value selecting the pencil.
pub const PENCIL_BRUSH_REF: &str = "#br_pencil_1_1";

/// `brushRef` attribute value selecting the eraser.
pub const ERASER_BRUSH_REF: &str = "#br_eraser_1_FF";

/// Digitizer sizes in the `paper` document shape are stored in hundredths.
pub const DIGITIZER_MAX_SCALE: f64 = 100.0;
