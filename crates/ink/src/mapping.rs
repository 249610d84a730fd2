//! Digitizer-space to raster-space conversion
//!
//! Every value is floored before use. Subtractions on the Y axis happen in
//! unsigned 32-bit space, so a Y beyond the digitizer height wraps instead of
//! going negative. `drawY` ends up as a wrapped signed value, which lands one
//! row past the canvas edge and is clipped by the compositor.

use crate::interpolate::PlotPoint;
use crate::types::{DocumentMetadata, Offsets};

/// Raster-space position of one sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappedPoint {
    pub plot_x: u32,
    pub plot_y: u32,
    pub draw_x: i32,
    pub draw_y: i32,
}

/// Maps raw digitizer coordinates and widths using the document's `pen_mag`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    pen_mag: f64,
    paper_height: f64,
    digitizer_height: f64,
    offsets: Offsets,
}

impl CoordinateMapper {
    /// Returns None while `pen_mag` is undefined for `metadata`.
    pub fn new(metadata: &DocumentMetadata, offsets: Offsets) -> Option<Self> {
        let pen_mag = metadata.pen_mag()?;
        Some(Self {
            pen_mag,
            paper_height: metadata.paper_height,
            digitizer_height: metadata.digitizer_height,
            offsets,
        })
    }

    #[inline]
    pub fn pen_mag(&self) -> f64 {
        self.pen_mag
    }

    #[inline]
    pub fn offsets(&self) -> Offsets {
        self.offsets
    }

    /// `floor(X / pen_mag)`
    #[inline]
    pub fn plot_x(&self, x: f64) -> u32 {
        wrap_u32((x / self.pen_mag).floor())
    }

    /// `(height_digi - Y)` truncated to unsigned, then divided and floored.
    #[inline]
    pub fn plot_y(&self, y: f64) -> u32 {
        let flipped = wrap_u32((self.digitizer_height - y).trunc());
        wrap_u32((flipped as f64 / self.pen_mag).floor())
    }

    /// `floor(X / pen_mag) - x_offset`
    #[inline]
    pub fn draw_x(&self, x: f64) -> i32 {
        (self.plot_x(x) as i64 - self.offsets.x as i64) as i32
    }

    /// `height_paper - 1 - floor((height_digi - Y) / pen_mag)`.
    ///
    /// The Y offset is never applied on this axis.
    #[inline]
    pub fn draw_y(&self, y: f64) -> i32 {
        let flipped = wrap_u32(((self.digitizer_height - y) / self.pen_mag).floor());
        (self.paper_height - 1.0 - flipped as f64) as i64 as i32
    }

    pub fn map(&self, x: f64, y: f64) -> MappedPoint {
        MappedPoint {
            plot_x: self.plot_x(x),
            plot_y: self.plot_y(y),
            draw_x: self.draw_x(x),
            draw_y: self.draw_y(y),
        }
    }

    /// Raw width channel to the unclamped pixel width fed to the width policy.
    #[inline]
    pub fn scale_width(&self, w: f64) -> i64 {
        (w / (self.pen_mag * 10.0)).floor() as i64
    }

    pub fn projection(&self) -> RasterProjection {
        RasterProjection {
            paper_height: self.paper_height,
            x_offset: self.offsets.x,
        }
    }
}

/// Converts interpolation points back to canvas coordinates.
///
/// Interpolation runs with X and Y swapped (digitizer orientation), so the
/// point's `y` becomes the canvas column and its `x` the flipped canvas row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RasterProjection {
    paper_height: f64,
    x_offset: i32,
}

impl RasterProjection {
    pub fn new(metadata: &DocumentMetadata, offsets: Offsets) -> Self {
        Self {
            paper_height: metadata.paper_height,
            x_offset: offsets.x,
        }
    }

    #[inline]
    pub fn to_canvas(&self, point: PlotPoint) -> (i32, i32) {
        let column = (point.y as i64 - self.x_offset as i64) as i32;
        let row = (self.paper_height - 1.0 - point.x as f64) as i64 as i32;
        (column, row)
    }
}

/// Float to `u32` with two's complement wrap for negative values.
#[inline]
fn wrap_u32(value: f64) -> u32 {
    (value as i64) as u32
}
