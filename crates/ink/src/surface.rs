//! Single-channel playback canvas - one byte per pixel, ink or background

use tracing::warn;

use crate::constants::{BACKGROUND, MAX_CANVAS_PIXELS};
use crate::types::{DocumentMetadata, Offsets};

/// An 8-bit grayscale canvas in row-major order.
///
/// Every pixel is either [`INK`](crate::constants::INK) or [`BACKGROUND`];
/// the compositor never writes anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Create a canvas filled with background
    pub fn new(width: u32, height: u32) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![BACKGROUND; pixel_count],
        }
    }

    /// Canvas covering the paper minus the configured offsets. A size over
    /// [`MAX_CANVAS_PIXELS`] yields an empty canvas.
    pub fn for_document(metadata: &DocumentMetadata, offsets: Offsets) -> Self {
        let (width, height) = canvas_size(metadata, offsets);
        if !canvas_fits(width, height) {
            warn!(
                "Canvas::for_document: {}x{} exceeds {} pixels, using an empty canvas",
                width, height, MAX_CANVAS_PIXELS
            );
            return Self::new(0, 0);
        }
        Self::new(width, height)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reset every pixel to background
    pub fn clear(&mut self) {
        self.pixels.fill(BACKGROUND);
    }

    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Does nothing if coordinates are out of bounds
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, value: u8) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = self.index(x, y);
        self.pixels[index] = value;
    }

    /// Raw pixel data for an external encoder
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.pixels
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|&p| p == BACKGROUND)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

/// Canvas dimensions for a document: paper size minus offsets.
pub fn canvas_size(metadata: &DocumentMetadata, offsets: Offsets) -> (u32, u32) {
    (
        shrink(metadata.paper_width, offsets.x),
        shrink(metadata.paper_height, offsets.y),
    )
}

#[inline]
pub fn canvas_fits(width: u32, height: u32) -> bool {
    u64::from(width) * u64::from(height) <= MAX_CANVAS_PIXELS
}

/// `floor(size) - offset`, saturating at zero.
fn shrink(size: f64, offset: i32) -> u32 {
    let shrunk = size.floor() as i64 - offset as i64;
    shrunk.clamp(0, u32::MAX as i64) as u32
}
