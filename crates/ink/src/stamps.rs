//! Stamp bitmaps and their provider
//!
//! A stamp is a square mask of ink and background bytes for one brush at one
//! width. Hosts may ship their own bitmaps through [`StampProvider`];
//! [`StampSet::generated`] rasterises solid disks for every width the width
//! policy can produce.

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::constants::{
    BACKGROUND, FALLBACK_ERASER_WIDTH, FALLBACK_PEN_WIDTH, INK, MAX_ERASER_WIDTH, MAX_PEN_WIDTH,
    MIN_ERASER_WIDTH, MIN_PEN_WIDTH,
};
use crate::types::Brush;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StampError {
    #[error("Stamp side must be non-zero")]
    ZeroSide,
    #[error("Stamp of side {side} needs {expected} bytes, got {actual}")]
    LengthMismatch {
        side: u32,
        expected: usize,
        actual: usize,
    },
    #[error("Stamp byte {index} is {value:#04x}, expected 0x00 or 0xFF")]
    InvalidValue { index: usize, value: u8 },
}

/// A square `side × side` mask, row-major, bytes in {0x00, 0xFF}.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampBitmap {
    side: u32,
    pixels: Vec<u8>,
}

impl StampBitmap {
    pub fn new(side: u32, pixels: Vec<u8>) -> Result<Self, StampError> {
        if side == 0 {
            return Err(StampError::ZeroSide);
        }
        let expected = (side as usize) * (side as usize);
        if pixels.len() != expected {
            return Err(StampError::LengthMismatch {
                side,
                expected,
                actual: pixels.len(),
            });
        }
        if let Some((index, &value)) = pixels
            .iter()
            .enumerate()
            .find(|&(_, &v)| v != INK && v != BACKGROUND)
        {
            return Err(StampError::InvalidValue { index, value });
        }
        Ok(Self { side, pixels })
    }

    /// Solid disk inscribed in a `side × side` square.
    ///
    /// Pencil disks are ink on background. Eraser disks are inverted
    /// (background inside, ink outside) so the corners only ever hit pixels
    /// that are already ink. A zero side is treated as one.
    pub fn disk(brush: Brush, side: u32) -> Self {
        let side = side.max(1);
        let (inside, outside) = match brush {
            Brush::Pencil => (INK, BACKGROUND),
            Brush::Eraser => (BACKGROUND, INK),
        };

        let center = (side as f64 - 1.0) / 2.0;
        let radius_sq = (side as f64 / 2.0).powi(2);
        let mut pixels = Vec::with_capacity((side * side) as usize);
        for row in 0..side {
            for col in 0..side {
                let dx = col as f64 - center;
                let dy = row as f64 - center;
                let hit = dx * dx + dy * dy <= radius_sq;
                pixels.push(if hit { inside } else { outside });
            }
        }
        Self { side, pixels }
    }

    #[inline]
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Value at (`col`, `row`). Returns None if out of bounds.
    #[inline]
    pub fn get(&self, col: u32, row: u32) -> Option<u8> {
        if col >= self.side || row >= self.side {
            return None;
        }
        Some(self.pixels[(row as usize) * (self.side as usize) + col as usize])
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// Source of stamp bitmaps keyed by brush and width.
pub trait StampProvider {
    fn lookup(&self, brush: Brush, width: u32) -> Option<&StampBitmap>;

    /// Lookup with the brush's fallback width substituted when `width` is
    /// absent.
    fn resolve(&self, brush: Brush, width: u32) -> Option<&StampBitmap> {
        self.lookup(brush, width).or_else(|| {
            let fallback = fallback_width(brush);
            debug!(
                "StampProvider::resolve: no {:?} stamp of width {}, using {}",
                brush, width, fallback
            );
            self.lookup(brush, fallback)
        })
    }
}

pub fn fallback_width(brush: Brush) -> u32 {
    match brush {
        Brush::Pencil => FALLBACK_PEN_WIDTH,
        Brush::Eraser => FALLBACK_ERASER_WIDTH,
    }
}

/// In-memory stamp provider
#[derive(Debug, Clone, Default)]
pub struct StampSet {
    stamps: HashMap<(Brush, u32), StampBitmap>,
}

impl StampSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Disk stamps for pencil widths 1..=11 and even eraser widths 6..=62.
    pub fn generated() -> Self {
        let mut set = Self::new();
        for width in MIN_PEN_WIDTH..=MAX_PEN_WIDTH {
            set.insert(Brush::Pencil, width, StampBitmap::disk(Brush::Pencil, width));
        }
        for width in (MIN_ERASER_WIDTH..=MAX_ERASER_WIDTH).step_by(2) {
            set.insert(Brush::Eraser, width, StampBitmap::disk(Brush::Eraser, width));
        }
        debug!("StampSet::generated: {} stamps", set.len());
        set
    }

    /// Register a stamp, replacing any previous one for the same key.
    pub fn insert(&mut self, brush: Brush, width: u32, stamp: StampBitmap) -> Option<StampBitmap> {
        self.stamps.insert((brush, width), stamp)
    }

    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }
}

impl StampProvider for StampSet {
    fn lookup(&self, brush: Brush, width: u32) -> Option<&StampBitmap> {
        self.stamps.get(&(brush, width))
    }
}
