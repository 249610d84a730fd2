//! Stamp footprint on the canvas

/// Inclusive pixel box covered by one stamp. Starts may be negative; ends are
/// clamped to the last canvas column/row. Held in `i64` so boxes around
/// extreme `i32` centers cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawArea {
    pub start_x: i64,
    pub start_y: i64,
    pub end_x: i64,
    pub end_y: i64,
}

impl DrawArea {
    /// Box of side `width` around (`x`, `y`).
    ///
    /// Odd widths are centered. Even widths lose a column on the right and a
    /// row on the top: `x - w/2 ..= x + w/2 - 1` and `y - (w/2 - 1) ..= y + w/2`.
    pub fn around(x: i32, y: i32, width: u32, canvas_width: u32, canvas_height: u32) -> Self {
        let (x, y, half) = (i64::from(x), i64::from(y), i64::from(width / 2));
        let (start_x, end_x, start_y, end_y) = if width % 2 == 1 {
            (x - half, x + half, y - half, y + half)
        } else {
            (x - half, x + half - 1, y - (half - 1), y + half)
        };

        Self {
            start_x,
            start_y,
            end_x: end_x.min(i64::from(canvas_width) - 1),
            end_y: end_y.min(i64::from(canvas_height) - 1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.end_x < self.start_x.max(0) || self.end_y < self.start_y.max(0)
    }
}
