//! Priority stamping
//!
//! No blending happens here. Each brush names the one canvas value it is
//! allowed to replace, and a stamp pixel is copied only over that value.

use crate::constants::{BACKGROUND, INK};
use crate::stamps::StampBitmap;
use crate::surface::Canvas;

use super::draw_area::DrawArea;

/// Which canvas pixels a brush may overwrite.
pub trait CompositeRule {
    /// The only canvas value this rule writes over
    const REPLACEABLE: u8;

    #[inline]
    fn writes_over(current: u8) -> bool {
        current == Self::REPLACEABLE
    }
}

/// Pencil only draws on background, so ink already on the canvas wins.
#[derive(Debug, Clone, Copy)]
pub struct PencilRule;

impl CompositeRule for PencilRule {
    const REPLACEABLE: u8 = BACKGROUND;
}

/// Eraser only touches ink.
#[derive(Debug, Clone, Copy)]
pub struct EraserRule;

impl CompositeRule for EraserRule {
    const REPLACEABLE: u8 = INK;
}

/// Stamp `stamp` centered on (`x`, `y`). Pixels with a negative canvas index
/// are skipped; the stamp index still advances over them. The area is empty
/// unless it overlaps the canvas, so every visited index fits in `u32`.
pub fn stamp_at<R: CompositeRule>(canvas: &mut Canvas, stamp: &StampBitmap, x: i32, y: i32) {
    let area = DrawArea::around(x, y, stamp.side(), canvas.width(), canvas.height());
    if area.is_empty() {
        return;
    }

    for canvas_y in area.start_y.max(0)..=area.end_y {
        let stamp_y = (canvas_y - area.start_y) as u32;
        for canvas_x in area.start_x.max(0)..=area.end_x {
            let stamp_x = (canvas_x - area.start_x) as u32;
            let (cx, cy) = (canvas_x as u32, canvas_y as u32);

            let Some(current) = canvas.get_pixel(cx, cy) else {
                continue;
            };
            if !R::writes_over(current) {
                continue;
            }
            if let Some(value) = stamp.get(stamp_x, stamp_y) {
                canvas.set_pixel(cx, cy, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Brush;

    fn ink_count(canvas: &Canvas) -> usize {
        canvas.as_bytes().iter().filter(|&&p| p == INK).count()
    }

    #[test]
    fn test_pencil_stamp_is_idempotent() {
        let mut canvas = Canvas::new(20, 20);
        let stamp = StampBitmap::disk(Brush::Pencil, 5);

        stamp_at::<PencilRule>(&mut canvas, &stamp, 10, 10);
        let first = canvas.clone();
        stamp_at::<PencilRule>(&mut canvas, &stamp, 10, 10);
        assert_eq!(canvas, first);
        assert!(ink_count(&canvas) > 0);
    }

    #[test]
    fn test_pencil_never_lightens_ink() {
        let mut canvas = Canvas::new(20, 20);
        let big = StampBitmap::disk(Brush::Pencil, 11);
        let small = StampBitmap::disk(Brush::Pencil, 3);

        stamp_at::<PencilRule>(&mut canvas, &big, 10, 10);
        let inked = ink_count(&canvas);
        stamp_at::<PencilRule>(&mut canvas, &small, 10, 10);
        assert_eq!(ink_count(&canvas), inked);

        // a background-only stamp over ink changes nothing
        let blank = StampBitmap::new(3, vec![BACKGROUND; 9]).unwrap();
        stamp_at::<PencilRule>(&mut canvas, &blank, 10, 10);
        assert_eq!(ink_count(&canvas), inked);
    }

    #[test]
    fn test_eraser_on_background_is_noop() {
        let mut canvas = Canvas::new(20, 20);
        let stamp = StampBitmap::disk(Brush::Eraser, 6);
        stamp_at::<EraserRule>(&mut canvas, &stamp, 10, 10);
        assert!(canvas.is_blank());
    }

    #[test]
    fn test_eraser_clears_ink() {
        let mut canvas = Canvas::new(20, 20);
        stamp_at::<PencilRule>(&mut canvas, &StampBitmap::disk(Brush::Pencil, 3), 10, 10);
        stamp_at::<EraserRule>(&mut canvas, &StampBitmap::disk(Brush::Eraser, 6), 10, 10);
        assert!(canvas.is_blank());
    }

    #[test]
    fn test_clips_at_negative_edge() {
        let mut canvas = Canvas::new(4, 4);
        let solid = StampBitmap::new(3, vec![INK; 9]).unwrap();
        stamp_at::<PencilRule>(&mut canvas, &solid, 0, 0);
        assert_eq!(ink_count(&canvas), 4);
        assert_eq!(canvas.get_pixel(1, 1), Some(INK));
        assert_eq!(canvas.get_pixel(2, 0), Some(BACKGROUND));
    }

    #[test]
    fn test_stamp_index_follows_area_start() {
        // only the bottom-right stamp pixel is ink
        let mut pixels = vec![BACKGROUND; 9];
        pixels[8] = INK;
        let stamp = StampBitmap::new(3, pixels).unwrap();

        let mut canvas = Canvas::new(4, 4);
        stamp_at::<PencilRule>(&mut canvas, &stamp, 0, 0);
        assert_eq!(canvas.get_pixel(1, 1), Some(INK));
        assert_eq!(ink_count(&canvas), 1);
    }

    #[test]
    fn test_even_stamp_placement() {
        let mut canvas = Canvas::new(10, 10);
        let solid = StampBitmap::new(2, vec![INK; 4]).unwrap();
        stamp_at::<PencilRule>(&mut canvas, &solid, 5, 5);
        // x: 4..=5, y: 5..=6
        for (x, y) in [(4, 5), (5, 5), (4, 6), (5, 6)] {
            assert_eq!(canvas.get_pixel(x, y), Some(INK));
        }
        assert_eq!(ink_count(&canvas), 4);
    }

    #[test]
    fn test_extreme_positions_are_skipped() {
        let mut canvas = Canvas::new(10, 10);
        let solid = StampBitmap::new(6, vec![INK; 36]).unwrap();
        for (x, y) in [(i32::MAX, 5), (5, i32::MAX), (i32::MIN, i32::MIN), (i32::MAX, i32::MIN)] {
            stamp_at::<PencilRule>(&mut canvas, &solid, x, y);
        }
        assert!(canvas.is_blank());
    }
}
