//! Stroke width quantization

use crate::constants::{MAX_ERASER_WIDTH, MAX_PEN_WIDTH, MIN_ERASER_WIDTH, MIN_PEN_WIDTH};
use crate::types::Brush;

/// Quantizes a scaled width sample into the brush's discrete stamp widths.
///
/// `scaled` is the raw width channel already divided by `pen_mag * 10` and
/// floored (see [`crate::CoordinateMapper::scale_width`]).
pub fn quantize_width(brush: Brush, scaled: i64) -> u32 {
    match brush {
        Brush::Pencil => scaled.clamp(MIN_PEN_WIDTH as i64, MAX_PEN_WIDTH as i64) as u32,
        Brush::Eraser => {
            let even = scaled / 2 * 2;
            even.clamp(MIN_ERASER_WIDTH as i64, MAX_ERASER_WIDTH as i64) as u32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pencil_clamp() {
        assert_eq!(quantize_width(Brush::Pencil, 0), 1);
        assert_eq!(quantize_width(Brush::Pencil, 1), 1);
        assert_eq!(quantize_width(Brush::Pencil, 7), 7);
        assert_eq!(quantize_width(Brush::Pencil, 12), 11);
        assert_eq!(quantize_width(Brush::Pencil, -4), 1);
    }

    #[test]
    fn test_eraser_forced_even() {
        assert_eq!(quantize_width(Brush::Eraser, 13), 12);
        assert_eq!(quantize_width(Brush::Eraser, 14), 14);
        assert_eq!(quantize_width(Brush::Eraser, 7), 6);
        assert_eq!(quantize_width(Brush::Eraser, 3), 6);
        assert_eq!(quantize_width(Brush::Eraser, 63), 62);
        assert_eq!(quantize_width(Brush::Eraser, 1000), 62);
    }

    proptest! {
        #[test]
        fn prop_pencil_width_in_range(scaled in -1000i64..1000) {
            let w = quantize_width(Brush::Pencil, scaled);
            prop_assert!((MIN_PEN_WIDTH..=MAX_PEN_WIDTH).contains(&w));
        }

        #[test]
        fn prop_eraser_width_even_and_in_range(scaled in -1000i64..1000) {
            let w = quantize_width(Brush::Eraser, scaled);
            prop_assert_eq!(w % 2, 0);
            prop_assert!((MIN_ERASER_WIDTH..=MAX_ERASER_WIDTH).contains(&w));
        }
    }
}
