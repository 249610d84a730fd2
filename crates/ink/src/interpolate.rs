//! Point interpolation between consecutive samples
//!
//! An integer midpoint line walk in digitizer orientation. The driving axis is
//! the one with the larger extent and always advances by +1; the minor axis
//! follows an accumulated error term. Eraser strokes are thinned according to
//! the stamp width so wide erasers are not stamped on every pixel.

use tracing::debug;

use crate::constants::INTERPOLATION_CAPACITY;
use crate::types::{Brush, Sample};

/// A point in interpolation space. `x` carries the sample's `plot_y` and `y`
/// its `plot_x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlotPoint {
    pub x: i32,
    pub y: i32,
}

impl PlotPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Swap the sample's plot axes into interpolation orientation.
    ///
    /// Plot coordinates are narrowed to the digitizer's 16-bit range.
    pub fn from_sample(sample: &Sample) -> Self {
        Self {
            x: sample.plot_y as u16 as i32,
            y: sample.plot_x as u16 as i32,
        }
    }
}

/// Which interpolated points are kept after the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decimation {
    /// Every point
    Keep,
    /// Only every n-th point (1-indexed)
    Every(u32),
}

impl Decimation {
    /// Pencil strokes are never thinned. Eraser thinning depends on the
    /// applied stamp width.
    pub fn for_stroke(brush: Brush, stamp_width: u32) -> Self {
        match brush {
            Brush::Pencil => Decimation::Keep,
            Brush::Eraser => match stamp_width {
                22.. => Decimation::Keep,
                16.. => Decimation::Every(8),
                12.. => Decimation::Every(2),
                6.. => Decimation::Every(1),
                _ => Decimation::Keep,
            },
        }
    }

    #[inline]
    fn keeps(self, counter: u32) -> bool {
        match self {
            Decimation::Keep => true,
            Decimation::Every(step) => counter % step == 0,
        }
    }
}

/// Reusable fixed-capacity buffer for segment interpolation.
#[derive(Debug)]
pub struct LineInterpolator {
    points: Vec<PlotPoint>,
}

impl Default for LineInterpolator {
    fn default() -> Self {
        Self::new()
    }
}

impl LineInterpolator {
    pub fn new() -> Self {
        Self {
            points: Vec::with_capacity(INTERPOLATION_CAPACITY),
        }
    }

    /// Interpolate the segment `from -> to`.
    ///
    /// The returned points start at the endpoint with the smaller driving-axis
    /// coordinate, which is always emitted. At most
    /// [`INTERPOLATION_CAPACITY`] points are returned; the rest of the
    /// segment is dropped.
    pub fn interpolate(
        &mut self,
        from: PlotPoint,
        to: PlotPoint,
        decimation: Decimation,
    ) -> &[PlotPoint] {
        self.points.clear();

        let dx = (to.x - from.x).abs();
        let dy = (to.y - from.y).abs();

        if dx > dy {
            self.walk(
                (from.x, from.y),
                (to.x, to.y),
                (dx, dy),
                decimation,
                |major, minor| PlotPoint::new(major, minor),
            );
        } else {
            self.walk(
                (from.y, from.x),
                (to.y, to.x),
                (dy, dx),
                decimation,
                |major, minor| PlotPoint::new(minor, major),
            );
        }

        &self.points
    }

    /// Walk along the driving axis. Tuples are `(major, minor)`.
    fn walk(
        &mut self,
        first: (i32, i32),
        second: (i32, i32),
        (major_extent, minor_extent): (i32, i32),
        decimation: Decimation,
        point: impl Fn(i32, i32) -> PlotPoint,
    ) {
        let (mut major, mut minor, end, step) = if first.0 > second.0 {
            let step = if first.1 > second.1 { 1 } else { -1 };
            (second.0, second.1, first.0, step)
        } else {
            let step = if first.1 < second.1 { 1 } else { -1 };
            (first.0, first.1, second.0, step)
        };

        let mut error = major_extent >> 1;
        self.push(point(major, minor));

        let mut counter: u32 = 0;
        while major < end {
            major += 1;
            error -= minor_extent;
            if error < 0 {
                error += major_extent;
                minor += step;
            }

            counter += 1;
            if decimation.keeps(counter) && !self.push(point(major, minor)) {
                debug!(
                    "LineInterpolator::walk: buffer full at {} points, dropping {} steps",
                    INTERPOLATION_CAPACITY,
                    end - major
                );
                break;
            }
        }
    }

    /// Returns false once the buffer is full.
    #[inline]
    fn push(&mut self, point: PlotPoint) -> bool {
        if self.points.len() < INTERPOLATION_CAPACITY {
            self.points.push(point);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(x: i32, y: i32) -> PlotPoint {
        PlotPoint::new(x, y)
    }

    #[test]
    fn test_horizontal_pencil_emits_every_point() {
        let mut interp = LineInterpolator::new();
        let points = interp.interpolate(p(0, 5), p(3, 5), Decimation::Keep);
        assert_eq!(points, &[p(0, 5), p(1, 5), p(2, 5), p(3, 5)]);
    }

    #[test]
    fn test_direction_is_normalized() {
        let mut interp = LineInterpolator::new();
        let points = interp.interpolate(p(3, 5), p(0, 5), Decimation::Keep).to_vec();
        assert_eq!(points, vec![p(0, 5), p(1, 5), p(2, 5), p(3, 5)]);
    }

    #[test]
    fn test_sloped_line_reaches_endpoint() {
        let mut interp = LineInterpolator::new();
        let points = interp.interpolate(p(0, 0), p(4, 2), Decimation::Keep);
        assert_eq!(points, &[p(0, 0), p(1, 0), p(2, 1), p(3, 1), p(4, 2)]);
    }

    #[test]
    fn test_steep_line_with_descending_minor_axis() {
        let mut interp = LineInterpolator::new();
        let points = interp.interpolate(p(0, 4), p(2, 0), Decimation::Keep);
        assert_eq!(points, &[p(2, 0), p(2, 1), p(1, 2), p(1, 3), p(0, 4)]);
    }

    #[test]
    fn test_diagonal_drives_on_y() {
        let mut interp = LineInterpolator::new();
        let points = interp.interpolate(p(0, 0), p(3, 3), Decimation::Keep);
        assert_eq!(points, &[p(0, 0), p(1, 1), p(2, 2), p(3, 3)]);
    }

    #[test]
    fn test_single_point_segment() {
        let mut interp = LineInterpolator::new();
        let points = interp.interpolate(p(7, 7), p(7, 7), Decimation::Keep);
        assert_eq!(points, &[p(7, 7)]);
    }

    #[test]
    fn test_decimation_thresholds() {
        assert_eq!(Decimation::for_stroke(Brush::Pencil, 6), Decimation::Keep);
        assert_eq!(Decimation::for_stroke(Brush::Eraser, 62), Decimation::Keep);
        assert_eq!(Decimation::for_stroke(Brush::Eraser, 22), Decimation::Keep);
        assert_eq!(Decimation::for_stroke(Brush::Eraser, 20), Decimation::Every(8));
        assert_eq!(Decimation::for_stroke(Brush::Eraser, 16), Decimation::Every(8));
        assert_eq!(Decimation::for_stroke(Brush::Eraser, 14), Decimation::Every(2));
        assert_eq!(Decimation::for_stroke(Brush::Eraser, 12), Decimation::Every(2));
        assert_eq!(Decimation::for_stroke(Brush::Eraser, 6), Decimation::Every(1));
        assert_eq!(Decimation::for_stroke(Brush::Eraser, 4), Decimation::Keep);
    }

    #[test]
    fn test_eraser_16_keeps_every_eighth_step() {
        let mut interp = LineInterpolator::new();
        let decimation = Decimation::for_stroke(Brush::Eraser, 16);
        let points = interp.interpolate(p(0, 0), p(20, 0), decimation);
        // first point plus floor(20 / 8) steps
        assert_eq!(points, &[p(0, 0), p(8, 0), p(16, 0)]);
    }

    #[test]
    fn test_eraser_12_keeps_every_second_step() {
        let mut interp = LineInterpolator::new();
        let decimation = Decimation::for_stroke(Brush::Eraser, 12);
        let points = interp.interpolate(p(0, 0), p(0, 20), decimation);
        assert_eq!(points.len(), 11);
        assert_eq!(points[1], p(0, 2));
    }

    #[test]
    fn test_capacity_limit() {
        let mut interp = LineInterpolator::new();
        let points = interp.interpolate(p(0, 0), p(2000, 10), Decimation::Keep);
        assert_eq!(points.len(), INTERPOLATION_CAPACITY);
        assert_eq!(points[0], p(0, 0));
        assert_eq!(points[511].x, 511);
    }

    #[test]
    fn test_buffer_is_reused() {
        let mut interp = LineInterpolator::new();
        interp.interpolate(p(0, 0), p(100, 0), Decimation::Keep);
        let points = interp.interpolate(p(0, 0), p(1, 0), Decimation::Keep);
        assert_eq!(points.len(), 2);
    }

    proptest! {
        #[test]
        fn prop_pencil_segment_is_connected(
            x1 in 0i32..400, y1 in 0i32..400, x2 in 0i32..400, y2 in 0i32..400
        ) {
            let mut interp = LineInterpolator::new();
            let points = interp.interpolate(p(x1, y1), p(x2, y2), Decimation::Keep);

            let extent = (x2 - x1).abs().max((y2 - y1).abs());
            prop_assert_eq!(points.len() as i32, extent + 1);

            let ends = [p(x1, y1), p(x2, y2)];
            prop_assert!(ends.contains(&points[0]));
            prop_assert!(ends.contains(&points[points.len() - 1]));

            for pair in points.windows(2) {
                prop_assert!((pair[1].x - pair[0].x).abs() <= 1);
                prop_assert!((pair[1].y - pair[0].y).abs() <= 1);
            }
        }
    }
}
