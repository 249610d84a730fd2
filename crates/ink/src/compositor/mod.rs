//! Trace playback onto a canvas
//!
//! For every trace in the requested range the compositor stamps each retained
//! sample and then every interpolated point between it and the previous
//! sample. Brush dispatch happens once per trace; the per-pixel loop is
//! monomorphised over the [`CompositeRule`].

mod draw_area;
mod stamping;

use tracing::{debug, warn};

use crate::interpolate::{Decimation, LineInterpolator, PlotPoint};
use crate::mapping::RasterProjection;
use crate::stamps::StampProvider;
use crate::surface::Canvas;
use crate::types::{Brush, Trace};

pub use draw_area::DrawArea;
pub use stamping::{CompositeRule, EraserRule, PencilRule, stamp_at};

/// Draws traces forward over an index range. Holds no per-direction state;
/// scrubbing backward is the caller's job (clear, then render from zero).
pub struct RasterCompositor<'a, P: StampProvider> {
    stamps: &'a P,
    projection: RasterProjection,
    interpolator: LineInterpolator,
}

impl<'a, P: StampProvider> RasterCompositor<'a, P> {
    pub fn new(stamps: &'a P, projection: RasterProjection) -> Self {
        Self {
            stamps,
            projection,
            interpolator: LineInterpolator::new(),
        }
    }

    #[inline]
    pub fn projection(&self) -> RasterProjection {
        self.projection
    }

    /// Draw `traces[start..end]`. The range is clamped to the list.
    pub fn render(&mut self, canvas: &mut Canvas, traces: &[Trace], start: usize, end: usize) {
        let end = end.min(traces.len());
        if start >= end {
            return;
        }
        debug!("RasterCompositor::render: traces {}..{}", start, end);

        for trace in &traces[start..end] {
            match trace.brush() {
                Brush::Pencil => self.draw_trace::<PencilRule>(canvas, trace),
                Brush::Eraser => self.draw_trace::<EraserRule>(canvas, trace),
            }
        }
    }

    fn draw_trace<R: CompositeRule>(&mut self, canvas: &mut Canvas, trace: &Trace) {
        let brush = trace.brush();
        let stamps = self.stamps;
        let mut previous: Option<PlotPoint> = None;

        for sample in trace.samples() {
            let current = PlotPoint::from_sample(sample);
            let Some(stamp) = stamps.resolve(brush, sample.width) else {
                warn!(
                    "RasterCompositor::draw_trace: no {:?} stamp for width {}",
                    brush, sample.width
                );
                // the next segment starts here, not at the last drawn sample
                previous = Some(current);
                continue;
            };

            stamp_at::<R>(canvas, stamp, sample.draw_x, sample.draw_y);

            if let Some(previous) = previous {
                // thinning follows the stroke's width, not the stamp that stood in for it
                let decimation = Decimation::for_stroke(brush, sample.width);
                let points = self.interpolator.interpolate(previous, current, decimation);
                for &point in points {
                    let (x, y) = self.projection.to_canvas(point);
                    stamp_at::<R>(canvas, stamp, x, y);
                }
            }
            previous = Some(current);
        }
    }
}
