//! Step-by-step trace playback
//!
//! A [`PlaybackSession`] owns the canvas and tracks how many traces are
//! currently drawn. Moving forward draws only the new traces; moving backward
//! clears the canvas and replays from the first trace.

use thiserror::Error;
use tracing::{debug, info};

use crate::compositor::RasterCompositor;
use crate::decode::InkDocument;
use crate::mapping::RasterProjection;
use crate::stamps::StampProvider;
use crate::surface::Canvas;
use crate::types::Trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("Playback position {requested} is past the last trace ({max})")]
    OutOfRange { requested: usize, max: usize },
}

pub struct PlaybackSession<P: StampProvider> {
    canvas: Canvas,
    traces: Vec<Trace>,
    stamps: P,
    projection: RasterProjection,
    position: usize,
}

impl<P: StampProvider> PlaybackSession<P> {
    /// Blank session at position zero.
    pub fn new(canvas: Canvas, traces: Vec<Trace>, stamps: P, projection: RasterProjection) -> Self {
        Self {
            canvas,
            traces,
            stamps,
            projection,
            position: 0,
        }
    }

    /// Session sized for `document`, advanced to `initial` traces (clamped to
    /// the trace count).
    pub fn open(document: &InkDocument, stamps: P, initial: usize) -> Self {
        let canvas = Canvas::for_document(document.metadata(), document.offsets());
        info!(
            "PlaybackSession::open: {}x{} canvas, {} traces",
            canvas.width(),
            canvas.height(),
            document.trace_count()
        );
        let mut session = Self::new(
            canvas,
            document.traces().to_vec(),
            stamps,
            document.projection(),
        );
        let initial = initial.min(session.len());
        if let Err(e) = session.seek(initial) {
            debug!("PlaybackSession::open: {}", e);
        }
        session
    }

    /// Move to `target` drawn traces.
    pub fn seek(&mut self, target: usize) -> Result<(), PlaybackError> {
        if target > self.traces.len() {
            return Err(PlaybackError::OutOfRange {
                requested: target,
                max: self.traces.len(),
            });
        }

        let start = if target < self.position {
            debug!(
                "PlaybackSession::seek: {} -> {}, replaying from zero",
                self.position, target
            );
            self.canvas.clear();
            0
        } else {
            self.position
        };

        let mut compositor = RasterCompositor::new(&self.stamps, self.projection);
        compositor.render(&mut self.canvas, &self.traces, start, target);
        self.position = target;
        Ok(())
    }

    /// Returns false when already at the end.
    pub fn step_forward(&mut self) -> bool {
        if self.position >= self.traces.len() {
            return false;
        }
        self.seek(self.position + 1).is_ok()
    }

    /// Returns false when already at the start.
    pub fn step_backward(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.seek(self.position - 1).is_ok()
    }

    /// Blank the canvas and rewind to zero.
    pub fn clear(&mut self) {
        self.canvas.clear();
        self.position = 0;
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.traces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    #[inline]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }

    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::INK;
    use crate::stamps::StampSet;
    use crate::types::Offsets;

    const STROKES: &str = r##"<ink>
        <annotation>
            <size type="paper"><x>100</x><y>100</y></size>
            <size type="digitizer"><x>200</x><y>200</y></size>
        </annotation>
        <trace type="penDown" brushRef="#br_pencil_1_1">10 10 0 0 0 0 20 0,40 10 0 0 0 0 20 0</trace>
        <trace type="penDown" brushRef="#br_pencil_1_1">10 100 0 0 0 0 20 0,40 100 0 0 0 0 20 0</trace>
        <trace type="penDown" brushRef="#br_eraser_1_FF">0 10 0 0 0 0 1200 0,60 10 0 0 0 0 1200 0</trace>
    </ink>"##;

    fn session(initial: usize) -> PlaybackSession<StampSet> {
        let doc = InkDocument::parse(STROKES, Offsets::default()).unwrap();
        PlaybackSession::open(&doc, StampSet::generated(), initial)
    }

    #[test]
    fn test_open_blank_and_full() {
        let blank = session(0);
        assert_eq!(blank.position(), 0);
        assert!(blank.canvas().is_blank());
        assert_eq!((blank.canvas().width(), blank.canvas().height()), (100, 100));

        let full = session(usize::MAX);
        assert_eq!(full.position(), 3);
        assert_eq!(full.len(), 3);
    }

    #[test]
    fn test_forward_then_backward_matches_fresh_render() {
        let mut scrubbed = session(0);
        scrubbed.seek(3).unwrap();
        scrubbed.seek(2).unwrap();

        let mut fresh = session(0);
        fresh.seek(2).unwrap();

        assert_eq!(scrubbed.canvas(), fresh.canvas());
        assert_eq!(scrubbed.position(), 2);
    }

    #[test]
    fn test_eraser_trace_erases() {
        let mut s = session(1);
        // first stroke at row 4
        assert_eq!(s.canvas().get_pixel(10, 4), Some(INK));
        s.seek(3).unwrap();
        assert_eq!(s.canvas().get_pixel(10, 4), Some(crate::constants::BACKGROUND));
        // second stroke at row 49 is untouched
        assert_eq!(s.canvas().get_pixel(10, 49), Some(INK));
    }

    #[test]
    fn test_steps_stop_at_bounds() {
        let mut s = session(0);
        assert!(!s.step_backward());
        assert!(s.step_forward());
        assert!(s.step_forward());
        assert!(s.step_forward());
        assert!(!s.step_forward());
        assert_eq!(s.position(), 3);
        assert!(s.step_backward());
        assert_eq!(s.position(), 2);
    }

    #[test]
    fn test_seek_out_of_range() {
        let mut s = session(1);
        let before = s.canvas().clone();
        assert_eq!(
            s.seek(4),
            Err(PlaybackError::OutOfRange {
                requested: 4,
                max: 3
            })
        );
        assert_eq!(s.position(), 1);
        assert_eq!(s.canvas(), &before);
    }

    #[test]
    fn test_clear_rewinds() {
        let mut s = session(3);
        s.clear();
        assert_eq!(s.position(), 0);
        assert!(s.canvas().is_blank());
    }
}
