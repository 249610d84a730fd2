//! Consecutive duplicate removal

use crate::types::{Sample, Trace};

/// Drop samples whose `(draw_x, draw_y, width)` equals the last kept sample.
///
/// The first sample is always kept. Kind and brush are carried over.
pub fn collapse_duplicates(trace: &Trace) -> Trace {
    let mut kept: Vec<Sample> = Vec::with_capacity(trace.len());
    for sample in trace.samples() {
        match kept.last() {
            Some(last) if last.footprint() == sample.footprint() => {}
            _ => kept.push(*sample),
        }
    }
    Trace::new(trace.kind(), trace.brush(), kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Brush, TraceKind};
    use proptest::prelude::*;

    fn sample(draw_x: i32, draw_y: i32, width: u32) -> Sample {
        Sample {
            x: 0.0,
            y: 0.0,
            w: 0.0,
            plot_x: 0,
            plot_y: 0,
            draw_x,
            draw_y,
            width,
        }
    }

    fn trace(samples: Vec<Sample>) -> Trace {
        Trace::new(TraceKind::PenDown, Brush::Eraser, samples)
    }

    #[test]
    fn test_drops_consecutive_duplicates() {
        let input = trace(vec![
            sample(1, 1, 2),
            sample(1, 1, 2),
            sample(2, 1, 2),
            sample(2, 1, 2),
            sample(2, 1, 2),
            sample(1, 1, 2),
        ]);
        let output = collapse_duplicates(&input);
        let footprints: Vec<_> = output.samples().iter().map(Sample::footprint).collect();
        assert_eq!(footprints, vec![(1, 1, 2), (2, 1, 2), (1, 1, 2)]);
        assert_eq!(output.brush(), Brush::Eraser);
        assert_eq!(output.kind(), TraceKind::PenDown);
    }

    #[test]
    fn test_width_change_is_kept() {
        let input = trace(vec![sample(1, 1, 2), sample(1, 1, 4)]);
        assert_eq!(collapse_duplicates(&input).len(), 2);
    }

    #[test]
    fn test_first_sample_at_origin_is_kept() {
        let input = trace(vec![sample(0, 0, 0), sample(0, 0, 0)]);
        assert_eq!(collapse_duplicates(&input).len(), 1);
    }

    #[test]
    fn test_empty_trace() {
        assert!(collapse_duplicates(&trace(Vec::new())).is_empty());
    }

    proptest! {
        #[test]
        fn prop_no_consecutive_duplicates(
            raw in proptest::collection::vec((0i32..3, 0i32..3, 1u32..3), 0..64)
        ) {
            let input = trace(raw.iter().map(|&(x, y, w)| sample(x, y, w)).collect());
            let output = collapse_duplicates(&input);

            for pair in output.samples().windows(2) {
                prop_assert_ne!(pair[0].footprint(), pair[1].footprint());
            }
            if let Some(first) = input.samples().first() {
                prop_assert_eq!(output.samples()[0], *first);
            }
        }
    }
}
