//! Shrinking spiral

use crate::Pen;

/// Segments shorter than this end the spiral
pub const MIN_SPIRAL_LENGTH: f32 = 2.0;

/// Longest spiral a composition accepts
pub const MAX_SPIRAL_SEGMENTS: usize = 10_000;

/// Clockwise turn between segments
pub const SPIRAL_TURN_DEGREES: f32 = 20.0;

/// Draw a spiral: forward `length`, turn right 20°, repeat with `length * factor`
///
/// Stops once the length drops below [`MIN_SPIRAL_LENGTH`]. `factor` must be
/// in `(0, 1)` or the recursion never ends; [`Composition`](crate::Composition)
/// validates this before drawing.
pub fn draw_spiral<P: Pen + ?Sized>(pen: &mut P, length: f32, factor: f32) {
    if length < MIN_SPIRAL_LENGTH {
        return;
    }
    pen.forward(length);
    pen.right(SPIRAL_TURN_DEGREES);
    draw_spiral(pen, length * factor, factor);
}

/// Number of segments [`draw_spiral`] produces for the given inputs
///
/// Walks the same `f32` sequence as the recursion so rounding matches.
pub fn spiral_segment_count(length: f32, factor: f32) -> usize {
    let mut count = 0;
    let mut current = length;
    while current >= MIN_SPIRAL_LENGTH {
        count += 1;
        current *= factor;
    }
    count
}

/// Like [`spiral_segment_count`], but gives up once the count passes `limit`
///
/// Safe for any input: `None` for factors that never shrink the length
/// below the minimum (including `inf`, and `NaN` factors).
pub fn spiral_segment_count_within(length: f32, factor: f32, limit: usize) -> Option<usize> {
    if length.is_nan() {
        return None;
    }
    let mut count = 0;
    let mut current = length;
    while current >= MIN_SPIRAL_LENGTH {
        if count == limit {
            return None;
        }
        count += 1;
        current *= factor;
    }
    Some(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PenCommand, RecordingPen};

    #[test]
    fn test_short_length_is_noop() {
        let mut pen = RecordingPen::new();
        draw_spiral(&mut pen, 1.99, 0.5);
        assert!(pen.commands().is_empty());
    }

    #[test]
    fn test_halving_sequence() {
        let mut pen = RecordingPen::new();
        draw_spiral(&mut pen, 16.0, 0.5);
        // 16, 8, 4, 2 (2 is not < 2), then 1 stops
        assert_eq!(
            pen.commands(),
            &[
                PenCommand::Forward(16.0),
                PenCommand::Right(20.0),
                PenCommand::Forward(8.0),
                PenCommand::Right(20.0),
                PenCommand::Forward(4.0),
                PenCommand::Right(20.0),
                PenCommand::Forward(2.0),
                PenCommand::Right(20.0),
            ]
        );
        assert_eq!(spiral_segment_count(16.0, 0.5), 4);
    }

    #[test]
    fn test_count_bounded_by_log() {
        let (length, factor) = (200.0_f32, 0.95_f32);
        let mut pen = RecordingPen::new();
        draw_spiral(&mut pen, length, factor);

        let count = pen.forward_count();
        assert_eq!(count, spiral_segment_count(length, factor));

        // length * factor^(n-1) >= 2 > length * factor^n
        let bound = ((MIN_SPIRAL_LENGTH / length).ln() / factor.ln()).ceil() as usize;
        assert!(count <= bound + 1, "count {} exceeds bound {}", count, bound);
        assert!(count >= bound - 1);
    }

    #[test]
    fn test_every_segment_at_least_min_length() {
        let mut pen = RecordingPen::new();
        draw_spiral(&mut pen, 50.0, 0.8);
        for command in pen.commands() {
            if let PenCommand::Forward(d) = command {
                assert!(*d >= MIN_SPIRAL_LENGTH);
            }
        }
    }

    #[test]
    fn test_count_within_limit() {
        assert_eq!(spiral_segment_count_within(16.0, 0.5, 10), Some(4));
        assert_eq!(spiral_segment_count_within(16.0, 0.5, 4), Some(4));
        assert_eq!(spiral_segment_count_within(16.0, 0.5, 3), None);
        assert_eq!(spiral_segment_count_within(1.0, 0.5, 0), Some(0));
    }

    #[test]
    fn test_count_within_gives_up_on_endless_spirals() {
        assert_eq!(spiral_segment_count_within(f32::INFINITY, 0.5, MAX_SPIRAL_SEGMENTS), None);
        assert_eq!(spiral_segment_count_within(f32::NAN, 0.5, MAX_SPIRAL_SEGMENTS), None);
        assert_eq!(spiral_segment_count_within(200.0, 1.0, MAX_SPIRAL_SEGMENTS), None);
        assert_eq!(spiral_segment_count_within(200.0, 0.99999994, MAX_SPIRAL_SEGMENTS), None);
    }
}
