//! Recursive triangle tessellation

use crate::Pen;

/// Counter-clockwise turn after each triangle edge
pub const TESSELLATION_TURN_DEGREES: f32 = 120.0;

/// Draw a triangle of edge `size`, nesting a half-size triangle at each corner
///
/// Each level walks three edges; after every edge it recurses with
/// `size / 2` and `levels - 1`, then turns left 120°. Zero levels draws
/// nothing.
pub fn draw_tessellation<P: Pen + ?Sized>(pen: &mut P, size: f32, levels: u32) {
    if levels == 0 {
        return;
    }
    for _ in 0..3 {
        pen.forward(size);
        draw_tessellation(pen, size / 2.0, levels - 1);
        pen.left(TESSELLATION_TURN_DEGREES);
    }
}

/// Number of `forward` calls [`draw_tessellation`] makes: 3 + 3² + ... + 3^levels
pub fn tessellation_forward_count(levels: u32) -> usize {
    (1..=levels).map(|l| 3usize.pow(l)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PenCommand, RecordingPen, Turtle, Vec2};

    #[test]
    fn test_zero_levels_is_noop() {
        let mut pen = RecordingPen::new();
        draw_tessellation(&mut pen, 100.0, 0);
        assert!(pen.commands().is_empty());
    }

    #[test]
    fn test_single_level_is_triangle() {
        let mut pen = RecordingPen::new();
        draw_tessellation(&mut pen, 100.0, 1);
        assert_eq!(
            pen.commands(),
            &[
                PenCommand::Forward(100.0),
                PenCommand::Left(120.0),
                PenCommand::Forward(100.0),
                PenCommand::Left(120.0),
                PenCommand::Forward(100.0),
                PenCommand::Left(120.0),
            ]
        );
    }

    #[test]
    fn test_forward_counts_per_level() {
        for levels in 0..6 {
            let mut pen = RecordingPen::new();
            draw_tessellation(&mut pen, 100.0, levels);
            assert_eq!(pen.forward_count(), tessellation_forward_count(levels));
        }
        assert_eq!(tessellation_forward_count(3), 3 + 9 + 27);
    }

    #[test]
    fn test_deepest_level_has_three_to_the_levels_edges() {
        let levels = 3;
        let mut pen = RecordingPen::new();
        draw_tessellation(&mut pen, 100.0, levels);
        let smallest = 100.0 / 2f32.powi(levels as i32 - 1);
        let deepest = pen
            .commands()
            .iter()
            .filter(|c| **c == PenCommand::Forward(smallest))
            .count();
        assert_eq!(deepest, 3usize.pow(levels));
    }

    #[test]
    fn test_full_turns_leave_turtle_in_place() {
        let mut turtle = Turtle::new();
        draw_tessellation(&mut turtle, 100.0, 3);
        assert!(turtle.position().distance(Vec2::ZERO) < 1e-3);
        let h = turtle.heading();
        assert!(h < 1e-3 || h > 360.0 - 1e-3, "heading {}", h);
    }
}
