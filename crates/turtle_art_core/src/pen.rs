//! Pen trait - the drawing primitives the pattern generators depend on
//!
//! [`Turtle`](crate::Turtle) is the real implementation. [`RecordingPen`]
//! only logs the calls, which makes generator call counts and ordering easy
//! to check.

use crate::Color;

/// Drawing primitives used by the pattern generators
pub trait Pen {
    /// Move forward along the current heading, drawing if the pen is down
    fn forward(&mut self, distance: f32);

    /// Turn counter-clockwise by `degrees`
    fn left(&mut self, degrees: f32);

    /// Turn clockwise by `degrees`
    fn right(&mut self, degrees: f32) {
        self.left(-degrees);
    }

    /// Draw a full circle whose center is `radius` units to the left
    fn circle(&mut self, radius: f32);

    /// Change the stroke color
    fn set_color(&mut self, color: Color);
}

/// A single call made on a [`RecordingPen`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PenCommand {
    Forward(f32),
    Left(f32),
    Right(f32),
    Circle(f32),
    SetColor(Color),
}

/// A pen that records every call instead of drawing
#[derive(Clone, Debug, Default)]
pub struct RecordingPen {
    commands: Vec<PenCommand>,
}

impl RecordingPen {
    /// Create an empty recording
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls in order
    pub fn commands(&self) -> &[PenCommand] {
        &self.commands
    }

    /// Number of `forward` calls
    pub fn forward_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, PenCommand::Forward(_))).count()
    }

    /// Number of `circle` calls
    pub fn circle_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, PenCommand::Circle(_))).count()
    }

    /// The active color and radius of every circle, in drawing order
    pub fn circles(&self) -> Vec<(Color, f32)> {
        let mut color = Color::default();
        let mut out = Vec::new();
        for command in &self.commands {
            match *command {
                PenCommand::SetColor(c) => color = c,
                PenCommand::Circle(r) => out.push((color, r)),
                _ => {}
            }
        }
        out
    }

    /// Net heading change in degrees (counter-clockwise positive)
    pub fn net_turn(&self) -> f32 {
        self.commands
            .iter()
            .map(|c| match *c {
                PenCommand::Left(a) => a,
                PenCommand::Right(a) => -a,
                _ => 0.0,
            })
            .sum()
    }
}

impl Pen for RecordingPen {
    fn forward(&mut self, distance: f32) {
        self.commands.push(PenCommand::Forward(distance));
    }

    fn left(&mut self, degrees: f32) {
        self.commands.push(PenCommand::Left(degrees));
    }

    fn right(&mut self, degrees: f32) {
        self.commands.push(PenCommand::Right(degrees));
    }

    fn circle(&mut self, radius: f32) {
        self.commands.push(PenCommand::Circle(radius));
    }

    fn set_color(&mut self, color: Color) {
        self.commands.push(PenCommand::SetColor(color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut pen = RecordingPen::new();
        pen.forward(10.0);
        pen.right(20.0);
        pen.left(5.0);
        assert_eq!(
            pen.commands(),
            &[PenCommand::Forward(10.0), PenCommand::Right(20.0), PenCommand::Left(5.0)]
        );
        assert_eq!(pen.net_turn(), -15.0);
    }

    #[test]
    fn test_circles_track_active_color() {
        let mut pen = RecordingPen::new();
        pen.circle(1.0);
        pen.set_color(Color::WHITE);
        pen.circle(2.0);
        assert_eq!(pen.circle_count(), 2);
        assert_eq!(pen.circles(), vec![(Color::BLACK, 1.0), (Color::WHITE, 2.0)]);
    }
}
