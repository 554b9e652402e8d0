//! The drawing cursor
//!
//! A [`Turtle`] has a position, a heading, a pen state and a style. Every
//! move with the pen down is recorded into its [`Drawing`].
//!
//! Coordinates are canvas units with the origin at the window center and
//! `+y` up. Headings are degrees, 0° = east, counter-clockwise positive.

use turtle_art_math::{Vec2, heading_vector, normalize_degrees};

use crate::{Color, Drawing, Pen};

/// Number of polygon sides used to approximate a full circle of `radius`
///
/// Larger circles get more sides, capped at 60.
pub fn circle_steps(radius: f32) -> u32 {
    1 + (11.0 + radius.abs() / 6.0).min(59.0) as u32
}

/// The drawing cursor
#[derive(Clone, Debug)]
pub struct Turtle {
    position: Vec2,
    heading: f32,
    pen_down: bool,
    color: Color,
    pen_width: f32,
    visible: bool,
    /// Whether the last stroke in `drawing` may still be extended
    stroke_open: bool,
    drawing: Drawing,
}

impl Default for Turtle {
    fn default() -> Self {
        Self::new()
    }
}

impl Turtle {
    /// Create a turtle at the origin, facing east, pen down, black, width 1
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            heading: 0.0,
            pen_down: true,
            color: Color::BLACK,
            pen_width: 1.0,
            visible: true,
            stroke_open: false,
            drawing: Drawing::new(),
        }
    }

    /// Current position
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Current heading in degrees, in `[0, 360)`
    pub fn heading(&self) -> f32 {
        self.heading
    }

    /// Set the absolute heading in degrees
    pub fn set_heading(&mut self, degrees: f32) {
        self.heading = normalize_degrees(degrees);
    }

    /// Whether moves currently draw
    pub fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    /// Current stroke color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Current stroke width
    pub fn pen_width(&self) -> f32 {
        self.pen_width
    }

    /// Change the stroke width
    pub fn set_pen_width(&mut self, width: f32) {
        if width != self.pen_width {
            self.pen_width = width;
            self.stroke_open = false;
        }
    }

    /// Whether the cursor glyph is shown
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hide the cursor glyph
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Lift the pen; subsequent moves do not draw
    pub fn pen_up(&mut self) {
        self.pen_down = false;
        self.stroke_open = false;
    }

    /// Lower the pen; subsequent moves draw
    pub fn pen_down(&mut self) {
        self.pen_down = true;
    }

    /// Move to an absolute position, drawing if the pen is down
    pub fn goto(&mut self, target: Vec2) {
        self.move_to(target);
    }

    /// Everything drawn so far
    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    /// Consume the turtle, returning its drawing
    pub fn into_drawing(self) -> Drawing {
        self.drawing
    }

    fn move_to(&mut self, target: Vec2) {
        if self.pen_down {
            if !self.stroke_open {
                self.drawing.begin_stroke(self.position, self.color, self.pen_width);
                self.stroke_open = true;
            }
            self.drawing.extend(target);
        }
        self.position = target;
    }
}

impl Pen for Turtle {
    fn forward(&mut self, distance: f32) {
        let target = self.position + heading_vector(self.heading) * distance;
        self.move_to(target);
    }

    fn left(&mut self, degrees: f32) {
        self.heading = normalize_degrees(self.heading + degrees);
    }

    fn circle(&mut self, radius: f32) {
        let steps = circle_steps(radius);
        let mut turn = 360.0 / steps as f32;
        let mut chord = 2.0 * radius * (0.5 * turn).to_radians().sin();
        // A negative radius walks the circle clockwise with the center on the right
        if radius < 0.0 {
            chord = -chord;
            turn = -turn;
        }
        let half_turn = 0.5 * turn;

        // Chords are laid at the midpoint heading of each arc
        self.left(half_turn);
        for _ in 0..steps {
            self.forward(chord);
            self.left(turn);
        }
        self.left(-half_turn);
    }

    fn set_color(&mut self, color: Color) {
        if color != self.color {
            self.color = color;
            self.stroke_open = false;
        }
    }
}
