//! Composition - the fixed drawing sequence
//!
//! A composition places the three patterns on the canvas: the mandala in
//! the middle, the spiral on the left and the tessellation on the right.
//! Each stage lifts the pen, moves to its origin, lowers the pen and draws.

use turtle_art_math::Vec2;

use crate::patterns::{
    draw_spiral, draw_tessellation, mandala_circle_count_within, spiral_segment_count_within,
    Mandala, MAX_MANDALA_CIRCLES, MAX_SPIRAL_SEGMENTS,
};
use crate::{ArtError, Color, Drawing, Pen, Turtle};

/// Deepest mandala depth or tessellation level count accepted
pub const MAX_RECURSION_DEPTH: u32 = 9;

/// Where and how big to draw the mandala
#[derive(Clone, Debug, PartialEq)]
pub struct MandalaStage {
    pub origin: Vec2,
    pub radius: f32,
    pub depth: u32,
}

impl Default for MandalaStage {
    fn default() -> Self {
        Self {
            origin: Vec2::new(0.0, -150.0),
            radius: 150.0,
            depth: 5,
        }
    }
}

/// Where, in which color and how big to draw the spiral
#[derive(Clone, Debug, PartialEq)]
pub struct SpiralStage {
    pub origin: Vec2,
    pub color: Color,
    pub length: f32,
    /// Shrink factor per segment, in (0, 1)
    pub factor: f32,
}

impl Default for SpiralStage {
    fn default() -> Self {
        Self {
            origin: Vec2::new(-300.0, 0.0),
            color: Color::from_rgb8(0x00, 0xff, 0xff),
            length: 200.0,
            factor: 0.95,
        }
    }
}

/// Where, in which color and how big to draw the tessellation
#[derive(Clone, Debug, PartialEq)]
pub struct TessellationStage {
    pub origin: Vec2,
    pub color: Color,
    pub size: f32,
    pub levels: u32,
}

impl Default for TessellationStage {
    fn default() -> Self {
        Self {
            origin: Vec2::new(300.0, 0.0),
            color: Color::from_rgb8(0xff, 0xff, 0x00),
            size: 100.0,
            levels: 3,
        }
    }
}

/// The full drawing: background plus the three staged patterns
#[derive(Clone, Debug, PartialEq)]
pub struct Composition {
    background: Color,
    mandala: Mandala,
    mandala_stage: MandalaStage,
    spiral: SpiralStage,
    tessellation: TessellationStage,
}

impl Default for Composition {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            mandala: Mandala::default(),
            mandala_stage: MandalaStage::default(),
            spiral: SpiralStage::default(),
            tessellation: TessellationStage::default(),
        }
    }
}

impl Composition {
    /// Build a composition, validating every stage
    pub fn new(
        background: Color,
        mandala: Mandala,
        mandala_stage: MandalaStage,
        spiral: SpiralStage,
        tessellation: TessellationStage,
    ) -> Result<Self, ArtError> {
        check_size("Mandala radius", mandala_stage.radius)?;
        check_size("Spiral length", spiral.length)?;
        check_size("Tessellation size", tessellation.size)?;
        check_depth("Mandala depth", mandala_stage.depth)?;
        check_depth("Tessellation levels", tessellation.levels)?;

        if !(spiral.factor > 0.0 && spiral.factor < 1.0) {
            return Err(ArtError::InvalidShrinkFactor(spiral.factor));
        }
        // Factors just below 1 shrink too slowly to ever reach the minimum length
        if spiral_segment_count_within(spiral.length, spiral.factor, MAX_SPIRAL_SEGMENTS).is_none() {
            return Err(ArtError::TooComplex { what: "Spiral", limit: MAX_SPIRAL_SEGMENTS });
        }
        if mandala_circle_count_within(mandala.symmetry(), mandala_stage.depth, MAX_MANDALA_CIRCLES)
            .is_none()
        {
            return Err(ArtError::TooComplex { what: "Mandala", limit: MAX_MANDALA_CIRCLES });
        }

        Ok(Self {
            background,
            mandala,
            mandala_stage,
            spiral,
            tessellation,
        })
    }

    /// Canvas background color
    pub fn background(&self) -> Color {
        self.background
    }

    /// Mandala parameters
    pub fn mandala(&self) -> &Mandala {
        &self.mandala
    }

    /// Mandala placement
    pub fn mandala_stage(&self) -> &MandalaStage {
        &self.mandala_stage
    }

    /// Spiral placement
    pub fn spiral(&self) -> &SpiralStage {
        &self.spiral
    }

    /// Tessellation placement
    pub fn tessellation(&self) -> &TessellationStage {
        &self.tessellation
    }

    /// Run the fixed drawing sequence on `turtle`
    pub fn draw(&self, turtle: &mut Turtle) {
        turtle.hide();

        move_pen(turtle, self.mandala_stage.origin);
        self.mandala.draw(turtle, self.mandala_stage.radius, self.mandala_stage.depth);
        log::debug!(
            "Mandala drawn: symmetry {}, depth {}, {} segments so far",
            self.mandala.symmetry(),
            self.mandala_stage.depth,
            turtle.drawing().segment_count()
        );

        move_pen(turtle, self.spiral.origin);
        turtle.set_color(self.spiral.color);
        draw_spiral(turtle, self.spiral.length, self.spiral.factor);
        log::debug!(
            "Spiral drawn: length {}, factor {}, {} segments so far",
            self.spiral.length,
            self.spiral.factor,
            turtle.drawing().segment_count()
        );

        move_pen(turtle, self.tessellation.origin);
        turtle.set_color(self.tessellation.color);
        draw_tessellation(turtle, self.tessellation.size, self.tessellation.levels);
        log::debug!(
            "Tessellation drawn: size {}, levels {}, {} segments total",
            self.tessellation.size,
            self.tessellation.levels,
            turtle.drawing().segment_count()
        );
    }

    /// Draw with a fresh turtle and return the recorded drawing
    pub fn render(&self) -> Drawing {
        let mut turtle = Turtle::new();
        self.draw(&mut turtle);
        turtle.into_drawing()
    }
}

fn check_size(what: &'static str, value: f32) -> Result<(), ArtError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ArtError::NonPositiveSize { what, value })
    }
}

fn check_depth(what: &'static str, value: u32) -> Result<(), ArtError> {
    if value > MAX_RECURSION_DEPTH {
        return Err(ArtError::RecursionTooDeep { what, value, max: MAX_RECURSION_DEPTH });
    }
    Ok(())
}

/// Lift the pen, reposition, lower the pen
fn move_pen(turtle: &mut Turtle, origin: Vec2) {
    turtle.pen_up();
    turtle.goto(origin);
    turtle.pen_down();
}
