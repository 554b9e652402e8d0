//! Integration tests for the default composition
//!
//! These drive the generators through both the recording pen and a real
//! turtle and check the counts and ordering the patterns promise.

use turtle_art_core::{
    circle_steps, draw_spiral, draw_tessellation, Color, Composition, Mandala, Palette,
    RecordingPen, Turtle, Vec2,
};
use turtle_art_core::patterns::{mandala_circle_count, spiral_segment_count, tessellation_forward_count};

#[test]
fn test_mandala_sequence_is_reproducible() {
    let mandala = Mandala::default();

    let mut first = RecordingPen::new();
    mandala.draw(&mut first, 150.0, 5);
    let mut second = RecordingPen::new();
    mandala.draw(&mut second, 150.0, 5);

    assert_eq!(first.circles(), second.circles());
    assert_eq!(first.circle_count(), mandala_circle_count(6, 5));
}

#[test]
fn test_mandala_radius_counts_per_level() {
    let mut pen = RecordingPen::new();
    Mandala::default().draw(&mut pen, 150.0, 5);
    let circles = pen.circles();

    for level in 0..5 {
        let radius = 150.0 / 2f32.powi(level);
        let count = circles.iter().filter(|(_, r)| *r == radius).count();
        assert_eq!(count, 6usize.pow(level as u32 + 1), "radius {}", radius);
    }
}

#[test]
fn test_mandala_arm_colors_cycle_palette() {
    let palette = Palette::rainbow();
    let mut pen = RecordingPen::new();
    Mandala::default().draw(&mut pen, 150.0, 1);
    let colors: Vec<Color> = pen.circles().into_iter().map(|(c, _)| c).collect();
    assert_eq!(colors, palette.colors());
}

#[test]
fn test_default_drawing_segment_total() {
    let drawing = Composition::default().render();

    let mandala_segments: usize = (0..5)
        .map(|level| {
            let radius = 150.0 / 2f32.powi(level);
            6usize.pow(level as u32 + 1) * circle_steps(radius) as usize
        })
        .sum();
    let expected = mandala_segments
        + spiral_segment_count(200.0, 0.95)
        + tessellation_forward_count(3);

    assert_eq!(drawing.segment_count(), expected);
}

#[test]
fn test_default_drawing_bounds() {
    let drawing = Composition::default().render();
    let (min, max) = drawing.bounds().unwrap();

    // The arm pointing west puts a 150-radius circle centered at (0, -300)
    assert!(min.y < -449.0, "min {:?}", min);
    // The spiral starts at x = -300 and sweeps back west of its start
    assert!(min.x < -300.0, "min {:?}", min);
    // The tessellation's first edge runs east from x = 300
    assert!(max.x > 399.0, "max {:?}", max);
}

#[test]
fn test_spiral_and_tessellation_on_turtle() {
    let mut turtle = Turtle::new();
    draw_spiral(&mut turtle, 200.0, 0.95);
    assert_eq!(turtle.drawing().segment_count(), spiral_segment_count(200.0, 0.95));

    let mut turtle = Turtle::new();
    turtle.pen_up();
    turtle.goto(Vec2::new(300.0, 0.0));
    turtle.pen_down();
    draw_tessellation(&mut turtle, 100.0, 3);
    assert_eq!(turtle.drawing().segment_count(), 39);
    assert_eq!(turtle.drawing().stroke_count(), 1);
}
