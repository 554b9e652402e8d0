//! Stroke geometry - bridges a recorded Drawing to GPU vertex buffers
//!
//! Every line segment becomes a screen-aligned quad of the stroke width.
//! Quads of one stroke overlap at the joints, which is invisible for the
//! thin opaque lines turtle art uses.

use turtle_art_core::{Drawing, Stroke};
use turtle_art_math::Vec2;

use crate::pipeline::{StrokeVertex, VERTICES_PER_SEGMENT};

/// Segments shorter than this produce no triangles
const MIN_SEGMENT_LENGTH: f32 = 1e-6;

/// GPU-ready triangles collected from a drawing
#[derive(Clone, Debug, Default)]
pub struct StrokeGeometry {
    /// Triangle list vertices
    pub vertices: Vec<StrokeVertex>,
}

impl StrokeGeometry {
    /// Create empty stroke geometry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create stroke geometry with room for `segment_capacity` segments
    pub fn with_capacity(segment_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(segment_capacity * VERTICES_PER_SEGMENT),
        }
    }

    /// Collect triangles for every stroke in a drawing
    ///
    /// * `width_scale` - multiplier applied to each stroke's pen width
    /// * `linear_output` - convert sRGB stroke colors to linear for `*Srgb` surfaces
    pub fn from_drawing(drawing: &Drawing, width_scale: f32, linear_output: bool) -> Self {
        let mut result = Self::with_capacity(drawing.segment_count());
        for stroke in drawing.strokes() {
            result.add_stroke(stroke, width_scale, linear_output);
        }
        result
    }

    /// Add a single stroke's triangles
    pub fn add_stroke(&mut self, stroke: &Stroke, width_scale: f32, linear_output: bool) {
        let color = if linear_output {
            stroke.color.to_linear()
        } else {
            stroke.color.to_array()
        };
        let half_width = 0.5 * stroke.width * width_scale;

        for (start, end) in stroke.segments() {
            self.add_segment(start, end, half_width, color);
        }
    }

    fn add_segment(&mut self, start: Vec2, end: Vec2, half_width: f32, color: [f32; 4]) {
        let dir = end - start;
        if dir.length() < MIN_SEGMENT_LENGTH {
            return;
        }
        let n = dir.normalized().perp() * half_width;

        let a = StrokeVertex::new(start + n, color);
        let b = StrokeVertex::new(start - n, color);
        let c = StrokeVertex::new(end - n, color);
        let d = StrokeVertex::new(end + n, color);

        // Counter-clockwise winding for both triangles
        self.vertices.extend_from_slice(&[a, b, c, a, c, d]);
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of segment quads
    pub fn segment_count(&self) -> usize {
        self.vertices.len() / VERTICES_PER_SEGMENT
    }

    /// Check if geometry is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Clear all geometry
    pub fn clear(&mut self) {
        self.vertices.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use turtle_art_core::{Color, Pen, Turtle};

    fn square_drawing() -> Drawing {
        let mut turtle = Turtle::new();
        turtle.set_color(Color::WHITE);
        for _ in 0..4 {
            turtle.forward(10.0);
            turtle.left(90.0);
        }
        turtle.into_drawing()
    }

    #[test]
    fn test_empty_drawing() {
        let geometry = StrokeGeometry::from_drawing(&Drawing::new(), 1.0, true);
        assert!(geometry.is_empty());
        assert_eq!(geometry.segment_count(), 0);
    }

    #[test]
    fn test_six_vertices_per_segment() {
        let drawing = square_drawing();
        let geometry = StrokeGeometry::from_drawing(&drawing, 1.0, true);
        assert_eq!(geometry.vertex_count(), 4 * VERTICES_PER_SEGMENT);
        assert_eq!(geometry.segment_count(), drawing.segment_count());
    }

    #[test]
    fn test_zero_length_segments_skipped() {
        let mut drawing = Drawing::new();
        drawing.begin_stroke(Vec2::ZERO, Color::WHITE, 1.0);
        drawing.extend(Vec2::ZERO);
        drawing.extend(Vec2::new(5.0, 0.0));
        let geometry = StrokeGeometry::from_drawing(&drawing, 1.0, false);
        assert_eq!(geometry.segment_count(), 1);
    }

    #[test]
    fn test_quad_width_and_winding() {
        let mut drawing = Drawing::new();
        drawing.begin_stroke(Vec2::ZERO, Color::WHITE, 2.0);
        drawing.extend(Vec2::new(10.0, 0.0));
        let geometry = StrokeGeometry::from_drawing(&drawing, 1.5, false);

        // Half width = 0.5 * 2.0 * 1.5
        let ys: Vec<f32> = geometry.vertices.iter().map(|v| v.position[1]).collect();
        assert!(ys.iter().all(|y| (y.abs() - 1.5).abs() < 1e-5));

        // Both triangles are counter-clockwise (positive signed area)
        for tri in geometry.vertices.chunks(3) {
            let [a, b, c] = [tri[0].position, tri[1].position, tri[2].position];
            let area = (b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1]);
            assert!(area > 0.0);
        }
    }

    #[test]
    fn test_color_space_conversion() {
        let mut drawing = Drawing::new();
        let gray = Color::new(0.5, 0.5, 0.5, 1.0);
        drawing.begin_stroke(Vec2::ZERO, gray, 1.0);
        drawing.extend(Vec2::new(1.0, 0.0));

        let srgb = StrokeGeometry::from_drawing(&drawing, 1.0, false);
        let linear = StrokeGeometry::from_drawing(&drawing, 1.0, true);
        assert_eq!(srgb.vertices[0].color, gray.to_array());
        assert_eq!(linear.vertices[0].color, gray.to_linear());
    }

    #[test]
    fn test_clear() {
        let mut geometry = StrokeGeometry::from_drawing(&square_drawing(), 1.0, true);
        geometry.clear();
        assert!(geometry.is_empty());
    }
}
