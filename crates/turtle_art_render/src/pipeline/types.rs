//! GPU-compatible data types for the stroke pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};
use turtle_art_math::Vec2;

/// Each line segment becomes a quad: two triangles, six vertices
pub const VERTICES_PER_SEGMENT: usize = 6;

/// A stroke vertex in canvas space with color
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct StrokeVertex {
    /// Position in canvas units (origin at the center, +y up)
    pub position: [f32; 2],
    /// RGBA color, already in the surface's color space
    pub color: [f32; 4],
}

impl StrokeVertex {
    /// Create a new stroke vertex
    pub fn new(position: Vec2, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }
}

/// View uniforms for the stroke pass
///
/// `clip = (position + offset) * scale`
/// Layout: 16 bytes total (must match stroke.wgsl ViewUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ViewUniforms {
    /// Canvas units to clip units, per axis
    pub scale: [f32; 2],
    /// Translation applied before scaling
    pub offset: [f32; 2],
}

impl Default for ViewUniforms {
    fn default() -> Self {
        Self {
            scale: [1.0, 1.0],
            offset: [0.0, 0.0],
        }
    }
}

impl ViewUniforms {
    /// One canvas unit per logical pixel, origin at the window center
    pub fn canvas(logical_width: f32, logical_height: f32) -> Self {
        Self {
            scale: [2.0 / logical_width.max(1.0), 2.0 / logical_height.max(1.0)],
            offset: [0.0, 0.0],
        }
    }

    /// Uniform zoom that fits `min..max` into the window with a relative margin
    ///
    /// Falls back to [`canvas`](Self::canvas) for degenerate bounds.
    pub fn fit(min: Vec2, max: Vec2, logical_width: f32, logical_height: f32, margin: f32) -> Self {
        let extent = max - min;
        if extent.x <= 0.0 || extent.y <= 0.0 {
            return Self::canvas(logical_width, logical_height);
        }

        let width = logical_width.max(1.0);
        let height = logical_height.max(1.0);
        let padding = 1.0 + margin.max(0.0);
        let zoom = (width / (extent.x * padding)).min(height / (extent.y * padding));
        let center = (min + max) * 0.5;

        Self {
            scale: [2.0 * zoom / width, 2.0 * zoom / height],
            offset: [-center.x, -center.y],
        }
    }

    /// Map a canvas point to clip space (CPU mirror of the vertex shader)
    pub fn to_clip(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            (point.x + self.offset[0]) * self.scale[0],
            (point.y + self.offset[1]) * self.scale[1],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_stroke_vertex_size() {
        // 2 floats position + 4 floats color = 24 bytes
        assert_eq!(size_of::<StrokeVertex>(), 24);
    }

    #[test]
    fn test_view_uniforms_size() {
        // 2 floats scale + 2 floats offset = 16 bytes
        assert_eq!(size_of::<ViewUniforms>(), 16);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(std::mem::align_of::<StrokeVertex>(), 4);
        assert_eq!(std::mem::align_of::<ViewUniforms>(), 4);
    }

    #[test]
    fn test_canvas_maps_window_edges() {
        let view = ViewUniforms::canvas(1280.0, 960.0);
        let corner = view.to_clip(Vec2::new(640.0, -480.0));
        assert!((corner.x - 1.0).abs() < EPSILON);
        assert!((corner.y + 1.0).abs() < EPSILON);
        assert_eq!(view.to_clip(Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn test_fit_centers_and_keeps_aspect() {
        let view = ViewUniforms::fit(
            Vec2::new(-100.0, 0.0),
            Vec2::new(300.0, 100.0),
            800.0,
            800.0,
            0.0,
        );
        // Center of the bounds lands at the window center
        let center = view.to_clip(Vec2::new(100.0, 50.0));
        assert!(center.length() < EPSILON);
        // Width is the limiting extent: left/right edges touch the window edges
        let right = view.to_clip(Vec2::new(300.0, 50.0));
        assert!((right.x - 1.0).abs() < EPSILON);
        // Uniform zoom: same scale on both axes for a square window
        assert!((view.scale[0] - view.scale[1]).abs() < EPSILON);
    }

    #[test]
    fn test_fit_margin_shrinks() {
        let tight = ViewUniforms::fit(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0), 100.0, 100.0, 0.0);
        let padded = ViewUniforms::fit(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0), 100.0, 100.0, 0.1);
        assert!(padded.scale[0] < tight.scale[0]);
    }

    #[test]
    fn test_fit_degenerate_bounds_falls_back() {
        let view = ViewUniforms::fit(Vec2::ZERO, Vec2::new(10.0, 0.0), 200.0, 100.0, 0.1);
        assert_eq!(view, ViewUniforms::canvas(200.0, 100.0));
    }
}
