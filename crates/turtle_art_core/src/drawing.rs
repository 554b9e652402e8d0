//! Recorded drawing output
//!
//! A [`Drawing`] is the only thing the renderer sees: an ordered list of
//! polylines, each with a single color and width.

use turtle_art_math::Vec2;

use crate::Color;

/// A polyline drawn with one color and width
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Stroke color
    pub color: Color,
    /// Stroke width in canvas units
    pub width: f32,
    /// Polyline points; always at least two once a stroke has been extended
    pub points: Vec<Vec2>,
}

impl Stroke {
    /// Number of line segments in this stroke
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Iterate over the segments as `(start, end)` pairs
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Ordered collection of strokes
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Drawing {
    strokes: Vec<Stroke>,
}

impl Drawing {
    /// Create an empty drawing
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new stroke at `start`
    pub fn begin_stroke(&mut self, start: Vec2, color: Color, width: f32) {
        self.strokes.push(Stroke {
            color,
            width,
            points: vec![start],
        });
    }

    /// Extend the current stroke to `point`
    ///
    /// Does nothing if no stroke has been started.
    pub fn extend(&mut self, point: Vec2) {
        if let Some(stroke) = self.strokes.last_mut() {
            stroke.points.push(point);
        }
    }

    /// All strokes in drawing order
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Number of strokes
    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// Total number of line segments across all strokes
    pub fn segment_count(&self) -> usize {
        self.strokes.iter().map(Stroke::segment_count).sum()
    }

    /// Check whether anything has been drawn
    pub fn is_empty(&self) -> bool {
        self.segment_count() == 0
    }

    /// Axis-aligned bounds `(min, max)` of all points, or `None` if empty
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let mut points = self.strokes.iter().flat_map(|s| s.points.iter().copied());
        let first = points.next()?;
        Some(points.fold((first, first), |(min, max), p| {
            (min.min_components(p), max.max_components(p))
        }))
    }

    /// Remove all strokes
    pub fn clear(&mut self) {
        self.strokes.clear();
    }
}
