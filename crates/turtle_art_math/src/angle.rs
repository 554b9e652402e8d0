//! Heading helpers
//!
//! Headings are measured in degrees: 0° points east (`+x`), 90° points
//! north (`+y`), and positive angles turn counter-clockwise.

use crate::Vec2;

/// Wrap an angle in degrees into `[0, 360)`
#[inline]
pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Unit vector pointing along a heading
#[inline]
pub fn heading_vector(degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(cos, sin)
}
