//! 2D Mathematics Library
//!
//! This crate provides the planar vector and angle helpers used by the
//! turtle cursor and the stroke renderer.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D point/vector with x, y components
//! - [`angle`] - Degree-based heading helpers (0° = east, counter-clockwise positive)

mod vec2;
pub mod angle;

pub use vec2::Vec2;
pub use angle::{normalize_degrees, heading_vector};
