//! Stroke Rendering Library
//!
//! This crate provides the wgpu-based pipeline that displays a recorded
//! turtle [`Drawing`](turtle_art_core::Drawing) in a window.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`stroke_geometry::StrokeGeometry`] - Converts strokes into GPU triangles
//! - [`pipeline::StrokePipeline`] - Draws the stroke triangles with optional MSAA
//! - [`pipeline::ViewUniforms`] - Maps canvas units to clip space

pub mod context;
pub mod pipeline;
pub mod stroke_geometry;

// Re-export core types for convenience
pub use turtle_art_core::{Color, Drawing, Stroke};
pub use turtle_art_math::Vec2;

pub use stroke_geometry::StrokeGeometry;
