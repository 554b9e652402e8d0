//! Core types for turtle art
//!
//! This crate provides the drawing cursor and the recursive pattern generators:
//!
//! - [`Color`] / [`Palette`] - Named and hex colors, ordered palettes
//! - [`Pen`] - The drawing primitives the generators depend on
//! - [`Turtle`] - The drawing cursor (position, heading, pen state, color)
//! - [`Drawing`] - Recorded strokes produced by a [`Turtle`]
//! - [`patterns`] - Spiral, tessellation and mandala generators
//! - [`Composition`] - The fixed orchestration of the three patterns
//! - [`ArtError`] - Parameter validation errors

mod color;
mod error;
mod pen;
mod drawing;
mod turtle;
mod composition;
pub mod patterns;

pub use color::{Color, Palette};
pub use error::ArtError;
pub use pen::{Pen, PenCommand, RecordingPen};
pub use drawing::{Drawing, Stroke};
pub use turtle::{Turtle, circle_steps};
pub use composition::{Composition, MandalaStage, SpiralStage, TessellationStage, MAX_RECURSION_DEPTH};
pub use patterns::{Mandala, draw_spiral, draw_tessellation};

// Re-export math types for convenience
pub use turtle_art_math::Vec2;
