//! Rendering pipeline components
//!
//! This module contains the GPU data layouts and the render pipeline for
//! stroke triangles.

pub mod types;
pub mod stroke_pipeline;

// Re-export types
pub use types::{StrokeVertex, ViewUniforms, VERTICES_PER_SEGMENT};

// Re-export pipelines
pub use stroke_pipeline::StrokePipeline;
