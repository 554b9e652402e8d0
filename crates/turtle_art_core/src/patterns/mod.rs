//! Recursive pattern generators
//!
//! Each generator only needs a [`Pen`](crate::Pen), mutates it in place and
//! recurses on a strictly shrinking budget until it hits its base case:
//!
//! - [`draw_spiral`] - length below [`MIN_SPIRAL_LENGTH`]
//! - [`draw_tessellation`] - zero levels left
//! - [`Mandala::draw`] - zero depth left

mod spiral;
mod tessellation;
mod mandala;

pub use spiral::{
    draw_spiral, spiral_segment_count, spiral_segment_count_within, MAX_SPIRAL_SEGMENTS,
    MIN_SPIRAL_LENGTH, SPIRAL_TURN_DEGREES,
};
pub use tessellation::{draw_tessellation, tessellation_forward_count, TESSELLATION_TURN_DEGREES};
pub use mandala::{Mandala, mandala_circle_count, mandala_circle_count_within, MAX_MANDALA_CIRCLES};
