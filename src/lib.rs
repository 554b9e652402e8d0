//! Turtle Art
//!
//! Draws a mandala, a spiral and a tessellation with a turtle cursor and
//! shows the result in a window until it is closed.

pub mod config;
pub mod input;
pub mod systems;
