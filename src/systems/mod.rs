//! Application systems
//!
//! Window and GPU handling kept out of main.rs.

mod render;
mod window;

pub use render::{RenderError, RenderSystem, view_uniforms};
pub use window::{logical_size, WindowError, WindowSystem};
