//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Stroke pipeline and uploaded drawing
//! - Frame rendering

use std::sync::Arc;
use winit::{dpi::PhysicalSize, window::Window};
use turtle_art_render::{
    context::{ContextError, RenderContext},
    pipeline::{StrokePipeline, ViewUniforms},
    Color, Drawing, StrokeGeometry, Vec2,
};
use crate::config::RenderingConfig;
use super::window::logical_size;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU setup failed
    Setup(ContextError),
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Setup(err) => write!(f, "Render setup failed: {}", err),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Setup(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ContextError> for RenderError {
    fn from(err: ContextError) -> Self {
        RenderError::Setup(err)
    }
}

/// View uniforms for the current window size and rendering options
///
/// Either one canvas unit per logical pixel (turtle screen semantics) or a
/// uniform zoom fitting the drawing's bounds.
pub fn view_uniforms(
    config: &RenderingConfig,
    bounds: Option<(Vec2, Vec2)>,
    logical_width: f32,
    logical_height: f32,
) -> ViewUniforms {
    match bounds {
        Some((min, max)) if config.fit_to_drawing => {
            ViewUniforms::fit(min, max, logical_width, logical_height, config.fit_margin)
        }
        _ => ViewUniforms::canvas(logical_width, logical_height),
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: StrokePipeline,
    render_config: RenderingConfig,
    clear_color: wgpu::Color,
    bounds: Option<(Vec2, Vec2)>,
    scale_factor: f64,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let scale_factor = window.scale_factor();
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let sample_count = context.supported_sample_count(render_config.msaa_samples);
        if sample_count != render_config.msaa_samples {
            log::warn!(
                "MSAA x{} not supported by the surface format, using x{}",
                render_config.msaa_samples,
                sample_count
            );
        }

        let mut pipeline = StrokePipeline::new(&context.device, context.config.format, sample_count);
        pipeline.ensure_msaa_texture(&context.device, context.size.width, context.size.height);

        let mut system = Self {
            context,
            pipeline,
            render_config,
            clear_color: wgpu::Color::BLACK,
            bounds: None,
            scale_factor,
        };
        system.update_view();
        Ok(system)
    }

    /// Tessellate and upload a drawing, replacing the previous one
    pub fn set_drawing(&mut self, drawing: &Drawing, background: Color) {
        let linear = self.context.is_srgb();
        let geometry = StrokeGeometry::from_drawing(drawing, self.render_config.pen_scale, linear);
        self.pipeline.upload_vertices(&self.context.device, &geometry.vertices);

        let [r, g, b, a] = if linear { background.to_linear() } else { background.to_array() };
        self.clear_color = wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        };
        self.bounds = drawing.bounds();
        self.update_view();

        log::info!(
            "Uploaded {} strokes as {} vertices",
            drawing.stroke_count(),
            geometry.vertex_count()
        );
    }

    /// Handle window resize or DPI change
    pub fn resize(&mut self, size: PhysicalSize<u32>, scale_factor: f64) {
        self.context.resize(size);
        self.scale_factor = scale_factor;
        self.pipeline.ensure_msaa_texture(
            &self.context.device,
            self.context.size.width,
            self.context.size.height,
        );
        self.update_view();
    }

    /// Reconfigure the surface after it was lost
    pub fn reconfigure(&mut self) {
        let size = self.context.size;
        self.context.resize(size);
    }

    fn update_view(&self) {
        let (width, height) = logical_size(self.context.size, self.scale_factor);
        let view = view_uniforms(&self.render_config, self.bounds, width, height);
        self.pipeline.update_uniforms(&self.context.queue, &view);
    }

    /// Render a single frame
    pub fn render_frame(&mut self) -> Result<(), RenderError> {
        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                return Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Create command encoder
        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Stroke Encoder"),
            });

        self.pipeline.render(&mut encoder, &view, self.clear_color);

        // Submit
        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}
