//! WGPU render context
//!
//! Owns the surface, device and queue for one window and keeps the surface
//! configuration in sync with the window size.

use std::sync::Arc;

use winit::{dpi::PhysicalSize, window::Window};

/// Errors raised while setting up the GPU
#[derive(Debug)]
pub enum ContextError {
    /// The surface could not be created for the window
    Surface(String),
    /// No adapter is compatible with the surface
    NoAdapter,
    /// The adapter refused to create a device
    Device(String),
    /// The surface reports no usable texture formats
    UnsupportedSurface,
}

impl std::fmt::Display for ContextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContextError::Surface(msg) => write!(f, "Surface creation failed: {}", msg),
            ContextError::NoAdapter => write!(f, "No compatible GPU adapter found"),
            ContextError::Device(msg) => write!(f, "Device request failed: {}", msg),
            ContextError::UnsupportedSurface => write!(f, "Surface has no supported formats"),
        }
    }
}

impl std::error::Error for ContextError {}

/// GPU device, queue and window surface
pub struct RenderContext {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub size: PhysicalSize<u32>,
    /// Capabilities of the surface format on this adapter (MSAA support)
    format_flags: wgpu::TextureFormatFeatureFlags,
}

impl RenderContext {
    /// Create a render context, choosing the present mode from `vsync`
    pub async fn with_vsync(window: Arc<Window>, vsync: bool) -> Result<Self, ContextError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .map_err(|e| ContextError::Surface(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(ContextError::NoAdapter)?;

        log::info!("Using GPU adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Turtle Art Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: wgpu::MemoryHints::default(),
                },
                None,
            )
            .await
            .map_err(|e| ContextError::Device(e.to_string()))?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or(ContextError::UnsupportedSurface)?;
        if !format.is_srgb() {
            log::warn!("No sRGB surface format available, using {:?}", format);
        }

        let present_mode = if vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        };

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode,
            alpha_mode: caps.alpha_modes.first().copied().unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let format_flags = adapter.get_texture_format_features(format).flags;

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
            format_flags,
        })
    }

    /// Reconfigure the surface for a new window size
    ///
    /// Zero-sized windows (minimized) are ignored.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Whether the surface re-encodes shader output as sRGB
    pub fn is_srgb(&self) -> bool {
        self.config.format.is_srgb()
    }

    /// `requested` if the surface format supports that MSAA sample count, else 1
    pub fn supported_sample_count(&self, requested: u32) -> u32 {
        if requested > 1 && self.format_flags.sample_count_supported(requested) {
            requested
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_error_display() {
        assert_eq!(ContextError::NoAdapter.to_string(), "No compatible GPU adapter found");
        assert_eq!(
            ContextError::Device("lost".to_string()).to_string(),
            "Device request failed: lost"
        );
        assert!(ContextError::UnsupportedSurface.to_string().contains("formats"));
    }
}
