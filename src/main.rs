//! Turtle Art - recursive mandala, spiral and tessellation
//!
//! Draws the composition once with a turtle cursor, uploads the strokes to
//! the GPU and keeps the window open until the viewer closes it.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use turtle_art::config::AppConfig;
use turtle_art::input::{InputAction, InputMapper};
use turtle_art::systems::{RenderError, RenderSystem, WindowSystem};
use turtle_art_core::{Color, Composition, Drawing};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    /// Finished drawing (recorded once at startup)
    drawing: Drawing,
    background: Color,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
}

impl App {
    fn new(config: AppConfig, composition: &Composition) -> Self {
        let drawing = composition.render();
        log::info!(
            "Drew {} strokes with {} segments",
            drawing.stroke_count(),
            drawing.segment_count()
        );

        Self {
            config,
            drawing,
            background: composition.background(),
            window: None,
            render: None,
        }
    }

    fn setup(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Box<dyn std::error::Error>> {
        let window = WindowSystem::create(event_loop, &self.config.window)?;
        let mut render = RenderSystem::new(
            window.window().clone(),
            self.config.rendering.clone(),
            self.config.window.vsync,
        )?;
        render.set_drawing(&self.drawing, self.background);
        window.request_redraw();

        self.window = Some(window);
        self.render = Some(render);
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.setup(event_loop) {
                log::error!("{}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window closed");
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(InputAction::Close) = InputMapper::map_keyboard(key, event.state) {
                        event_loop.exit();
                    }
                }
            }

            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                if let (Some(window), Some(render)) = (&self.window, &mut self.render) {
                    let (size, scale_factor) = window.surface_size();
                    render.resize(size, scale_factor);
                    log::debug!("Surface resized to {:?}", render.size());
                    window.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                let Some(render) = &mut self.render else {
                    return;
                };
                match render.render_frame() {
                    Ok(()) => {}
                    Err(RenderError::SurfaceLost) => {
                        render.reconfigure();
                        if let Some(window) = &self.window {
                            window.request_redraw();
                        }
                    }
                    Err(RenderError::OutOfMemory) => {
                        log::error!("GPU out of memory");
                        event_loop.exit();
                    }
                    Err(e) => log::warn!("{}", e),
                }
            }

            _ => {}
        }
    }
}

fn main() {
    // Configuration first so it can pick the default log level
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting Turtle Art");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let composition = match config.to_composition() {
        Ok(composition) => composition,
        Err(e) => {
            log::error!("Invalid art parameters: {}", e);
            std::process::exit(1);
        }
    };

    // The image is static: sleep until the platform asks for a redraw
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config, &composition);
    event_loop.run_app(&mut app).expect("Event loop error");
}
