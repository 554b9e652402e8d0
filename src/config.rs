//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`ART_SECTION__KEY`)
//!
//! Every value has a built-in default, so a missing file or section falls
//! back to the classic mandala / spiral / tessellation layout.

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use turtle_art_core::{
    ArtError, Color, Composition, Mandala, MandalaStage, Palette, SpiralStage, TessellationStage,
};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Shared art parameters (palette, depth, symmetry)
    #[serde(default)]
    pub art: ArtConfig,
    /// Mandala placement
    #[serde(default)]
    pub mandala: MandalaConfig,
    /// Spiral placement
    #[serde(default)]
    pub spiral: SpiralConfig,
    /// Tessellation placement
    #[serde(default)]
    pub tessellation: TessellationConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`ART_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // User config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // ART_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("ART_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Validate the art sections and build the drawing composition
    pub fn to_composition(&self) -> Result<Composition, ArtError> {
        let palette = Palette::from_names(&self.art.palette)?;
        let mandala = Mandala::new(palette, self.art.symmetry)?;

        Composition::new(
            Color::from_name(&self.art.background)?,
            mandala,
            MandalaStage {
                origin: self.mandala.origin.into(),
                radius: self.mandala.radius,
                depth: self.art.depth,
            },
            SpiralStage {
                origin: self.spiral.origin.into(),
                color: Color::from_name(&self.spiral.color)?,
                length: self.spiral.length,
                factor: self.spiral.factor,
            },
            TessellationStage {
                origin: self.tessellation.origin.into(),
                color: Color::from_name(&self.tessellation.color)?,
                size: self.tessellation.size,
                levels: self.tessellation.levels,
            },
        )
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in logical pixels
    pub width: u32,
    /// Window height in logical pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Turtle Art".to_string(),
            width: 1280,
            height: 960,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Multiplier applied to the turtle's pen width
    pub pen_scale: f32,
    /// MSAA sample count (1 disables multisampling; unsupported counts fall back to 1)
    pub msaa_samples: u32,
    /// Zoom so the whole drawing is visible instead of one unit per logical pixel
    pub fit_to_drawing: bool,
    /// Relative padding around the drawing when fitting
    pub fit_margin: f32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            pen_scale: 1.0,
            msaa_samples: 4,
            fit_to_drawing: false,
            fit_margin: 0.05,
        }
    }
}

/// Shared art parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtConfig {
    /// Canvas background color (name or hex)
    pub background: String,
    /// Mandala arm colors, cycled per arm
    pub palette: Vec<String>,
    /// Mandala recursion depth
    pub depth: u32,
    /// Number of mandala arms
    pub symmetry: u32,
}

impl Default for ArtConfig {
    fn default() -> Self {
        Self {
            background: "black".to_string(),
            palette: ["red", "orange", "yellow", "green", "blue", "purple"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            depth: 5,
            symmetry: 6,
        }
    }
}

/// Mandala placement
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MandalaConfig {
    /// Starting point [x, y]
    pub origin: [f32; 2],
    /// Outer circle radius
    pub radius: f32,
}

impl Default for MandalaConfig {
    fn default() -> Self {
        Self {
            origin: [0.0, -150.0],
            radius: 150.0,
        }
    }
}

/// Spiral placement
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralConfig {
    /// Starting point [x, y]
    pub origin: [f32; 2],
    /// Stroke color (name or hex)
    pub color: String,
    /// First segment length
    pub length: f32,
    /// Shrink factor per segment, in (0, 1)
    pub factor: f32,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            origin: [-300.0, 0.0],
            color: "cyan".to_string(),
            length: 200.0,
            factor: 0.95,
        }
    }
}

/// Tessellation placement
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TessellationConfig {
    /// Starting point [x, y]
    pub origin: [f32; 2],
    /// Stroke color (name or hex)
    pub color: String,
    /// Outer triangle edge length
    pub size: f32,
    /// Recursion levels
    pub levels: u32,
}

impl Default for TessellationConfig {
    fn default() -> Self {
        Self {
            origin: [300.0, 0.0],
            color: "yellow".to_string(),
            size: 100.0,
            levels: 3,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level used when `RUST_LOG` is unset (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
