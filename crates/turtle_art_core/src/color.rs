//! Colors and palettes
//!
//! Colors can be written the way a turtle script writes them: a Tk/X11 color
//! name (`"purple"`, `"cyan"`) or a hex string (`"#a020f0"`, `"#0ff"`).

use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::ArtError;

/// An sRGB color with alpha (each component 0.0-1.0)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// X11 color table for the names a turtle script typically uses
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0x00, 0x00, 0x00]),
    ("white", [0xff, 0xff, 0xff]),
    ("red", [0xff, 0x00, 0x00]),
    ("orange", [0xff, 0xa5, 0x00]),
    ("yellow", [0xff, 0xff, 0x00]),
    ("green", [0x00, 0xff, 0x00]),
    ("blue", [0x00, 0x00, 0xff]),
    ("purple", [0xa0, 0x20, 0xf0]),
    ("cyan", [0x00, 0xff, 0xff]),
    ("magenta", [0xff, 0x00, 0xff]),
    ("pink", [0xff, 0xc0, 0xcb]),
    ("brown", [0xa5, 0x2a, 0x2a]),
    ("gray", [0xbe, 0xbe, 0xbe]),
    ("grey", [0xbe, 0xbe, 0xbe]),
];

impl Color {
    /// Black
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };

    /// White
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    /// Create a new color from RGBA components
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit RGB components
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Look up a color by name (case-insensitive) or parse a `#rgb` / `#rrggbb` hex string
    pub fn from_name(name: &str) -> Result<Self, ArtError> {
        let trimmed = name.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return Self::from_hex(hex).ok_or_else(|| ArtError::UnknownColor(name.to_string()));
        }

        let lower = trimmed.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(n, _)| *n == lower)
            .map(|(_, [r, g, b])| Self::from_rgb8(*r, *g, *b))
            .ok_or_else(|| ArtError::UnknownColor(name.to_string()))
    }

    fn from_hex(hex: &str) -> Option<Self> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            3 => {
                let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
                Some(Self::from_rgb8(digit(0)?, digit(1)?, digit(2)?))
            }
            6 => {
                let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                Some(Self::from_rgb8(byte(0)?, byte(2)?, byte(4)?))
            }
            _ => None,
        }
    }

    /// Components as an array
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Convert the sRGB components to linear light (alpha unchanged)
    ///
    /// Needed when the render target is an `*Srgb` surface format, which
    /// re-encodes shader output.
    pub fn to_linear(self) -> [f32; 4] {
        fn channel(c: f32) -> f32 {
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        [channel(self.r), channel(self.g), channel(self.b), self.a]
    }
}

impl FromStr for Color {
    type Err = ArtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// An ordered, non-empty sequence of colors
///
/// Indexing wraps around, so arm `i` of a mandala uses `palette[i mod len]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create a palette, rejecting an empty color list
    pub fn new(colors: Vec<Color>) -> Result<Self, ArtError> {
        if colors.is_empty() {
            return Err(ArtError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Create a palette from color names or hex strings
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, ArtError> {
        let colors = names
            .iter()
            .map(|n| Color::from_name(n.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    /// The color for index `i`, wrapping around the palette length
    pub fn get(&self, i: usize) -> Color {
        self.colors[i % self.colors.len()]
    }

    /// Number of colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// All colors in order
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// The rainbow palette: red, orange, yellow, green, blue, purple
    pub fn rainbow() -> Self {
        let colors = [
            [0xff, 0x00, 0x00],
            [0xff, 0xa5, 0x00],
            [0xff, 0xff, 0x00],
            [0x00, 0xff, 0x00],
            [0x00, 0x00, 0xff],
            [0xa0, 0x20, 0xf0],
        ]
        .iter()
        .map(|[r, g, b]| Color::from_rgb8(*r, *g, *b))
        .collect();
        Self { colors }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::rainbow()
    }
}
