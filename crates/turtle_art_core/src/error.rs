//! Art parameter errors
//!
//! Malformed drawing parameters are rejected up front; there is nothing to
//! recover from, so callers treat these as fatal startup errors.

use std::fmt;

/// Error type for invalid drawing parameters
#[derive(Debug, Clone, PartialEq)]
pub enum ArtError {
    /// The palette has no colors (mandala arms index into it)
    EmptyPalette,
    /// The mandala needs at least one arm (angle is 360 / symmetry)
    ZeroSymmetry,
    /// A color string is neither a known name nor a hex value
    UnknownColor(String),
    /// Spiral shrink factor outside the open interval (0, 1)
    InvalidShrinkFactor(f32),
    /// A length, radius or size that must be positive and finite
    NonPositiveSize {
        /// Which parameter was rejected
        what: &'static str,
        /// The rejected value
        value: f32,
    },
    /// A recursion depth or level count above the supported maximum
    RecursionTooDeep {
        what: &'static str,
        value: u32,
        max: u32,
    },
    /// A pattern would need more primitives than the drawing can hold
    TooComplex {
        what: &'static str,
        limit: usize,
    },
}

impl fmt::Display for ArtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtError::EmptyPalette => write!(f, "Palette must contain at least one color"),
            ArtError::ZeroSymmetry => write!(f, "Symmetry must be at least 1"),
            ArtError::UnknownColor(name) => write!(f, "Unknown color: {}", name),
            ArtError::InvalidShrinkFactor(factor) => {
                write!(f, "Shrink factor must be in (0, 1), got {}", factor)
            }
            ArtError::NonPositiveSize { what, value } => {
                write!(f, "{} must be positive and finite, got {}", what, value)
            }
            ArtError::RecursionTooDeep { what, value, max } => {
                write!(f, "{} must be at most {}, got {}", what, max, value)
            }
            ArtError::TooComplex { what, limit } => {
                write!(f, "{} would need more than {} shapes", what, limit)
            }
        }
    }
}

impl std::error::Error for ArtError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert!(ArtError::EmptyPalette.to_string().contains("Palette"));
        assert!(ArtError::ZeroSymmetry.to_string().contains("Symmetry"));
        assert_eq!(
            ArtError::UnknownColor("mauve-ish".to_string()).to_string(),
            "Unknown color: mauve-ish"
        );
        assert!(ArtError::InvalidShrinkFactor(1.5).to_string().contains("1.5"));

        let err = ArtError::NonPositiveSize { what: "Spiral length", value: -3.0 };
        assert_eq!(err.to_string(), "Spiral length must be positive and finite, got -3");

        let err = ArtError::RecursionTooDeep { what: "Mandala depth", value: 12, max: 9 };
        assert_eq!(err.to_string(), "Mandala depth must be at most 9, got 12");

        let err = ArtError::TooComplex { what: "Spiral", limit: 10_000 };
        assert_eq!(err.to_string(), "Spiral would need more than 10000 shapes");
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ArtError::ZeroSymmetry);
        assert!(err.source().is_none());
    }
}
