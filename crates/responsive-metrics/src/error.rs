//! Error types for the responsive metrics engine

use thiserror::Error;

/// Errors raised when inputs violate the engine's preconditions
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Viewport width or height is zero, negative, or not finite
    #[error("Invalid viewport {name}: {value} (must be finite and greater than zero)")]
    InvalidDimension {
        /// Which dimension was rejected ("width" or "height")
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Pixel density is zero, negative, or not finite
    #[error("Invalid pixel density: {0} (must be finite and greater than zero)")]
    InvalidPixelDensity(f64),

    /// A dialog button row needs at least one button
    #[error("Button count must be at least 1")]
    InvalidButtonCount,

    /// Button spacing is negative or not finite
    #[error("Invalid button spacing: {0}")]
    InvalidSpacing(f64),

    /// Padding and gaps alone are wider than the dialog
    #[error(
        "{button_count} buttons need {required} of padding and gaps, dialog is {dialog_width} wide"
    )]
    ButtonRowOverflow {
        /// Number of buttons requested
        button_count: usize,
        /// Space taken by padding and gaps before any button is laid out
        required: f64,
        /// Dialog width available for the row
        dialog_width: f64,
    },

    /// Configuration tables break an ordering or range requirement
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for responsive metrics operations
pub type Result<T> = std::result::Result<T, MetricsError>;
