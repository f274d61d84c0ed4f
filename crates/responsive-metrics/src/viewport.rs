//! Viewport metrics supplied by the host display
//!
//! A [`ViewportMetrics`] value is the only input the engine needs. It is
//! validated once at construction, so every operation downstream can treat
//! width, height, and density as finite positive numbers.

use crate::error::{MetricsError, Result};
use crate::tokens::breakpoints::{LANDSCAPE_ASPECT, VERY_WIDE_ASPECT};
use serde::{Deserialize, Serialize};

/// Width, height, and pixel density of the host's current display area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawViewport")]
pub struct ViewportMetrics {
    width: f64,
    height: f64,
    pixel_density: f64,
}

/// Unvalidated wire shape used for deserialization
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawViewport {
    width: f64,
    height: f64,
    #[serde(default = "default_pixel_density")]
    pixel_density: f64,
}

fn default_pixel_density() -> f64 {
    1.0
}

impl TryFrom<RawViewport> for ViewportMetrics {
    type Error = MetricsError;

    fn try_from(raw: RawViewport) -> Result<Self> {
        Self::new(raw.width, raw.height, raw.pixel_density)
    }
}

impl ViewportMetrics {
    /// Create viewport metrics
    ///
    /// # Errors
    ///
    /// - `MetricsError::InvalidDimension` - width or height is zero, negative, or not finite
    /// - `MetricsError::InvalidPixelDensity` - density is zero, negative, or not finite
    pub fn new(width: f64, height: f64, pixel_density: f64) -> Result<Self> {
        check_dimension("width", width)?;
        check_dimension("height", height)?;
        if !pixel_density.is_finite() || pixel_density <= 0.0 {
            return Err(MetricsError::InvalidPixelDensity(pixel_density));
        }

        Ok(Self {
            width,
            height,
            pixel_density,
        })
    }

    /// Viewport width in logical units
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Viewport height in logical units
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Physical pixels per logical unit
    pub fn pixel_density(&self) -> f64 {
        self.pixel_density
    }

    /// Width divided by height; always finite and positive
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// True when the viewport is wider than it is tall
    pub fn is_landscape(&self) -> bool {
        self.aspect_ratio() > LANDSCAPE_ASPECT
    }

    /// True when the viewport is more than twice as wide as it is tall
    pub fn is_very_wide(&self) -> bool {
        self.aspect_ratio() > VERY_WIDE_ASPECT
    }
}

fn check_dimension(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MetricsError::InvalidDimension { name, value })
    }
}

/// Host-side provider of the current viewport
///
/// Implemented by whatever queries the platform for window size and density.
/// The engine never subscribes to changes; callers ask again on every layout
/// pass.
pub trait DisplayContext {
    /// Current viewport metrics
    fn viewport(&self) -> ViewportMetrics;
}

impl DisplayContext for ViewportMetrics {
    fn viewport(&self) -> ViewportMetrics {
        *self
    }
}
