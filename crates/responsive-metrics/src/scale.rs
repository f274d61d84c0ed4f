//! Scale factor calculation
//!
//! The scale factor is the single multiplier every derived metric is built
//! from: a per-category base scale, nudged by aspect ratio and pixel density.

use crate::breakpoint::SizeCategory;
use crate::engine::ResponsiveEngine;
use crate::viewport::ViewportMetrics;

/// Smallest scale factor any valid viewport can produce
pub const MIN_SCALE_FACTOR: f64 = 0.92;

/// Largest scale factor the standard tables can produce (1.3 * 1.15 * 1.05)
pub const MAX_SCALE_FACTOR: f64 = 1.3 * 1.15 * 1.05;

/// Aspect ratio adjustment
///
/// Ranges are checked most extreme first and the first match wins. Tall
/// viewports shrink slightly, wide ones grow; 1.0 through 1.3 is neutral.
pub fn aspect_adjustment(aspect_ratio: f64) -> f64 {
    if aspect_ratio < 0.6 {
        0.92
    } else if aspect_ratio < 0.8 {
        0.96
    } else if aspect_ratio < 1.0 {
        0.98
    } else if aspect_ratio > 2.5 {
        1.15
    } else if aspect_ratio > 2.0 {
        1.12
    } else if aspect_ratio > 1.6 {
        1.08
    } else if aspect_ratio > 1.3 {
        1.04
    } else {
        1.0
    }
}

/// Pixel density adjustment
pub fn density_adjustment(pixel_density: f64) -> f64 {
    if pixel_density > 3.0 {
        1.05
    } else if pixel_density > 2.0 {
        1.02
    } else {
        1.0
    }
}

impl ResponsiveEngine {
    /// Base scale for a category
    pub fn base_scale(&self, category: SizeCategory) -> f64 {
        self.config().base_scale.get(category)
    }

    /// Scale factor for a viewport in a given category
    pub fn scale_factor_for(&self, metrics: &ViewportMetrics, category: SizeCategory) -> f64 {
        let base = self.base_scale(category);
        let aspect = aspect_adjustment(metrics.aspect_ratio());
        let density = density_adjustment(metrics.pixel_density());
        let factor = base * aspect * density;

        tracing::trace!(?category, base, aspect, density, factor, "computed scale factor");
        factor
    }

    /// Scale factor for a viewport, classifying it first
    pub fn scale_factor(&self, metrics: &ViewportMetrics) -> f64 {
        self.scale_factor_for(metrics, self.classify(metrics))
    }
}
