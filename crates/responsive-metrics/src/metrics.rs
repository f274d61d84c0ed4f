//! Metric transformation
//!
//! Applies the scale factor to base design values. Most kinds scale
//! linearly; elevation reads deeper and line height grows more slowly.
//! Nothing here clamps; floors are applied where overflow matters, in
//! [`dialog`](crate::dialog).

use crate::engine::ResponsiveEngine;
use crate::viewport::ViewportMetrics;
use serde::{Deserialize, Serialize};

/// The kind of layout quantity being scaled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricKind {
    /// Font size
    Font,
    /// Margins, paddings, and gaps
    Spacing,
    /// Icon edge length
    Icon,
    /// Corner radius
    Radius,
    /// Stroke width of borders
    BorderWidth,
    /// Shadow depth
    Elevation,
    /// Distance between text baselines
    LineHeight,
    /// Button height
    ButtonHeight,
    /// Card height
    CardHeight,
}

impl MetricKind {
    /// Extra multiplier applied on top of the scale factor
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Elevation => 1.2,
            Self::LineHeight => 0.9,
            _ => 1.0,
        }
    }
}

impl ResponsiveEngine {
    /// Scale a base value for the given metric kind
    pub fn transform(&self, metrics: &ViewportMetrics, base: f64, kind: MetricKind) -> f64 {
        base * self.scale_factor(metrics) * kind.multiplier()
    }

    /// Scaled font size
    pub fn font(&self, metrics: &ViewportMetrics, base: f64) -> f64 {
        self.transform(metrics, base, MetricKind::Font)
    }

    /// Scaled spacing
    pub fn spacing(&self, metrics: &ViewportMetrics, base: f64) -> f64 {
        self.transform(metrics, base, MetricKind::Spacing)
    }

    /// Scaled icon size
    pub fn icon_size(&self, metrics: &ViewportMetrics, base: f64) -> f64 {
        self.transform(metrics, base, MetricKind::Icon)
    }

    /// Scaled border radius
    pub fn radius(&self, metrics: &ViewportMetrics, base: f64) -> f64 {
        self.transform(metrics, base, MetricKind::Radius)
    }

    /// Scaled border width
    pub fn border_width(&self, metrics: &ViewportMetrics, base: f64) -> f64 {
        self.transform(metrics, base, MetricKind::BorderWidth)
    }

    /// Scaled elevation
    pub fn elevation(&self, metrics: &ViewportMetrics, base: f64) -> f64 {
        self.transform(metrics, base, MetricKind::Elevation)
    }

    /// Scaled line height
    pub fn line_height(&self, metrics: &ViewportMetrics, base: f64) -> f64 {
        self.transform(metrics, base, MetricKind::LineHeight)
    }

    /// Scaled button height
    pub fn button_height(&self, metrics: &ViewportMetrics, base: f64) -> f64 {
        self.transform(metrics, base, MetricKind::ButtonHeight)
    }

    /// Scaled card height
    pub fn card_height(&self, metrics: &ViewportMetrics, base: f64) -> f64 {
        self.transform(metrics, base, MetricKind::CardHeight)
    }
}
