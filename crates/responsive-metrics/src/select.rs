//! Per-category value selection
//!
//! A [`ResponsiveValue`] holds a mandatory mobile value and optional
//! overrides for larger categories. Resolving for a category walks down
//! toward mobile until it finds a set value, so callers only spell out the
//! tiers that actually differ.

use crate::breakpoint::SizeCategory;
use crate::engine::ResponsiveEngine;
use crate::tokens;
use crate::viewport::ViewportMetrics;
use serde::{Deserialize, Serialize};

/// A value that may differ per size category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsiveValue<T> {
    /// Mobile value, the final fallback
    pub mobile: T,
    /// Tablet override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tablet: Option<T>,
    /// Desktop override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop: Option<T>,
    /// Large desktop override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large_desktop: Option<T>,
}

impl<T> ResponsiveValue<T> {
    /// A value used for every category until overridden
    pub const fn new(mobile: T) -> Self {
        Self {
            mobile,
            tablet: None,
            desktop: None,
            large_desktop: None,
        }
    }

    /// Set the tablet override
    pub fn tablet(mut self, value: T) -> Self {
        self.tablet = Some(value);
        self
    }

    /// Set the desktop override
    pub fn desktop(mut self, value: T) -> Self {
        self.desktop = Some(value);
        self
    }

    /// Set the large desktop override
    pub fn large_desktop(mut self, value: T) -> Self {
        self.large_desktop = Some(value);
        self
    }

    /// The value for a category, falling back toward mobile
    pub fn resolve(&self, category: SizeCategory) -> &T {
        let chain = [&self.large_desktop, &self.desktop, &self.tablet];
        // Tiers above the requested category are never consulted
        let skip = SizeCategory::LargeDesktop.index() - category.index();
        chain
            .into_iter()
            .skip(skip)
            .find_map(Option::as_ref)
            .unwrap_or(&self.mobile)
    }
}

/// Pick a category-specific value, falling back to the next smaller category
pub fn select<T>(
    category: SizeCategory,
    mobile: T,
    tablet: Option<T>,
    desktop: Option<T>,
    large_desktop: Option<T>,
) -> T {
    let chosen = match category {
        SizeCategory::LargeDesktop => large_desktop.or(desktop).or(tablet),
        SizeCategory::Desktop => desktop.or(tablet),
        SizeCategory::Tablet => tablet,
        SizeCategory::Mobile => None,
    };
    chosen.unwrap_or(mobile)
}

const SCREEN_PADDING: ResponsiveValue<f64> = ResponsiveValue {
    mobile: tokens::spacing::SPACE_LG,
    tablet: Some(tokens::spacing::SPACE_XL),
    desktop: Some(tokens::spacing::SPACE_2XL),
    large_desktop: Some(tokens::spacing::SPACE_3XL),
};

const GRID_COLUMNS: ResponsiveValue<usize> = ResponsiveValue {
    mobile: 1,
    tablet: Some(2),
    desktop: Some(3),
    large_desktop: Some(4),
};

const CARD_ASPECT_RATIO: ResponsiveValue<f64> = ResponsiveValue {
    mobile: 1.5,
    tablet: None,
    desktop: Some(16.0 / 9.0),
    large_desktop: None,
};

const CONTENT_MAX_WIDTH: ResponsiveValue<Option<f64>> = ResponsiveValue {
    mobile: None,
    tablet: Some(Some(600.0)),
    desktop: Some(Some(800.0)),
    large_desktop: Some(Some(1000.0)),
};

impl ResponsiveEngine {
    /// Resolve a responsive value for the viewport's category
    pub fn resolve<'a, T>(
        &self,
        metrics: &ViewportMetrics,
        value: &'a ResponsiveValue<T>,
    ) -> &'a T {
        value.resolve(self.classify(metrics))
    }

    /// Scaled padding between screen edges and content
    pub fn screen_padding(&self, metrics: &ViewportMetrics) -> f64 {
        self.spacing(metrics, *self.resolve(metrics, &SCREEN_PADDING))
    }

    /// Number of columns in card grids
    pub fn grid_columns(&self, metrics: &ViewportMetrics) -> usize {
        *self.resolve(metrics, &GRID_COLUMNS)
    }

    /// Width-to-height ratio for profile and match cards
    pub fn card_aspect_ratio(&self, metrics: &ViewportMetrics) -> f64 {
        *self.resolve(metrics, &CARD_ASPECT_RATIO)
    }

    /// Widest a content column may grow, never more than the viewport
    pub fn content_max_width(&self, metrics: &ViewportMetrics) -> f64 {
        match self.resolve(metrics, &CONTENT_MAX_WIDTH) {
            Some(max) => max.min(metrics.width()),
            None => metrics.width(),
        }
    }
}
