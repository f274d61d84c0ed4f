//! Engine configuration
//!
//! The breakpoint table and per-category tables are immutable once an
//! engine is built. Hosts that want different numbers load a
//! [`ResponsiveConfig`] from JSON and hand it to
//! [`ResponsiveEngine::new`](crate::ResponsiveEngine::new); everyone else
//! uses [`ResponsiveConfig::STANDARD`].

use crate::breakpoint::{BreakpointTable, SizeCategory};
use crate::error::{MetricsError, Result};
use crate::tokens::category;
use serde::{Deserialize, Serialize};

/// One value per size category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTable<T> {
    /// Mobile value
    pub mobile: T,
    /// Tablet value
    pub tablet: T,
    /// Desktop value
    pub desktop: T,
    /// Large desktop value
    pub large_desktop: T,
}

impl<T: Copy> CategoryTable<T> {
    /// Build a table from values ordered smallest category first
    pub const fn from_array(values: [T; 4]) -> Self {
        Self {
            mobile: values[0],
            tablet: values[1],
            desktop: values[2],
            large_desktop: values[3],
        }
    }

    /// Value for a category
    pub fn get(&self, category: SizeCategory) -> T {
        match category {
            SizeCategory::Mobile => self.mobile,
            SizeCategory::Tablet => self.tablet,
            SizeCategory::Desktop => self.desktop,
            SizeCategory::LargeDesktop => self.large_desktop,
        }
    }

    /// Values ordered smallest category first
    pub fn to_array(&self) -> [T; 4] {
        [self.mobile, self.tablet, self.desktop, self.large_desktop]
    }
}

/// Tunable constants for the responsive engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResponsiveConfig {
    /// Width thresholds between categories
    pub breakpoints: BreakpointTable,
    /// Base scale multiplier per category
    pub base_scale: CategoryTable<f64>,
    /// Minimum padding around and inside dialogs
    pub min_padding: CategoryTable<f64>,
    /// Minimum dialog width
    pub dialog_min_width: CategoryTable<f64>,
    /// Maximum dialog width as a fraction of the viewport width
    pub dialog_max_width_fraction: CategoryTable<f64>,
    /// Minimum dialog button width
    pub min_button_width: CategoryTable<f64>,
}

impl ResponsiveConfig {
    /// Configuration built from the constant design tables
    pub const STANDARD: Self = Self {
        breakpoints: BreakpointTable::STANDARD,
        base_scale: CategoryTable::from_array(category::BASE_SCALE),
        min_padding: CategoryTable::from_array(category::MIN_PADDING),
        dialog_min_width: CategoryTable::from_array(category::DIALOG_MIN_WIDTH),
        dialog_max_width_fraction: CategoryTable::from_array(category::DIALOG_MAX_WIDTH_FRACTION),
        min_button_width: CategoryTable::from_array(category::MIN_BUTTON_WIDTH),
    };

    /// Parse and validate a configuration from JSON
    ///
    /// Missing fields fall back to the standard values.
    ///
    /// # Errors
    ///
    /// - `MetricsError::Serialization` - malformed JSON
    /// - `MetricsError::InvalidConfig` - tables break an ordering or range requirement
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON
    ///
    /// # Errors
    ///
    /// - `MetricsError::Serialization` - serialization failed
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Replace the breakpoint table
    pub fn breakpoints(mut self, breakpoints: BreakpointTable) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Replace the base scale table
    pub fn base_scale(mut self, table: CategoryTable<f64>) -> Self {
        self.base_scale = table;
        self
    }

    /// Replace the minimum padding table
    pub fn min_padding(mut self, table: CategoryTable<f64>) -> Self {
        self.min_padding = table;
        self
    }

    /// Replace the minimum button width table
    pub fn min_button_width(mut self, table: CategoryTable<f64>) -> Self {
        self.min_button_width = table;
        self
    }

    /// Check the invariants the engine relies on
    ///
    /// # Errors
    ///
    /// - `MetricsError::InvalidConfig` - describing the first violated requirement
    pub fn validate(&self) -> Result<()> {
        let result = self.check();
        if let Err(ref err) = result {
            tracing::warn!("Rejected responsive configuration: {}", err);
        }
        result
    }

    fn check(&self) -> Result<()> {
        let bp = &self.breakpoints;
        let thresholds = [bp.mobile, bp.tablet, bp.desktop, bp.large_desktop];
        if !thresholds.iter().all(|t| t.is_finite() && *t > 0.0) {
            return Err(invalid("breakpoints must be finite and positive"));
        }
        if !thresholds.windows(2).all(|w| w[0] < w[1]) {
            return Err(invalid("breakpoints must be strictly increasing"));
        }

        for (name, table) in [
            ("baseScale", &self.base_scale),
            ("minPadding", &self.min_padding),
            ("dialogMinWidth", &self.dialog_min_width),
            ("dialogMaxWidthFraction", &self.dialog_max_width_fraction),
            ("minButtonWidth", &self.min_button_width),
        ] {
            if !table.to_array().iter().all(|v| v.is_finite() && *v > 0.0) {
                return Err(invalid(&format!("{name} values must be finite and positive")));
            }
        }

        let fractions = self.dialog_max_width_fraction.to_array();
        if fractions.iter().any(|f| *f > 1.0) {
            return Err(invalid("dialogMaxWidthFraction values must not exceed 1.0"));
        }
        let scales = self.base_scale.to_array();
        if !scales.windows(2).all(|w| w[0] <= w[1]) {
            return Err(invalid("baseScale must not decrease with category"));
        }

        Ok(())
    }
}

fn invalid(reason: &str) -> MetricsError {
    MetricsError::InvalidConfig(reason.to_string())
}

impl Default for ResponsiveConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}
