//! Dialog geometry
//!
//! Derives dialog width, inner padding, and button widths from the viewport.
//! The button row is the part that matters: buttons get a per-category
//! minimum width, a small per-button buffer against rounding, and are never
//! allowed to push the row past the dialog's edge.

use crate::breakpoint::SizeCategory;
use crate::engine::ResponsiveEngine;
use crate::error::{MetricsError, Result};
use crate::tokens;
use crate::viewport::ViewportMetrics;
use serde::{Deserialize, Serialize};

/// Per-button allowance subtracted from the row before dividing it up
pub const BUTTON_ROUNDING_BUFFER: f64 = 4.0;

/// Vertical padding as a fraction of horizontal padding
const VERTICAL_PADDING_RATIO: f64 = 0.8;

/// Inner padding of a dialog
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogPadding {
    /// Left and right padding
    pub horizontal: f64,
    /// Top and bottom padding
    pub vertical: f64,
}

/// Layout constraints for each button in a dialog's button row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonConstraints {
    /// Narrowest the button may be laid out
    pub min_width: f64,
    /// Widest the button may be laid out
    pub max_width: f64,
    /// Button height
    pub height: f64,
}

/// Complete geometry of a dialog with a button row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogGeometry {
    /// Dialog width
    pub width: f64,
    /// Left and right padding
    pub horizontal_padding: f64,
    /// Top and bottom padding
    pub vertical_padding: f64,
    /// Width of each button
    pub button_width: f64,
    /// Gap between adjacent buttons
    pub button_spacing: f64,
}

impl DialogGeometry {
    /// Total width of a row of `button_count` buttons including padding
    pub fn row_width(&self, button_count: usize) -> f64 {
        let n = button_count as f64;
        self.button_width * n
            + self.button_spacing * (n - 1.0).max(0.0)
            + self.horizontal_padding * 2.0
    }
}

/// Fraction of the viewport width kept clear on each side of a dialog
pub fn outer_padding_fraction(aspect_ratio: f64) -> f64 {
    if aspect_ratio > 2.0 {
        0.15
    } else if aspect_ratio > 1.5 {
        0.12
    } else if aspect_ratio > 1.0 {
        0.10
    } else {
        0.08
    }
}

/// Fraction of the dialog width used as inner horizontal padding
pub fn inner_padding_fraction(aspect_ratio: f64) -> f64 {
    if aspect_ratio > 2.0 {
        0.08
    } else if aspect_ratio > 1.5 {
        0.06
    } else {
        0.05
    }
}

impl ResponsiveEngine {
    /// Dialog width for a viewport
    ///
    /// The viewport minus an aspect-dependent outer margin, clamped between
    /// the category's minimum dialog width and its share of the viewport.
    /// On viewports too narrow for the minimum, the viewport share wins.
    pub fn dialog_width(&self, metrics: &ViewportMetrics) -> f64 {
        self.dialog_width_for(metrics, self.classify(metrics))
    }

    /// Inner padding for a viewport's dialog
    pub fn dialog_padding(&self, metrics: &ViewportMetrics) -> DialogPadding {
        let category = self.classify(metrics);
        let width = self.dialog_width_for(metrics, category);
        self.dialog_padding_for(metrics, category, width)
    }

    /// Width of each button in a dialog's button row
    ///
    /// `spacing` defaults to the scaled medium spacing token. The width is
    /// the row's share after padding, gaps, and a rounding buffer, raised to
    /// the category's minimum button width as long as the row still fits.
    ///
    /// # Errors
    ///
    /// - `MetricsError::InvalidButtonCount` - `button_count` is zero
    /// - `MetricsError::InvalidSpacing` - spacing is negative or not finite
    /// - `MetricsError::ButtonRowOverflow` - padding and gaps alone fill the dialog
    pub fn dialog_button_width(
        &self,
        metrics: &ViewportMetrics,
        button_count: usize,
        spacing: Option<f64>,
    ) -> Result<f64> {
        let geometry = self.dialog_geometry(metrics, button_count, spacing)?;
        Ok(geometry.button_width)
    }

    /// Layout constraints for each button in a dialog's button row
    ///
    /// # Errors
    ///
    /// Same as [`ResponsiveEngine::dialog_button_width`].
    pub fn dialog_button_constraints(
        &self,
        metrics: &ViewportMetrics,
        button_count: usize,
        spacing: Option<f64>,
    ) -> Result<ButtonConstraints> {
        let category = self.classify(metrics);
        let geometry = self.geometry_for(metrics, category, button_count, spacing)?;
        let floor = self.config().min_button_width.get(category);

        Ok(ButtonConstraints {
            min_width: floor.min(geometry.button_width),
            max_width: geometry.button_width,
            height: self.button_height(metrics, tokens::button::MD_HEIGHT),
        })
    }

    /// Width, padding, and button width of a dialog in one pass
    ///
    /// # Errors
    ///
    /// Same as [`ResponsiveEngine::dialog_button_width`].
    pub fn dialog_geometry(
        &self,
        metrics: &ViewportMetrics,
        button_count: usize,
        spacing: Option<f64>,
    ) -> Result<DialogGeometry> {
        self.geometry_for(metrics, self.classify(metrics), button_count, spacing)
    }

    fn dialog_width_for(&self, metrics: &ViewportMetrics, category: SizeCategory) -> f64 {
        let config = self.config();
        let width = metrics.width();

        let outer = (width * outer_padding_fraction(metrics.aspect_ratio()))
            .max(config.min_padding.get(category));
        let raw = width - 2.0 * outer;

        let min = config.dialog_min_width.get(category);
        let max = width * config.dialog_max_width_fraction.get(category);
        let clamped = raw.max(min).min(max);

        if clamped != raw {
            tracing::debug!(?category, raw, min, max, clamped, "dialog width clamped");
        }
        clamped
    }

    fn dialog_padding_for(
        &self,
        metrics: &ViewportMetrics,
        category: SizeCategory,
        dialog_width: f64,
    ) -> DialogPadding {
        let min_padding = self.config().min_padding.get(category);
        let share = dialog_width * inner_padding_fraction(metrics.aspect_ratio());
        let horizontal = share.max(min_padding);
        let vertical = VERTICAL_PADDING_RATIO * horizontal;

        DialogPadding {
            horizontal,
            vertical,
        }
    }

    fn geometry_for(
        &self,
        metrics: &ViewportMetrics,
        category: SizeCategory,
        button_count: usize,
        spacing: Option<f64>,
    ) -> Result<DialogGeometry> {
        if button_count == 0 {
            return Err(MetricsError::InvalidButtonCount);
        }
        let spacing = spacing.unwrap_or_else(|| self.spacing(metrics, tokens::spacing::SPACE_MD));
        if !spacing.is_finite() || spacing < 0.0 {
            return Err(MetricsError::InvalidSpacing(spacing));
        }

        let width = self.dialog_width_for(metrics, category);
        let padding = self.dialog_padding_for(metrics, category, width);

        let n = button_count as f64;
        let fixed = 2.0 * padding.horizontal + spacing * (n - 1.0);
        if fixed >= width {
            return Err(MetricsError::ButtonRowOverflow {
                button_count,
                required: fixed,
                dialog_width: width,
            });
        }

        let fitting = (width - fixed) / n;
        let buffered = (width - fixed - n * BUTTON_ROUNDING_BUFFER) / n;
        let floor = self.config().min_button_width.get(category);
        let button_width = buffered.max(floor).min(fitting);

        if button_width < floor {
            tracing::debug!(
                ?category,
                button_count,
                floor,
                button_width,
                "minimum button width does not fit, using row share"
            );
        }

        Ok(DialogGeometry {
            width,
            horizontal_padding: padding.horizontal,
            vertical_padding: padding.vertical,
            button_width,
            button_spacing: spacing,
        })
    }
}
