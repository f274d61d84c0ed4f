//! Responsive typography
//!
//! Base text styles per variant, scaled for a viewport with the font and
//! line-height metric kinds.

use crate::engine::ResponsiveEngine;
use crate::viewport::ViewportMetrics;
use serde::{Deserialize, Serialize};

// =============================================================================
// Font Tokens
// =============================================================================

/// Base font sizes
pub mod font_size {
    /// Caption (12)
    pub const CAPTION: f64 = 12.0;
    /// Body (14)
    pub const BODY: f64 = 14.0;
    /// Large body (16)
    pub const BODY_LG: f64 = 16.0;
    /// Subtitle (18)
    pub const SUBTITLE: f64 = 18.0;
    /// Title (22)
    pub const TITLE: f64 = 22.0;
    /// Headline (28)
    pub const HEADLINE: f64 = 28.0;
    /// Display (34)
    pub const DISPLAY: f64 = 34.0;
    /// Button label (15)
    pub const BUTTON: f64 = 15.0;
}

/// Font weight values
pub mod font_weight {
    /// Normal/Regular (400)
    pub const NORMAL: u16 = 400;
    /// Medium (500)
    pub const MEDIUM: u16 = 500;
    /// Semi-bold (600)
    pub const SEMI_BOLD: u16 = 600;
    /// Bold (700)
    pub const BOLD: u16 = 700;
}

/// Line height multipliers relative to font size
pub mod line_height {
    /// Tight (1.2)
    pub const TIGHT: f64 = 1.2;
    /// Snug (1.35)
    pub const SNUG: f64 = 1.35;
    /// Normal (1.5)
    pub const NORMAL: f64 = 1.5;
}

// =============================================================================
// Text Styles
// =============================================================================

/// Typography variant identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TypographyVariant {
    /// Small annotations and timestamps
    Caption,
    /// Default body text
    #[default]
    Body,
    /// Emphasized body text
    BodyLarge,
    /// Section subtitles
    Subtitle,
    /// Screen titles
    Title,
    /// Large headings
    Headline,
    /// Hero numbers such as match scores
    Display,
    /// Button labels
    Button,
}

/// Unscaled style for a variant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Font size
    pub font_size: f64,
    /// Font weight (400, 500, 600, 700)
    pub font_weight: u16,
    /// Line height multiplier
    pub line_height: f64,
}

impl TextStyle {
    /// Create a new text style with normal line height
    pub const fn new(font_size: f64, font_weight: u16) -> Self {
        Self {
            font_size,
            font_weight,
            line_height: line_height::NORMAL,
        }
    }

    /// Set line height multiplier
    pub fn with_line_height(mut self, lh: f64) -> Self {
        self.line_height = lh;
        self
    }

    /// Line height in logical units before scaling
    pub fn line_height_px(&self) -> f64 {
        self.font_size * self.line_height
    }
}

impl TypographyVariant {
    /// All variants
    pub const ALL: [Self; 8] = [
        Self::Caption,
        Self::Body,
        Self::BodyLarge,
        Self::Subtitle,
        Self::Title,
        Self::Headline,
        Self::Display,
        Self::Button,
    ];

    /// Base text style for this variant
    pub fn style(self) -> TextStyle {
        match self {
            Self::Caption => TextStyle::new(font_size::CAPTION, font_weight::NORMAL),
            Self::Body => TextStyle::new(font_size::BODY, font_weight::NORMAL),
            Self::BodyLarge => TextStyle::new(font_size::BODY_LG, font_weight::MEDIUM),
            Self::Subtitle => TextStyle::new(font_size::SUBTITLE, font_weight::MEDIUM)
                .with_line_height(line_height::SNUG),
            Self::Title => TextStyle::new(font_size::TITLE, font_weight::SEMI_BOLD)
                .with_line_height(line_height::SNUG),
            Self::Headline => TextStyle::new(font_size::HEADLINE, font_weight::BOLD)
                .with_line_height(line_height::TIGHT),
            Self::Display => TextStyle::new(font_size::DISPLAY, font_weight::BOLD)
                .with_line_height(line_height::TIGHT),
            Self::Button => TextStyle::new(font_size::BUTTON, font_weight::SEMI_BOLD)
                .with_line_height(line_height::TIGHT),
        }
    }
}

/// A text style sized for a specific viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledTextStyle {
    /// Scaled font size
    pub font_size: f64,
    /// Font weight, unchanged by scaling
    pub font_weight: u16,
    /// Scaled distance between baselines
    pub line_height_px: f64,
}

impl ResponsiveEngine {
    /// Text style for a variant, sized for the viewport
    pub fn text_style(
        &self,
        metrics: &ViewportMetrics,
        variant: TypographyVariant,
    ) -> ScaledTextStyle {
        let base = variant.style();
        ScaledTextStyle {
            font_size: self.font(metrics, base.font_size),
            font_weight: base.font_weight,
            line_height_px: self.line_height(metrics, base.line_height_px()),
        }
    }
}
