//! Size categories and breakpoint classification

use crate::tokens::breakpoints;
use crate::viewport::ViewportMetrics;
use serde::{Deserialize, Serialize};

/// Coarse viewport classification driving base scale and per-category tables
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "kebab-case")]
pub enum SizeCategory {
    /// Phones in portrait
    #[default]
    Mobile,
    /// Small tablets and large phones in landscape
    Tablet,
    /// Laptops and large tablets
    Desktop,
    /// Wide monitors
    LargeDesktop,
}

impl SizeCategory {
    /// All categories, smallest first
    pub const ALL: [Self; 4] = [
        Self::Mobile,
        Self::Tablet,
        Self::Desktop,
        Self::LargeDesktop,
    ];

    /// Position in [`SizeCategory::ALL`]
    pub fn index(self) -> usize {
        match self {
            Self::Mobile => 0,
            Self::Tablet => 1,
            Self::Desktop => 2,
            Self::LargeDesktop => 3,
        }
    }

    /// The next larger category, saturating at `LargeDesktop`
    pub fn bumped(self) -> Self {
        match self {
            Self::Mobile => Self::Tablet,
            Self::Tablet => Self::Desktop,
            Self::Desktop | Self::LargeDesktop => Self::LargeDesktop,
        }
    }
}

/// Width thresholds separating size categories
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BreakpointTable {
    /// Widths below this are mobile
    pub mobile: f64,
    /// Widths below this are at most tablet
    pub tablet: f64,
    /// Widths below this are at most desktop
    pub desktop: f64,
    /// Large desktop reference width; classification tops out at `desktop`
    pub large_desktop: f64,
}

impl BreakpointTable {
    /// The standard 480 / 768 / 1024 / 1440 table
    pub const STANDARD: Self = Self {
        mobile: breakpoints::MOBILE,
        tablet: breakpoints::TABLET,
        desktop: breakpoints::DESKTOP,
        large_desktop: breakpoints::LARGE_DESKTOP,
    };

    /// Classify a viewport
    ///
    /// Width picks the category with strict `<` at each threshold. A
    /// landscape viewport more than twice as wide as it is tall is bumped up
    /// one category, which keeps foldables and ultra-wide phones from being
    /// laid out as portrait phones.
    pub fn classify(&self, metrics: &ViewportMetrics) -> SizeCategory {
        let width = metrics.width();
        let by_width = if width < self.mobile {
            SizeCategory::Mobile
        } else if width < self.tablet {
            SizeCategory::Tablet
        } else if width < self.desktop {
            SizeCategory::Desktop
        } else {
            return SizeCategory::LargeDesktop;
        };

        let bump = metrics.is_very_wide() && metrics.is_landscape();
        let category = if bump { by_width.bumped() } else { by_width };

        tracing::trace!(
            width,
            aspect_ratio = metrics.aspect_ratio(),
            ?category,
            bumped = bump,
            "classified viewport"
        );
        category
    }
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(width: f64, height: f64) -> SizeCategory {
        let metrics = ViewportMetrics::new(width, height, 1.0).unwrap();
        BreakpointTable::STANDARD.classify(&metrics)
    }

    // ==========================================================================
    // Width Classification Tests
    // ==========================================================================

    #[test]
    fn test_classify_by_width() {
        assert_eq!(classify(375.0, 667.0), SizeCategory::Mobile);
        assert_eq!(classify(600.0, 900.0), SizeCategory::Tablet);
        assert_eq!(classify(900.0, 1200.0), SizeCategory::Desktop);
        assert_eq!(classify(1920.0, 1080.0), SizeCategory::LargeDesktop);
    }

    #[test]
    fn test_classify_boundaries_are_strict() {
        assert_eq!(classify(479.9, 800.0), SizeCategory::Mobile);
        assert_eq!(classify(480.0, 800.0), SizeCategory::Tablet);
        assert_eq!(classify(768.0, 800.0), SizeCategory::Desktop);
        assert_eq!(classify(1024.0, 800.0), SizeCategory::LargeDesktop);
    }

    // ==========================================================================
    // Aspect Ratio Override Tests
    // ==========================================================================

    #[test]
    fn test_very_wide_bumps_one_tier() {
        assert_eq!(classify(470.0, 200.0), SizeCategory::Tablet);
        assert_eq!(classify(700.0, 300.0), SizeCategory::Desktop);
        assert_eq!(classify(1000.0, 400.0), SizeCategory::LargeDesktop);
    }

    #[test]
    fn test_exactly_two_to_one_is_not_bumped() {
        assert_eq!(classify(400.0, 200.0), SizeCategory::Mobile);
    }

    #[test]
    fn test_large_desktop_ignores_aspect() {
        assert_eq!(classify(1024.0, 2000.0), SizeCategory::LargeDesktop);
        assert_eq!(classify(3000.0, 500.0), SizeCategory::LargeDesktop);
    }

    // ==========================================================================
    // Category Tests
    // ==========================================================================

    #[test]
    fn test_category_ordering() {
        assert!(SizeCategory::Mobile < SizeCategory::Tablet);
        assert!(SizeCategory::Tablet < SizeCategory::Desktop);
        assert!(SizeCategory::Desktop < SizeCategory::LargeDesktop);
        for (i, category) in SizeCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_bumped_saturates() {
        assert_eq!(SizeCategory::Mobile.bumped(), SizeCategory::Tablet);
        let largest = SizeCategory::LargeDesktop;
        assert_eq!(largest.bumped(), largest);
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&SizeCategory::LargeDesktop).unwrap();
        assert_eq!(json, "\"large-desktop\"");
        let parsed: SizeCategory = serde_json::from_str("\"tablet\"").unwrap();
        assert_eq!(parsed, SizeCategory::Tablet);
    }
}
