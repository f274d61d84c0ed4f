//! Base design tokens
//!
//! Design-time values the engine scales at runtime. Everything here is a
//! constant; the derived, device-adjusted values come from
//! [`ResponsiveEngine`](crate::ResponsiveEngine).

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in logical units, based on a 4-unit grid
pub mod spacing {
    /// 2 - Extra extra small
    pub const SPACE_2XS: f64 = 2.0;
    /// 4 - Extra small
    pub const SPACE_XS: f64 = 4.0;
    /// 8 - Small
    pub const SPACE_SM: f64 = 8.0;
    /// 12 - Medium, the default gap between dialog buttons
    pub const SPACE_MD: f64 = 12.0;
    /// 16 - Large
    pub const SPACE_LG: f64 = 16.0;
    /// 24 - Extra large
    pub const SPACE_XL: f64 = 24.0;
    /// 32 - 2x large
    pub const SPACE_2XL: f64 = 32.0;
    /// 48 - 3x large
    pub const SPACE_3XL: f64 = 48.0;

    /// Get spacing value by name
    pub fn get(name: &str) -> Option<f64> {
        match name {
            "2xs" => Some(SPACE_2XS),
            "xs" => Some(SPACE_XS),
            "sm" => Some(SPACE_SM),
            "md" => Some(SPACE_MD),
            "lg" => Some(SPACE_LG),
            "xl" => Some(SPACE_XL),
            "2xl" => Some(SPACE_2XL),
            "3xl" => Some(SPACE_3XL),
            _ => None,
        }
    }
}

// =============================================================================
// Sizing Tokens
// =============================================================================

/// Icon sizes
pub mod icon {
    /// Small icon (16)
    pub const SM: f64 = 16.0;
    /// Medium icon (20)
    pub const MD: f64 = 20.0;
    /// Large icon (24)
    pub const LG: f64 = 24.0;
    /// Extra large icon (32)
    pub const XL: f64 = 32.0;
}

/// Button heights
pub mod button {
    /// Small button height (36)
    pub const SM_HEIGHT: f64 = 36.0;
    /// Medium button height (44), the touch-target minimum
    pub const MD_HEIGHT: f64 = 44.0;
    /// Large button height (52)
    pub const LG_HEIGHT: f64 = 52.0;
}

/// Card heights
pub mod card {
    /// Compact card (80)
    pub const COMPACT_HEIGHT: f64 = 80.0;
    /// Standard card (120)
    pub const HEIGHT: f64 = 120.0;
    /// Match-summary card (200)
    pub const FEATURE_HEIGHT: f64 = 200.0;
}

// =============================================================================
// Shape Tokens
// =============================================================================

/// Border radius tokens
pub mod radius {
    /// Small radius (4)
    pub const SM: f64 = 4.0;
    /// Medium radius (8)
    pub const MD: f64 = 8.0;
    /// Large radius (12)
    pub const LG: f64 = 12.0;
    /// Dialog radius (16)
    pub const DIALOG: f64 = 16.0;
}

/// Border width tokens
pub mod border {
    /// Hairline border (0.5)
    pub const HAIRLINE: f64 = 0.5;
    /// Thin border (1)
    pub const THIN: f64 = 1.0;
    /// Medium border (2)
    pub const MEDIUM: f64 = 2.0;
}

/// Elevation (shadow depth) tokens
pub mod elevation {
    /// Resting card (2)
    pub const CARD: f64 = 2.0;
    /// Raised button (4)
    pub const RAISED: f64 = 4.0;
    /// Modal dialog (8)
    pub const DIALOG: f64 = 8.0;
}

// =============================================================================
// Breakpoint Tokens
// =============================================================================

/// Breakpoint widths in logical units
pub mod breakpoints {
    /// Below this width a viewport is mobile
    pub const MOBILE: f64 = 480.0;
    /// Below this width a viewport is at most tablet
    pub const TABLET: f64 = 768.0;
    /// Below this width a viewport is at most desktop
    pub const DESKTOP: f64 = 1024.0;
    /// Large desktop reference width
    pub const LARGE_DESKTOP: f64 = 1440.0;

    /// Aspect ratio above which a viewport counts as landscape
    pub const LANDSCAPE_ASPECT: f64 = 1.0;
    /// Aspect ratio above which a landscape viewport is bumped one category
    pub const VERY_WIDE_ASPECT: f64 = 2.0;
}

// =============================================================================
// Per-Category Tables
// =============================================================================

/// Per-category constants, ordered mobile, tablet, desktop, large desktop
pub mod category {
    /// Base scale multiplier
    pub const BASE_SCALE: [f64; 4] = [1.0, 1.1, 1.2, 1.3];
    /// Minimum outer and inner padding
    pub const MIN_PADDING: [f64; 4] = [16.0, 24.0, 32.0, 48.0];
    /// Minimum dialog width
    pub const DIALOG_MIN_WIDTH: [f64; 4] = [280.0, 320.0, 400.0, 480.0];
    /// Maximum dialog width as a fraction of viewport width
    pub const DIALOG_MAX_WIDTH_FRACTION: [f64; 4] = [0.9, 0.85, 0.75, 0.65];
    /// Minimum dialog button width
    pub const MIN_BUTTON_WIDTH: [f64; 4] = [100.0, 120.0, 140.0, 160.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_get() {
        assert_eq!(spacing::get("xs"), Some(4.0));
        assert_eq!(spacing::get("md"), Some(12.0));
        assert_eq!(spacing::get("invalid"), None);
    }

    #[test]
    fn test_spacing_scale_increasing() {
        let scale = [
            spacing::SPACE_2XS,
            spacing::SPACE_XS,
            spacing::SPACE_SM,
            spacing::SPACE_MD,
            spacing::SPACE_LG,
            spacing::SPACE_XL,
            spacing::SPACE_2XL,
            spacing::SPACE_3XL,
        ];
        assert!(scale.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_breakpoint_thresholds_increase() {
        let thresholds = [
            breakpoints::MOBILE,
            breakpoints::TABLET,
            breakpoints::DESKTOP,
            breakpoints::LARGE_DESKTOP,
        ];
        assert!(thresholds.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_category_tables_grow() {
        for table in [
            category::BASE_SCALE,
            category::MIN_PADDING,
            category::DIALOG_MIN_WIDTH,
            category::MIN_BUTTON_WIDTH,
        ] {
            assert!(table.windows(2).all(|w| w[0] < w[1]));
        }
        // Larger screens leave proportionally more margin around dialogs
        let fractions = category::DIALOG_MAX_WIDTH_FRACTION;
        assert!(fractions.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_button_heights_increase() {
        let heights = [button::SM_HEIGHT, button::MD_HEIGHT, button::LG_HEIGHT];
        assert!(heights.windows(2).all(|w| w[0] < w[1]));
    }
}
