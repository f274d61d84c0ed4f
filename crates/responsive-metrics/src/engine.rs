//! The responsive engine
//!
//! [`ResponsiveEngine`] owns nothing but an immutable [`ResponsiveConfig`].
//! Every query takes the current [`ViewportMetrics`] and recomputes from
//! scratch; there is no cache to invalidate, so one engine can be shared by
//! any number of threads.
//!
//! The component operations live next to their math: classification here,
//! scale factors in [`scale`](crate::scale), per-kind transforms in
//! [`metrics`](crate::metrics), layout quantities in
//! [`select`](crate::select), and dialog geometry in
//! [`dialog`](crate::dialog).

use crate::breakpoint::SizeCategory;
use crate::config::ResponsiveConfig;
use crate::error::Result;
use crate::viewport::ViewportMetrics;

static STANDARD_ENGINE: ResponsiveEngine = ResponsiveEngine {
    config: ResponsiveConfig::STANDARD,
};

/// Stateless calculator for device-adjusted layout metrics
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResponsiveEngine {
    config: ResponsiveConfig,
}

impl ResponsiveEngine {
    /// Create an engine from a validated configuration
    ///
    /// # Errors
    ///
    /// - `MetricsError::InvalidConfig` - the configuration breaks a table invariant
    pub fn new(config: ResponsiveConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Shared engine built from the standard design tables
    pub fn standard() -> &'static Self {
        &STANDARD_ENGINE
    }

    /// The configuration this engine computes from
    pub fn config(&self) -> &ResponsiveConfig {
        &self.config
    }

    /// Classify a viewport into a size category
    pub fn classify(&self, metrics: &ViewportMetrics) -> SizeCategory {
        self.config.breakpoints.classify(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CategoryTable;

    #[test]
    fn test_standard_matches_default() {
        assert_eq!(ResponsiveEngine::standard(), &ResponsiveEngine::default());
    }

    #[test]
    fn test_new_validates() {
        let bad = ResponsiveConfig::default()
            .base_scale(CategoryTable::from_array([1.0, 0.9, 1.2, 1.3]));
        assert!(ResponsiveEngine::new(bad).is_err());
        assert!(ResponsiveEngine::new(ResponsiveConfig::default()).is_ok());
    }

    #[test]
    fn test_custom_config_changes_scale() {
        let config = ResponsiveConfig::default()
            .base_scale(CategoryTable::from_array([1.0, 1.0, 1.0, 1.0]));
        let engine = ResponsiveEngine::new(config).unwrap();
        let metrics = ViewportMetrics::new(1920.0, 1080.0, 1.0).unwrap();
        assert!((engine.scale_factor(&metrics) - 1.08).abs() < 1e-9);
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResponsiveEngine>();
    }
}
