//! Responsive metrics for Supernova
//!
//! This crate turns the host's viewport (width, height, pixel density) into
//! every numeric layout quantity the rendering layer needs: a size category,
//! a device-adjusted scale factor, scaled fonts and spacing, and dialog
//! geometry that never overflows its container.
//!
//! All operations are pure. Nothing is cached and nothing is mutated, so a
//! single [`ResponsiveEngine`] can be shared across threads and frames.
//!
//! # Modules
//!
//! - [`viewport`] - Validated viewport metrics and the display context seam
//! - [`breakpoint`] - Size categories and breakpoint classification
//! - [`scale`] - Scale factor from category, aspect ratio, and density
//! - [`metrics`] - Per-kind metric transformation
//! - [`select`] - Per-category value selection with fallback
//! - [`dialog`] - Dialog width, padding, and button geometry
//! - [`typography`] - Scaled text styles
//! - [`layout`] - Engine bound to a display context
//! - [`config`] - Tunable tables and JSON loading
//! - [`tokens`] - Base design tokens
//!
//! # Example
//!
//! ```rust
//! use responsive_metrics::{ResponsiveEngine, SizeCategory, ViewportMetrics};
//!
//! let engine = ResponsiveEngine::standard();
//! let phone = ViewportMetrics::new(375.0, 667.0, 3.0)?;
//!
//! assert_eq!(engine.classify(&phone), SizeCategory::Mobile);
//! let body = engine.font(&phone, 16.0);
//! assert!(body < 16.0);
//!
//! let geometry = engine.dialog_geometry(&phone, 2, None)?;
//! assert!(geometry.row_width(2) <= geometry.width);
//! # Ok::<(), responsive_metrics::MetricsError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod breakpoint;
pub mod config;
pub mod dialog;
pub mod engine;
pub mod error;
pub mod layout;
pub mod metrics;
pub mod scale;
pub mod select;
pub mod tokens;
pub mod typography;
pub mod viewport;

// Re-export commonly used types
pub use breakpoint::{BreakpointTable, SizeCategory};
pub use config::{CategoryTable, ResponsiveConfig};
pub use dialog::{ButtonConstraints, DialogGeometry, DialogPadding};
pub use engine::ResponsiveEngine;
pub use error::{MetricsError, Result};
pub use layout::ResponsiveLayout;
pub use metrics::MetricKind;
pub use scale::{aspect_adjustment, density_adjustment, MAX_SCALE_FACTOR, MIN_SCALE_FACTOR};
pub use select::{select, ResponsiveValue};
pub use typography::{ScaledTextStyle, TextStyle, TypographyVariant};
pub use viewport::{DisplayContext, ViewportMetrics};
