//! Display-bound view of the engine
//!
//! [`ResponsiveLayout`] pairs an engine with a [`DisplayContext`] so layout
//! code can ask for `layout.font(16.0)` without threading viewport metrics
//! around. Each call asks the context for the current viewport, so a resize
//! or rotation is picked up by the very next query.

use crate::breakpoint::SizeCategory;
use crate::dialog::{ButtonConstraints, DialogGeometry, DialogPadding};
use crate::engine::ResponsiveEngine;
use crate::error::Result;
use crate::metrics::MetricKind;
use crate::select::ResponsiveValue;
use crate::typography::{ScaledTextStyle, TypographyVariant};
use crate::viewport::DisplayContext;

/// An engine bound to a display context
#[derive(Debug)]
pub struct ResponsiveLayout<'a, C: ?Sized> {
    engine: &'a ResponsiveEngine,
    context: &'a C,
}

impl<C: ?Sized> Clone for ResponsiveLayout<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for ResponsiveLayout<'_, C> {}

impl<'a, C: DisplayContext + ?Sized> ResponsiveLayout<'a, C> {
    /// Bind an engine to a display context
    pub fn new(engine: &'a ResponsiveEngine, context: &'a C) -> Self {
        Self { engine, context }
    }

    /// Bind the standard engine to a display context
    pub fn standard(context: &'a C) -> Self {
        Self::new(ResponsiveEngine::standard(), context)
    }

    /// Current size category
    pub fn category(&self) -> SizeCategory {
        self.engine.classify(&self.context.viewport())
    }

    /// Current scale factor
    pub fn scale_factor(&self) -> f64 {
        self.engine.scale_factor(&self.context.viewport())
    }

    /// Scale a base value for the given metric kind
    pub fn transform(&self, base: f64, kind: MetricKind) -> f64 {
        self.engine.transform(&self.context.viewport(), base, kind)
    }

    /// Scaled font size
    pub fn font(&self, base: f64) -> f64 {
        self.transform(base, MetricKind::Font)
    }

    /// Scaled spacing
    pub fn spacing(&self, base: f64) -> f64 {
        self.transform(base, MetricKind::Spacing)
    }

    /// Scaled elevation
    pub fn elevation(&self, base: f64) -> f64 {
        self.transform(base, MetricKind::Elevation)
    }

    /// Text style for a variant
    pub fn text_style(&self, variant: TypographyVariant) -> ScaledTextStyle {
        self.engine.text_style(&self.context.viewport(), variant)
    }

    /// Resolve a responsive value for the current category
    pub fn select<T: Clone>(&self, value: &ResponsiveValue<T>) -> T {
        value.resolve(self.category()).clone()
    }

    /// Current dialog width
    pub fn dialog_width(&self) -> f64 {
        self.engine.dialog_width(&self.context.viewport())
    }

    /// Current dialog padding
    pub fn dialog_padding(&self) -> DialogPadding {
        self.engine.dialog_padding(&self.context.viewport())
    }

    /// Current button constraints for a dialog button row
    ///
    /// # Errors
    ///
    /// Same as [`ResponsiveEngine::dialog_button_width`].
    pub fn dialog_button_constraints(
        &self,
        button_count: usize,
        spacing: Option<f64>,
    ) -> Result<ButtonConstraints> {
        self.engine
            .dialog_button_constraints(&self.context.viewport(), button_count, spacing)
    }

    /// Current dialog geometry for a button row
    ///
    /// # Errors
    ///
    /// Same as [`ResponsiveEngine::dialog_button_width`].
    pub fn dialog_geometry(
        &self,
        button_count: usize,
        spacing: Option<f64>,
    ) -> Result<DialogGeometry> {
        self.engine
            .dialog_geometry(&self.context.viewport(), button_count, spacing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::ViewportMetrics;
    use mockall::{mock, Sequence};

    mock! {
        Display {}

        impl DisplayContext for Display {
            fn viewport(&self) -> ViewportMetrics;
        }
    }

    fn phone() -> ViewportMetrics {
        ViewportMetrics::new(400.0, 800.0, 2.0).unwrap()
    }

    fn monitor() -> ViewportMetrics {
        ViewportMetrics::new(1920.0, 1080.0, 1.0).unwrap()
    }

    #[test]
    fn test_queries_context_every_call() {
        let mut display = MockDisplay::new();
        display.expect_viewport().times(3).returning(phone);

        let layout = ResponsiveLayout::standard(&display);
        assert!((layout.font(16.0) - 14.72).abs() < 1e-9);
        assert_eq!(layout.category(), SizeCategory::Mobile);
        assert!((layout.dialog_width() - 400.0 * 0.84).abs() < 1e-9);
    }

    #[test]
    fn test_picks_up_rotation() {
        let mut display = MockDisplay::new();
        let mut seq = Sequence::new();
        display
            .expect_viewport()
            .times(1)
            .in_sequence(&mut seq)
            .returning(phone);
        display
            .expect_viewport()
            .times(1)
            .in_sequence(&mut seq)
            .returning(monitor);

        let layout = ResponsiveLayout::standard(&display);
        assert_eq!(layout.category(), SizeCategory::Mobile);
        assert_eq!(layout.category(), SizeCategory::LargeDesktop);
    }

    #[test]
    fn test_select_and_geometry() {
        let mut display = MockDisplay::new();
        display.expect_viewport().returning(monitor);

        let layout = ResponsiveLayout::standard(&display);
        let columns = ResponsiveValue::new(1).tablet(2);
        assert_eq!(layout.select(&columns), 2);

        let geometry = layout.dialog_geometry(2, None).unwrap();
        assert!(geometry.row_width(2) <= geometry.width);
        assert_eq!(geometry.width, layout.dialog_width());
        let padding = layout.dialog_padding();
        assert_eq!(geometry.horizontal_padding, padding.horizontal);
        assert!(layout.elevation(8.0) > layout.spacing(8.0));
    }

    #[test]
    fn test_plain_metrics_as_context() {
        let metrics = phone();
        let layout = ResponsiveLayout::standard(&metrics);
        assert!((layout.scale_factor() - 0.92).abs() < 1e-9);
        let style = layout.text_style(TypographyVariant::Body);
        assert!((style.font_size - 14.0 * 0.92).abs() < 1e-9);
        assert!(layout.dialog_button_constraints(2, None).is_ok());
    }
}
