use segbar_core::{Rect, SegmentNode, StyleClasses};
use unicode_width::UnicodeWidthStr;

/// Default segment node: a filled block with a centred text label.
///
/// Sizes are in terminal cells; the label is one row tall.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentView {
    label:   String,
    padding: f64,
    bounds:  Rect,
    classes: StyleClasses,
}

impl SegmentView {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label:   label.into(),
            padding: 0.0,
            bounds:  Rect::ZERO,
            classes: StyleClasses::new(),
        }
    }

    /// Inner padding on every side (cells).
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding.max(0.0);
        self
    }
}

impl SegmentNode for SegmentView {
    fn resize_relocate(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn pref_width(&self) -> f64 {
        self.label.width() as f64 + 2.0 * self.padding
    }

    fn pref_height(&self) -> f64 {
        1.0 + 2.0 * self.padding
    }

    fn style_classes(&self) -> &StyleClasses {
        &self.classes
    }

    fn style_classes_mut(&mut self) -> &mut StyleClasses {
        &mut self.classes
    }

    fn label(&self) -> Option<&str> {
        (!self.label.is_empty()).then_some(self.label.as_str())
    }
}
