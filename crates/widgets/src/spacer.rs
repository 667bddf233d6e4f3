use segbar_core::{Rect, SegmentNode, Size, StyleClasses};

/// Label-less node with a fixed preferred size.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Spacer {
    pref:    Size,
    bounds:  Rect,
    classes: StyleClasses,
}

impl Spacer {
    pub fn new(pref: Size) -> Self {
        Self { pref, ..Self::default() }
    }
}

impl SegmentNode for Spacer {
    fn resize_relocate(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn pref_width(&self) -> f64 {
        self.pref.width
    }

    fn pref_height(&self) -> f64 {
        self.pref.height
    }

    fn style_classes(&self) -> &StyleClasses {
        &self.classes
    }

    fn style_classes_mut(&mut self) -> &mut StyleClasses {
        &mut self.classes
    }
}
