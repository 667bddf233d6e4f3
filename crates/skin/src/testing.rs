//! Minimal node and helpers shared by the skin's unit tests.

use segbar_core::{BasicSegment, Rect, SegmentNode, StyleClasses};
use segbar_model::{NodeFactory, SegmentedBar, Total};
use std::{cell::Cell, rc::Rc};

#[derive(Debug, Default)]
pub struct TestNode {
    pub bounds:  Rect,
    pub pref:    (f64, f64),
    pub classes: StyleClasses,
}

impl TestNode {
    pub fn with_pref(width: f64, height: f64) -> Self {
        Self { pref: (width, height), ..Self::default() }
    }
}

impl SegmentNode for TestNode {
    fn resize_relocate(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn pref_width(&self) -> f64 {
        self.pref.0
    }

    fn pref_height(&self) -> f64 {
        self.pref.1
    }

    fn style_classes(&self) -> &StyleClasses {
        &self.classes
    }

    fn style_classes_mut(&mut self) -> &mut StyleClasses {
        &mut self.classes
    }
}

/// Factory whose nodes report the segment value as both preferred extents.
pub fn value_sized() -> NodeFactory<BasicSegment> {
    NodeFactory::new(|s: &BasicSegment| {
        Some(Box::new(TestNode::with_pref(s.value, s.value)) as Box<dyn SegmentNode>)
    })
}

/// Like [`value_sized`], but counts invocations.
pub fn counting(calls: Rc<Cell<usize>>) -> NodeFactory<BasicSegment> {
    NodeFactory::new(move |s: &BasicSegment| {
        calls.set(calls.get() + 1);
        Some(Box::new(TestNode::with_pref(s.value, s.value)) as Box<dyn SegmentNode>)
    })
}

pub fn bar(values: &[f64], total: f64) -> SegmentedBar<BasicSegment> {
    SegmentedBar::new(value_sized())
        .with_segments(values.iter().copied().map(BasicSegment::new))
        .with_total(Total::Fixed(total))
}
