//! Ready-made node factories.

use crate::{format::format_value, spacer::Spacer, view::SegmentView};
use segbar_core::{Segment, SegmentNode, Size};
use segbar_model::NodeFactory;
use tracing::trace;

/// [`SegmentView`] per segment, labelled with its text or, failing that, its value.
pub fn segment_views<S: Segment + 'static>(padding: f64) -> NodeFactory<S> {
    NodeFactory::new(move |segment: &S| {
        let label = segment
            .text()
            .map_or_else(|| format_value(segment.value()), str::to_string);
        Some(Box::new(SegmentView::new(label).with_padding(padding)) as Box<dyn SegmentNode>)
    })
}

/// [`Spacer`] of a fixed preferred size per segment.
pub fn spacers<S: Segment + 'static>(pref: Size) -> NodeFactory<S> {
    NodeFactory::new(move |_: &S| Some(Box::new(Spacer::new(pref)) as Box<dyn SegmentNode>))
}

/// Wrap `inner` so zero-valued segments get no node at all.
pub fn skip_zero<S: Segment + 'static>(inner: NodeFactory<S>) -> NodeFactory<S> {
    NodeFactory::new(move |segment: &S| {
        if segment.value() == 0.0 {
            trace!("zero-valued segment; no node");
            return None;
        }
        inner.create(segment)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use segbar_core::BasicSegment;

    #[test]
    fn views_prefer_text_over_value() {
        let factory = segment_views::<BasicSegment>(0.0);
        let node = factory.create(&BasicSegment::with_text(3.0, "disk")).unwrap();
        assert_eq!(node.label(), Some("disk"));

        let node = factory.create(&BasicSegment::new(2.5)).unwrap();
        assert_eq!(node.label(), Some("2.5"));
    }

    #[test]
    fn skip_zero_filters() {
        let factory = skip_zero(spacers::<BasicSegment>(Size::new(1.0, 1.0)));
        assert!(factory.create(&BasicSegment::new(0.0)).is_none());
        assert!(factory.create(&BasicSegment::new(0.1)).is_some());
    }
}
