//! Size queries the host asks before allocating the bar's rectangle.
//!
//! The bar is rigid across its thickness (as thick as its thickest node) and
//! fully elastic along its length.

use crate::skin::SegmentedBarSkin;
use segbar_core::{Orientation, Segment, SegmentNode};
use segbar_model::SegmentedBar;

/// Largest `f` over all displayed nodes, or 0 with none.
fn thickest<'a, I, F>(nodes: I, f: F) -> f64
where
    I: Iterator<Item = &'a dyn SegmentNode>,
    F: Fn(&dyn SegmentNode) -> f64,
{
    nodes.map(f).fold(None, |max: Option<f64>, v| Some(max.map_or(v, |m| m.max(v)))).unwrap_or(0.0)
}

impl SegmentedBarSkin {
    /// Tallest node's preferred height for horizontal bars, else 0.
    pub fn pref_height<S: Segment>(&self, bar: &SegmentedBar<S>) -> f64 {
        match bar.orientation() {
            Orientation::Horizontal => thickest(self.registry.nodes(), |n| n.pref_height()),
            Orientation::Vertical   => 0.0,
        }
    }

    /// Widest node's preferred width for vertical bars, else 0.
    pub fn pref_width<S: Segment>(&self, bar: &SegmentedBar<S>) -> f64 {
        match bar.orientation() {
            Orientation::Vertical   => thickest(self.registry.nodes(), |n| n.pref_width()),
            Orientation::Horizontal => 0.0,
        }
    }

    pub fn min_height<S: Segment>(&self, bar: &SegmentedBar<S>) -> f64 {
        match bar.orientation() {
            Orientation::Horizontal => self.pref_height(bar),
            Orientation::Vertical   => 0.0,
        }
    }

    pub fn min_width<S: Segment>(&self, bar: &SegmentedBar<S>) -> f64 {
        match bar.orientation() {
            Orientation::Vertical   => self.pref_width(bar),
            Orientation::Horizontal => 0.0,
        }
    }

    /// Unbounded (`f64::MAX`) along a vertical bar's length.
    pub fn max_height<S: Segment>(&self, bar: &SegmentedBar<S>) -> f64 {
        match bar.orientation() {
            Orientation::Horizontal => self.pref_height(bar),
            Orientation::Vertical   => f64::MAX,
        }
    }

    /// Unbounded (`f64::MAX`) along a horizontal bar's length.
    pub fn max_width<S: Segment>(&self, bar: &SegmentedBar<S>) -> f64 {
        match bar.orientation() {
            Orientation::Vertical   => self.pref_width(bar),
            Orientation::Horizontal => f64::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{testing::TestNode, SegmentedBarSkin};
    use segbar_core::{BasicSegment, Orientation, SegmentNode};
    use segbar_model::{NodeFactory, SegmentedBar};

    /// Segment value doubles as the node's preferred height, text length as width.
    fn bar(prefs: &[(f64, f64)], orientation: Orientation) -> SegmentedBar<BasicSegment> {
        let factory = NodeFactory::new(|s: &BasicSegment| {
            let width = s.text.as_deref().map_or(0.0, |t| t.len() as f64);
            Some(Box::new(TestNode::with_pref(width, s.value)) as Box<dyn SegmentNode>)
        });
        SegmentedBar::new(factory)
            .with_orientation(orientation)
            .with_segments(prefs.iter().map(|&(w, h)| BasicSegment::with_text(h, "x".repeat(w as usize))))
    }

    #[test]
    fn horizontal_height_is_tallest_node() {
        let mut bar = bar(&[(50.0, 10.0), (80.0, 30.0), (5.0, 20.0)], Orientation::Horizontal);
        let skin = SegmentedBarSkin::new(&mut bar);
        assert_eq!(skin.pref_height(&bar), 30.0);
        assert_eq!(skin.pref_width(&bar), 0.0);
    }

    #[test]
    fn horizontal_policy_is_rigid_across_elastic_along() {
        let mut bar = bar(&[(4.0, 12.0), (6.0, 7.0)], Orientation::Horizontal);
        let skin = SegmentedBarSkin::new(&mut bar);
        assert_eq!(skin.min_height(&bar), 12.0);
        assert_eq!(skin.max_height(&bar), 12.0);
        assert_eq!(skin.min_width(&bar), 0.0);
        assert_eq!(skin.max_width(&bar), f64::MAX);
    }

    #[test]
    fn vertical_width_is_widest_node() {
        let mut bar = bar(&[(3.0, 1.0), (9.0, 1.0), (4.0, 1.0)], Orientation::Vertical);
        let skin = SegmentedBarSkin::new(&mut bar);
        assert_eq!(skin.pref_width(&bar), 9.0);
        assert_eq!(skin.min_width(&bar), 9.0);
        assert_eq!(skin.max_width(&bar), 9.0);
        assert_eq!(skin.pref_height(&bar), 0.0);
        assert_eq!(skin.min_height(&bar), 0.0);
        assert_eq!(skin.max_height(&bar), f64::MAX);
    }

    #[test]
    fn no_nodes_means_zero_thickness() {
        let mut bar = bar(&[], Orientation::Horizontal);
        let skin = SegmentedBarSkin::new(&mut bar);
        assert_eq!(skin.pref_height(&bar), 0.0);
        assert_eq!(skin.max_height(&bar), 0.0);
    }
}
