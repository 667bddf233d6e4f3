use crate::{
    geometry::Rect,
    style::StyleClasses,
};
use std::fmt::Debug;

/// A renderable node produced by a node factory for one segment.
///
/// The layout core only places nodes and reads their preferred sizes; what a
/// node looks like is up to the implementation (see `segbar-widgets`).
pub trait SegmentNode: Debug {
    /// Move and resize the node to `bounds` (absolute coordinates).
    fn resize_relocate(&mut self, bounds: Rect);

    /// Bounds last assigned by [`SegmentNode::resize_relocate`].
    fn bounds(&self) -> Rect;

    /// Intrinsic width, independent of any height constraint.
    fn pref_width(&self) -> f64;

    /// Intrinsic height, independent of any width constraint.
    fn pref_height(&self) -> f64;

    fn style_classes(&self) -> &StyleClasses;

    fn style_classes_mut(&mut self) -> &mut StyleClasses;

    /// Text to draw inside the node, if it has any.
    fn label(&self) -> Option<&str> {
        None
    }
}
