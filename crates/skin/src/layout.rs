use crate::skin::SegmentedBarSkin;
use segbar_core::{Orientation, Rect, Segment, SegmentId};
use segbar_model::SegmentedBar;
use serde::Serialize;
use tracing::{debug, trace};

/// Bounds assigned to one segment's node by a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub id:     SegmentId,
    pub bounds: Rect,
}

/// Share of `length` owned by `value`.
///
/// A non-positive or non-finite total yields zero, as does any result that
/// is not finite, so no NaN reaches a node.
fn extent(value: f64, total: f64, length: f64) -> f64 {
    if !(total > 0.0 && total.is_finite()) {
        return 0.0;
    }
    let share = value / total * length;
    if share.is_finite() { share } else { 0.0 }
}

/// Partition `content` along `orientation` in proportion to each value.
///
/// Horizontal runs left-to-right from `content.x`, each slot spanning the
/// full content height. Vertical runs bottom-to-top from the bottom edge,
/// each slot spanning the full content width. Accumulated floating-point
/// drift is left as is.
pub fn partition<I>(orientation: Orientation, total: f64, content: Rect, values: I) -> Vec<Placement>
where
    I: IntoIterator<Item = (SegmentId, f64)>,
{
    let mut x = content.x;
    let mut y = content.y + content.height;

    values
        .into_iter()
        .map(|(id, value)| {
            let bounds = match orientation {
                Orientation::Horizontal => {
                    let width = extent(value, total, content.width);
                    let bounds = Rect::new(x, content.y, width, content.height);
                    x += width;
                    bounds
                }
                Orientation::Vertical => {
                    let height = extent(value, total, content.height);
                    let bounds = Rect::new(content.x, y - height, content.width, height);
                    y -= height;
                    bounds
                }
            };
            Placement { id, bounds }
        })
        .collect()
}

impl SegmentedBarSkin {
    /// Place every registered node inside `content`.
    ///
    /// Reads the current mapping; never rebuilds it. A segment without a node
    /// still consumes its share, leaving a gap. Returns the placements that
    /// were applied, in sequence order.
    pub fn layout<S: Segment>(&mut self, bar: &SegmentedBar<S>, content: Rect) -> Vec<Placement> {
        let slots = partition(
            bar.orientation(),
            bar.total(),
            content,
            bar.segments().map(|(id, s)| (id, s.value())),
        );

        let mut applied = Vec::with_capacity(slots.len());
        for placement in slots {
            let Some(node) = self.registry.get_mut(placement.id) else {
                continue;
            };
            trace!(id = %placement.id, bounds = ?placement.bounds, "place segment");
            node.resize_relocate(placement.bounds);
            applied.push(placement);
        }

        self.needs_layout = false;
        debug!(
            orientation = ?bar.orientation(),
            placed = applied.len(),
            "layout pass complete"
        );
        applied
    }
}
