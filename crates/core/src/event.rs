use crate::{geometry::Orientation, segment::SegmentId};

/// Change notifications published by a bar model to its subscribers.
///
/// Structural events (`SegmentsChanged`, `FactoryChanged`) require the skin
/// to rebuild its node mapping; the rest only invalidate the current layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BarEvent {
    // ── Structural ────────────────────────────────────────────────────────────
    /// The segment sequence was inserted into, removed from, replaced or reordered.
    SegmentsChanged,
    /// The node factory was replaced.
    FactoryChanged,

    // ── Geometry ──────────────────────────────────────────────────────────────
    /// A single segment's value changed in place.
    ValueChanged(SegmentId),
    /// The bar switched axis.
    OrientationChanged(Orientation),
    /// The declared total (or total policy) changed.
    TotalChanged,
}

impl BarEvent {
    /// `true` when the event invalidates the segment → node mapping.
    #[must_use]
    pub fn requires_rebuild(&self) -> bool {
        matches!(self, Self::SegmentsChanged | Self::FactoryChanged)
    }
}
