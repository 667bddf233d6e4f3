use segbar_core::{Orientation, Rect, Result, SegBarError, Segment, SegmentId};
use segbar_model::SegmentedBar;
use segbar_skin::{Placement, SegmentedBarSkin};
use serde::Serialize;

/// The host-facing size queries, captured at report time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizeHints {
    pub pref_width:  f64,
    pub pref_height: f64,
    pub min_width:   f64,
    pub min_height:  f64,
    pub max_width:   f64,
    pub max_height:  f64,
}

impl SizeHints {
    pub fn of<S: Segment>(skin: &SegmentedBarSkin, bar: &SegmentedBar<S>) -> Self {
        Self {
            pref_width:  skin.pref_width(bar),
            pref_height: skin.pref_height(bar),
            min_width:   skin.min_width(bar),
            min_height:  skin.min_height(bar),
            max_width:   skin.max_width(bar),
            max_height:  skin.max_height(bar),
        }
    }

    /// Clamp a host-offered extent into `[min, max]` on both axes.
    pub fn clamp(&self, width: f64, height: f64) -> (f64, f64) {
        (
            width.max(self.min_width).min(self.max_width),
            height.max(self.min_height).min(self.max_height),
        )
    }
}

/// One placed segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedSegment {
    pub id:      SegmentId,
    pub index:   usize,
    pub value:   f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text:    Option<String>,
    pub bounds:  Rect,
    pub classes: Vec<String>,
}

/// Serialisable summary of one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacementReport {
    pub orientation: Orientation,
    pub total:       f64,
    pub content:     Rect,
    pub hints:       SizeHints,
    pub segments:    Vec<PlacedSegment>,
    /// Segments that have no node (skipped by the factory).
    pub skipped:     Vec<SegmentId>,
}

impl PlacementReport {
    pub fn new<S: Segment>(
        bar: &SegmentedBar<S>,
        skin: &SegmentedBarSkin,
        content: Rect,
        placements: &[Placement],
    ) -> Self {
        let mut segments = Vec::with_capacity(placements.len());
        let mut skipped = Vec::new();

        for (index, (id, segment)) in bar.segments().enumerate() {
            let (Some(placement), Some(node)) = (
                placements.iter().find(|p| p.id == id),
                skin.registry().get(id),
            ) else {
                skipped.push(id);
                continue;
            };
            segments.push(PlacedSegment {
                id,
                index,
                value:   segment.value(),
                text:    segment.text().map(str::to_string),
                bounds:  placement.bounds,
                classes: node.style_classes().iter().map(str::to_string).collect(),
            });
        }

        Self {
            orientation: bar.orientation(),
            total: bar.total(),
            content,
            hints: SizeHints::of(skin, bar),
            segments,
            skipped,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SegBarError::Render(format!("cannot serialise report: {e}")))
    }
}
