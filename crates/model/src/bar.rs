use crate::{factory::NodeFactory, total::Total};
use segbar_core::{BarEvent, Orientation, Result, SegBarError, Segment, SegmentId};
use tokio::sync::mpsc;
use tracing::debug;

/// Receiving end of a bar's change notifications.
pub type BarEvents = mpsc::UnboundedReceiver<BarEvent>;

/// An ordered sequence of segments plus everything needed to draw them.
///
/// Segment order is significant: it drives layout order and first/last
/// classification. Mutations never touch nodes directly; they publish a
/// [`BarEvent`] and leave the reaction to subscribers.
#[derive(Debug)]
pub struct SegmentedBar<S> {
    segments:    Vec<(SegmentId, S)>,
    total:       Total,
    orientation: Orientation,
    factory:     NodeFactory<S>,
    subscribers: Vec<mpsc::UnboundedSender<BarEvent>>,
    next_id:     u64,
}

impl<S: Segment> SegmentedBar<S> {
    pub fn new(factory: NodeFactory<S>) -> Self {
        Self {
            segments:    Vec::new(),
            total:       Total::default(),
            orientation: Orientation::default(),
            factory,
            subscribers: Vec::new(),
            next_id:     1,
        }
    }

    // ── Builders ──────────────────────────────────────────────────────────────

    #[must_use]
    pub fn with_segments(mut self, segments: impl IntoIterator<Item = S>) -> Self {
        for segment in segments {
            let id = self.issue_id();
            self.segments.push((id, segment));
        }
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_total(mut self, total: Total) -> Self {
        self.total = total;
        self
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    /// Register interest in every subsequent change.
    ///
    /// Dropping the receiver unsubscribes; closed channels are pruned on the
    /// next publish.
    pub fn subscribe(&mut self) -> BarEvents {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.iter().filter(|tx| !tx.is_closed()).count()
    }

    fn publish(&mut self, event: BarEvent) {
        debug!(?event, subscribers = self.subscribers.len(), "bar changed");
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }

    fn issue_id(&mut self) -> SegmentId {
        let id = SegmentId::new(self.next_id);
        self.next_id += 1;
        id
    }

    // ── Structural mutation ───────────────────────────────────────────────────

    /// Append a segment and return its identity.
    pub fn push(&mut self, segment: S) -> SegmentId {
        let id = self.issue_id();
        self.segments.push((id, segment));
        self.publish(BarEvent::SegmentsChanged);
        id
    }

    /// Insert a segment at `index` (`index == len` appends).
    pub fn insert(&mut self, index: usize, segment: S) -> Result<SegmentId> {
        if index > self.segments.len() {
            return Err(SegBarError::Model(format!(
                "insert index {index} out of range for {} segments",
                self.segments.len()
            )));
        }
        let id = self.issue_id();
        self.segments.insert(index, (id, segment));
        self.publish(BarEvent::SegmentsChanged);
        Ok(id)
    }

    /// Remove a segment by identity and hand it back.
    pub fn remove(&mut self, id: SegmentId) -> Result<S> {
        let index = self.index_of(id).ok_or_else(|| unknown(id))?;
        let (_, segment) = self.segments.remove(index);
        self.publish(BarEvent::SegmentsChanged);
        Ok(segment)
    }

    /// Replace a segment with a new one; the replacement gets a fresh identity.
    pub fn replace(&mut self, id: SegmentId, segment: S) -> Result<SegmentId> {
        let index = self.index_of(id).ok_or_else(|| unknown(id))?;
        let new_id = self.issue_id();
        self.segments[index] = (new_id, segment);
        self.publish(BarEvent::SegmentsChanged);
        Ok(new_id)
    }

    /// Exchange the positions of two segments.
    pub fn swap(&mut self, a: SegmentId, b: SegmentId) -> Result<()> {
        let ia = self.index_of(a).ok_or_else(|| unknown(a))?;
        let ib = self.index_of(b).ok_or_else(|| unknown(b))?;
        self.segments.swap(ia, ib);
        self.publish(BarEvent::SegmentsChanged);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.segments.clear();
        self.publish(BarEvent::SegmentsChanged);
    }

    /// Replace the whole sequence; every new segment gets a fresh identity.
    pub fn set_segments(&mut self, segments: impl IntoIterator<Item = S>) -> Vec<SegmentId> {
        self.segments.clear();
        let mut ids = Vec::new();
        for segment in segments {
            let id = self.issue_id();
            self.segments.push((id, segment));
            ids.push(id);
        }
        self.publish(BarEvent::SegmentsChanged);
        ids
    }

    // ── Non-structural mutation ───────────────────────────────────────────────

    /// Mutate one segment in place (typically its value).
    ///
    /// Identity is preserved, so subscribers only need to re-layout.
    pub fn update<F>(&mut self, id: SegmentId, f: F) -> Result<()>
    where
        F: FnOnce(&mut S),
    {
        let index = self.index_of(id).ok_or_else(|| unknown(id))?;
        f(&mut self.segments[index].1);
        self.publish(BarEvent::ValueChanged(id));
        Ok(())
    }

    pub fn set_factory(&mut self, factory: NodeFactory<S>) {
        self.factory = factory;
        self.publish(BarEvent::FactoryChanged);
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation != orientation {
            self.orientation = orientation;
            self.publish(BarEvent::OrientationChanged(orientation));
        }
    }

    pub fn set_total(&mut self, total: Total) {
        self.total = total;
        self.publish(BarEvent::TotalChanged);
    }

    // ── Read-only views ───────────────────────────────────────────────────────

    /// Segments in display order, paired with their identities.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = (SegmentId, &S)> + '_ {
        self.segments.iter().map(|(id, s)| (*id, s))
    }

    pub fn ids(&self) -> Vec<SegmentId> {
        self.segments.iter().map(|(id, _)| *id).collect()
    }

    pub fn get(&self, id: SegmentId) -> Option<&S> {
        self.segments.iter().find(|(sid, _)| *sid == id).map(|(_, s)| s)
    }

    pub fn index_of(&self, id: SegmentId) -> Option<usize> {
        self.segments.iter().position(|(sid, _)| *sid == id)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn total_policy(&self) -> Total {
        self.total
    }

    /// The denominator used for proportional sizing.
    pub fn total(&self) -> f64 {
        self.total.resolve(self.segments.iter().map(|(_, s)| s.value()))
    }

    pub fn factory(&self) -> &NodeFactory<S> {
        &self.factory
    }
}

fn unknown(id: SegmentId) -> SegBarError {
    SegBarError::Model(format!("no segment with id {id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use segbar_core::BasicSegment;

    fn bar(values: &[f64]) -> SegmentedBar<BasicSegment> {
        SegmentedBar::new(NodeFactory::new(|_| None))
            .with_segments(values.iter().copied().map(BasicSegment::new))
    }

    fn drain(rx: &mut BarEvents) -> Vec<BarEvent> {
        let mut out = Vec::new();
        while let Ok(event) = rx.try_recv() {
            out.push(event);
        }
        out
    }

    #[test]
    fn ids_are_unique_for_equal_values() {
        let bar = bar(&[1.0, 1.0]);
        let ids = bar.ids();
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn push_publishes_structural_change() {
        let mut bar = bar(&[]);
        let mut rx = bar.subscribe();
        bar.push(BasicSegment::new(3.0));
        assert_eq!(drain(&mut rx), [BarEvent::SegmentsChanged]);
    }

    #[test]
    fn update_publishes_value_change() {
        let mut bar = bar(&[1.0, 2.0]);
        let id = bar.ids()[1];
        let mut rx = bar.subscribe();
        bar.update(id, |s| s.value = 5.0).unwrap();
        assert_eq!(drain(&mut rx), [BarEvent::ValueChanged(id)]);
        assert_eq!(bar.get(id).map(|s| s.value), Some(5.0));
    }

    #[test]
    fn auto_total_tracks_values() {
        let mut bar = bar(&[1.0, 1.0, 2.0]);
        assert_eq!(bar.total(), 4.0);
        bar.set_total(Total::Fixed(10.0));
        assert_eq!(bar.total(), 10.0);
    }

    #[test]
    fn unknown_id_is_an_error() {
        let mut bar = bar(&[1.0]);
        let err = bar.remove(SegmentId::new(999)).unwrap_err();
        assert!(matches!(err, SegBarError::Model(_)));
    }

    #[test]
    fn insert_out_of_range_is_rejected() {
        let mut bar = bar(&[1.0]);
        assert!(bar.insert(5, BasicSegment::new(1.0)).is_err());
        assert!(bar.insert(1, BasicSegment::new(1.0)).is_ok());
    }

    #[test]
    fn replace_issues_fresh_identity() {
        let mut bar = bar(&[1.0]);
        let old = bar.ids()[0];
        let new = bar.replace(old, BasicSegment::new(2.0)).unwrap();
        assert_ne!(old, new);
        assert!(bar.get(old).is_none());
    }

    #[test]
    fn unchanged_orientation_is_silent() {
        let mut bar = bar(&[1.0]);
        let mut rx = bar.subscribe();
        bar.set_orientation(Orientation::Horizontal);
        assert!(drain(&mut rx).is_empty());
        bar.set_orientation(Orientation::Vertical);
        assert_eq!(drain(&mut rx), [BarEvent::OrientationChanged(Orientation::Vertical)]);
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let mut bar = bar(&[]);
        let rx = bar.subscribe();
        drop(rx);
        bar.push(BasicSegment::new(1.0));
        assert_eq!(bar.subscriber_count(), 0);
    }
}
