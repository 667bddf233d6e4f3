use crate::registry::NodeRegistry;
use segbar_core::{BarEvent, Segment, SegmentClass, SEGMENT_CLASS};
use segbar_model::{BarEvents, SegmentedBar};
use tokio::sync::mpsc::error::TryRecvError;
use tracing::{debug, warn};

/// Rebuild controller and layout engine for one segmented bar.
///
/// The skin subscribes to its bar on construction. Pending change
/// notifications are applied by [`SegmentedBarSkin::process_events`]; the
/// host then calls [`SegmentedBarSkin::layout`] whenever
/// [`SegmentedBarSkin::needs_layout`] reports `true`.
#[derive(Debug)]
pub struct SegmentedBarSkin {
    pub(crate) registry:     NodeRegistry,
    pub(crate) needs_layout: bool,
    events:   Option<BarEvents>,
    rebuilds: u64,
}

impl SegmentedBarSkin {
    /// Subscribe to `bar` and build the initial node mapping.
    pub fn new<S: Segment>(bar: &mut SegmentedBar<S>) -> Self {
        let mut skin = Self {
            registry:     NodeRegistry::new(),
            needs_layout: true,
            events:       Some(bar.subscribe()),
            rebuilds:     0,
        };
        skin.rebuild(bar);
        skin
    }

    /// Discard the current mapping and regenerate one node per segment.
    ///
    /// The factory is invoked exactly once per segment, in sequence order.
    /// A segment the factory cannot produce a node for is left out of the
    /// mapping; the remaining segments keep the classification of their
    /// position in the full sequence.
    pub fn rebuild<S: Segment>(&mut self, bar: &SegmentedBar<S>) {
        self.registry.clear();

        let len = bar.len();
        let factory = bar.factory();

        for (index, (id, segment)) in bar.segments().enumerate() {
            let Some(mut node) = factory.create(segment) else {
                warn!(%id, index, "node factory produced no node; segment skipped");
                continue;
            };

            let classes = node.style_classes_mut();
            for stale in SegmentClass::ALL {
                classes.remove(stale.as_str());
            }
            classes.add(SEGMENT_CLASS);
            classes.add(SegmentClass::classify(index, len).as_str());

            self.registry.insert(id, node);
        }

        self.rebuilds += 1;
        self.needs_layout = true;
        debug!(
            segments = len,
            nodes = self.registry.len(),
            rebuild = self.rebuilds,
            "rebuilt segment nodes"
        );
    }

    /// Apply every notification published since the last call.
    ///
    /// Structural changes trigger a single rebuild however many arrived;
    /// geometry-only changes just invalidate the layout. Returns
    /// [`SegmentedBarSkin::needs_layout`].
    pub fn process_events<S: Segment>(&mut self, bar: &SegmentedBar<S>) -> bool {
        let mut rebuild = false;
        let mut relayout = false;

        if let Some(rx) = self.events.as_mut() {
            loop {
                match rx.try_recv() {
                    Ok(event) => {
                        if event.requires_rebuild() {
                            rebuild = true;
                        } else {
                            relayout = true;
                        }
                        if let BarEvent::ValueChanged(id) = event {
                            debug!(%id, "segment value changed");
                        }
                    }
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        warn!("bar dropped its subscribers; skin detached");
                        self.events = None;
                        break;
                    }
                }
            }
        }

        if rebuild {
            self.rebuild(bar);
        } else if relayout {
            self.needs_layout = true;
        }
        self.needs_layout
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Read-only view of the segment → node mapping.
    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    /// Number of rebuilds performed so far, including the initial one.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }
}
