use segbar_core::{SegmentId, SegmentNode};
use std::collections::HashMap;

/// Segment → node table plus the displayed-node list, in sequence order.
///
/// Nodes live in a single `Vec` (the displayed list); the map stores slot
/// indices into it. Only the rebuild controller mutates the table; layout and
/// sizing get read access, plus mutable access to node geometry.
#[derive(Debug, Default)]
pub struct NodeRegistry {
    nodes: Vec<(SegmentId, Box<dyn SegmentNode>)>,
    slots: HashMap<SegmentId, usize>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every mapping entry and displayed node.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.slots.clear();
    }

    /// Append `node` to the displayed list and map `id` to it.
    pub(crate) fn insert(&mut self, id: SegmentId, node: Box<dyn SegmentNode>) {
        if let Some(&slot) = self.slots.get(&id) {
            self.nodes[slot].1 = node;
            return;
        }
        self.slots.insert(id, self.nodes.len());
        self.nodes.push((id, node));
    }

    pub fn get(&self, id: SegmentId) -> Option<&dyn SegmentNode> {
        self.slots.get(&id).map(|&slot| self.nodes[slot].1.as_ref())
    }

    pub(crate) fn get_mut(&mut self, id: SegmentId) -> Option<&mut (dyn SegmentNode + 'static)> {
        let slot = *self.slots.get(&id)?;
        Some(self.nodes[slot].1.as_mut())
    }

    pub fn contains(&self, id: SegmentId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Segment identities in displayed order.
    pub fn ids(&self) -> impl Iterator<Item = SegmentId> + '_ {
        self.nodes.iter().map(|(id, _)| *id)
    }

    /// Displayed nodes in order, paired with their segment.
    pub fn iter(&self) -> impl Iterator<Item = (SegmentId, &dyn SegmentNode)> + '_ {
        self.nodes.iter().map(|(id, node)| (*id, node.as_ref()))
    }

    /// Displayed nodes in order.
    pub fn nodes(&self) -> impl Iterator<Item = &dyn SegmentNode> + '_ {
        self.nodes.iter().map(|(_, node)| node.as_ref())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestNode;

    #[test]
    fn insert_keeps_display_order() {
        let mut reg = NodeRegistry::new();
        let (a, b) = (SegmentId::new(7), SegmentId::new(3));
        reg.insert(a, Box::new(TestNode::default()));
        reg.insert(b, Box::new(TestNode::default()));
        assert_eq!(reg.ids().collect::<Vec<_>>(), [a, b]);
        assert!(reg.contains(a) && reg.contains(b));
    }

    #[test]
    fn reinserting_replaces_in_place() {
        let mut reg = NodeRegistry::new();
        let id = SegmentId::new(1);
        reg.insert(id, Box::new(TestNode::with_pref(1.0, 1.0)));
        reg.insert(id, Box::new(TestNode::with_pref(5.0, 5.0)));
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get(id).map(|n| n.pref_width()), Some(5.0));
    }

    #[test]
    fn clear_empties_both_views() {
        let mut reg = NodeRegistry::new();
        reg.insert(SegmentId::new(1), Box::new(TestNode::default()));
        reg.clear();
        assert!(reg.is_empty());
        assert!(!reg.contains(SegmentId::new(1)));
    }
}
