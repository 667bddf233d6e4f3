//! Layout and rebuild engine for the segmented bar.
//!
//! [`SegmentedBarSkin`] keeps a one-to-one mapping from segments to nodes
//! (rebuilt wholesale on structural change), partitions a content rectangle
//! among those nodes in proportion to each segment's value, and answers the
//! host's size queries.

pub mod layout;
pub mod registry;
pub mod sizing;
pub mod skin;

#[cfg(test)]
mod testing;

pub use layout::{partition, Placement};
pub use registry::NodeRegistry;
pub use skin::SegmentedBarSkin;
