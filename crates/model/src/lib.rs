//! The segmented bar model: an ordered segment sequence, its total, its
//! orientation and the factory that turns segments into nodes.
//!
//! The model owns no nodes. Every mutation publishes a [`BarEvent`] to all
//! subscribers so a skin can rebuild or re-layout.

pub mod bar;
pub mod factory;
pub mod total;

pub use bar::{BarEvents, SegmentedBar};
pub use factory::NodeFactory;
pub use total::Total;

pub use segbar_core::BarEvent;
