pub mod error;
pub mod event;
pub mod geometry;
pub mod node;
pub mod segment;
pub mod style;

pub use error::{Result, SegBarError};
pub use event::BarEvent;
pub use geometry::{Orientation, Rect, Size};
pub use node::SegmentNode;
pub use segment::{BasicSegment, Segment, SegmentId};
pub use style::{SegmentClass, StyleClasses, SEGMENT_CLASS};
