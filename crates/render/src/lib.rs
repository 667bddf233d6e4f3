//! Drawing for a laid-out segmented bar.
//!
//! The skin only computes bounds; this crate turns those bounds into
//! terminal cells ([`Canvas`]) or a serialisable [`PlacementReport`].

pub mod canvas;
pub mod report;

pub use canvas::{Canvas, Cell};
pub use report::{PlacedSegment, PlacementReport, SizeHints};
