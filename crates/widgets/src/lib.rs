pub mod factory;
pub mod format;
pub mod spacer;
pub mod view;

pub use factory::{segment_views, skip_zero, spacers};
pub use format::format_value;
pub use spacer::Spacer;
pub use view::SegmentView;
