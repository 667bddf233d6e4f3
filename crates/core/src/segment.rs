use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a segment inside a bar model.
///
/// Issued by the model on insertion and never reused, so two segments with
/// equal values are still distinct entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SegmentId(u64);

impl SegmentId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A value-bearing unit occupying a proportional share of the bar.
pub trait Segment: fmt::Debug {
    /// Non-negative magnitude of this segment.
    fn value(&self) -> f64;

    /// Optional label rendered by text-capable nodes.
    fn text(&self) -> Option<&str> {
        None
    }
}

/// Plain segment with a value and an optional label.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BasicSegment {
    pub value: f64,
    #[serde(default)]
    pub text:  Option<String>,
}

impl BasicSegment {
    pub fn new(value: f64) -> Self {
        Self { value, text: None }
    }

    pub fn with_text(value: f64, text: impl Into<String>) -> Self {
        Self { value, text: Some(text.into()) }
    }
}

impl Segment for BasicSegment {
    fn value(&self) -> f64 {
        self.value
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}
