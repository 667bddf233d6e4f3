use serde::{Deserialize, Serialize};
use std::fmt;

/// Base style class carried by every segment node.
pub const SEGMENT_CLASS: &str = "segment";

/// Positional classification of a segment, used purely for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentClass {
    Only,
    First,
    Middle,
    Last,
}

impl SegmentClass {
    pub const ALL: [Self; 4] = [Self::Only, Self::First, Self::Middle, Self::Last];

    /// Classify the segment at `index` in a sequence of `len` segments.
    ///
    /// A sole segment is `Only`; otherwise index 0 is `First`, the final
    /// index is `Last` and everything between is `Middle`.
    pub fn classify(index: usize, len: usize) -> Self {
        if index == 0 {
            if len == 1 { Self::Only } else { Self::First }
        } else if index + 1 == len {
            Self::Last
        } else {
            Self::Middle
        }
    }

    /// Style class string attached to the node.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Only   => "only-segment",
            Self::First  => "first-segment",
            Self::Middle => "middle-segment",
            Self::Last   => "last-segment",
        }
    }

    /// Reverse lookup from a style class string.
    pub fn from_class(class: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == class)
    }
}

impl fmt::Display for SegmentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, duplicate-free list of style classes attached to a node.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StyleClasses(Vec<String>);

impl StyleClasses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `class` unless it is already present.
    pub fn add(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.contains(&class) {
            self.0.push(class);
        }
    }

    pub fn remove(&mut self, class: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|c| c != class);
        self.0.len() != before
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The positional classification carried by this node, if any.
    pub fn segment_class(&self) -> Option<SegmentClass> {
        self.iter().find_map(SegmentClass::from_class)
    }
}
