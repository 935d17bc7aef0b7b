use serde::{Deserialize, Serialize};

use crate::figure::layout::Layout;
use crate::figure::trace::Trace;

/// A complete chart description: traces, layout, optional animation frames.
///
/// Always rebuilt whole from `(table, selection)`; consumers treat it as a
/// value and never patch individual fields. Identical inputs serialize to
/// byte-identical JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<Frame>,
}

impl Figure {
    #[must_use]
    pub fn new(data: Vec<Trace>, layout: Layout) -> Self {
        Self {
            data,
            layout,
            frames: Vec::new(),
        }
    }

    /// The no-data figure: empty trace list, empty layout. Serializes as
    /// `{"data":[],"layout":{}}`.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_frames(mut self, frames: Vec<Frame>) -> Self {
        self.frames = frames;
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty() && self.frames.is_empty()
    }
}

/// One named animation step, usually keyed by year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub name: String,
    pub data: Vec<Trace>,
}

impl Frame {
    #[must_use]
    pub fn new(name: impl Into<String>, data: Vec<Trace>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}
