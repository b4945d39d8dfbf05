use std::fmt;
use serde::{Deserialize, Serialize};

/// Frame index inside the simulated memory (0..frame_count)
pub type FrameId = usize;

/// 1-based position of a reference in the trace
pub type StepNumber = usize;

/// Opaque page identifier. Equality is by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Page(String);

impl Page {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Page {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for Page {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u32> for Page {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl From<i64> for Page {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}
