use std::fmt;
use serde::{Deserialize, Serialize};

use crate::common::types::Page;
use crate::simulation::segment::Segment;

/// Outcome of a single reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessStatus {
    Hit,
    Fault,
}

/// Per-step status of a frame. Only the frame touched by the current
/// reference carries `Hit` or `Fault`; every other frame is `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FrameStatus {
    #[default]
    Idle,
    Hit,
    Fault,
}

impl From<AccessStatus> for FrameStatus {
    fn from(status: AccessStatus) -> Self {
        match status {
            AccessStatus::Hit => FrameStatus::Hit,
            AccessStatus::Fault => FrameStatus::Fault,
        }
    }
}

impl fmt::Display for FrameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameStatus::Idle => write!(f, "Idle"),
            FrameStatus::Hit => write!(f, "Hit"),
            FrameStatus::Fault => write!(f, "Fault"),
        }
    }
}

impl fmt::Display for AccessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FrameStatus::from(*self).fmt(f)
    }
}

/// A slot of simulated memory
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Frame {
    pub occupant: Option<Page>,
    pub status: FrameStatus,
    pub segment: Option<Segment>,
}

impl Frame {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    pub fn holds(&self, page: &Page) -> bool {
        self.occupant.as_ref() == Some(page)
    }

    /// Overwrite the frame with a newly loaded page, returning the evicted one
    pub(crate) fn load(&mut self, page: Page, segment: Segment) -> Option<Page> {
        self.status = FrameStatus::Fault;
        self.segment = Some(segment);
        self.occupant.replace(page)
    }
}
