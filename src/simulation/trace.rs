// Simulation trace
//
// A trace is plain data: it can be stored, sent elsewhere and replayed
// without the engine.

use serde::{Deserialize, Serialize};

use crate::common::types::{FrameId, Page, StepNumber};
use crate::simulation::config::{validate_frame_count, Policy};
use crate::simulation::error::{Result, SimulationError};
use crate::simulation::frame::{AccessStatus, Frame};
use crate::simulation::segment::Segment;

fn corrupt(reason: String) -> SimulationError {
    SimulationError::CorruptTrace(reason)
}

/// One reference and the memory state right after it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// 1-based step number
    pub step: StepNumber,

    /// Page referenced by this step
    pub page: Page,

    /// Segment of the referenced page
    pub segment: Segment,

    /// Frame that was hit or loaded
    pub frame: FrameId,

    /// Snapshot of every frame after the reference was applied
    pub frames: Vec<Frame>,

    pub status: AccessStatus,

    /// Page evicted by this step, if any
    pub replaced: Option<Page>,
}

impl Step {
    pub fn is_hit(&self) -> bool {
        self.status == AccessStatus::Hit
    }

    pub fn is_fault(&self) -> bool {
        self.status == AccessStatus::Fault
    }

    /// Occupants in frame order, `None` for empty frames
    pub fn occupants(&self) -> Vec<Option<&Page>> {
        self.frames.iter().map(|f| f.occupant.as_ref()).collect()
    }
}

/// Complete output of one simulation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    #[serde(rename = "framesCount")]
    pub frame_count: usize,

    #[serde(rename = "algorithm")]
    pub policy: Policy,

    pub page_faults: usize,

    pub history: Vec<Step>,
}

impl SimulationResult {
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.history.len().saturating_sub(self.page_faults)
    }

    pub fn fault_rate(&self) -> f64 {
        if self.history.is_empty() {
            return 0.0;
        }
        self.page_faults as f64 / self.history.len() as f64
    }

    pub fn hit_rate(&self) -> f64 {
        if self.history.is_empty() {
            return 0.0;
        }
        1.0 - self.fault_rate()
    }

    /// Compact binary encoding of the whole trace
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a stored trace, rejecting one whose counts and snapshots do
    /// not agree with each other
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let result: Self = bincode::deserialize(bytes)?;
        result.validate()?;
        Ok(result)
    }

    /// Check the invariants every engine-produced trace holds
    pub fn validate(&self) -> Result<()> {
        validate_frame_count(self.frame_count)
            .map_err(|_| corrupt(format!("frame count {} out of range", self.frame_count)))?;

        for (i, step) in self.history.iter().enumerate() {
            if step.step != i + 1 {
                return Err(corrupt(format!("entry {} is numbered {}", i + 1, step.step)));
            }
            if step.frames.len() != self.frame_count {
                return Err(corrupt(format!(
                    "step {} has {} frames, expected {}",
                    step.step,
                    step.frames.len(),
                    self.frame_count
                )));
            }
            if step.frame >= self.frame_count {
                return Err(corrupt(format!("step {} touches frame {}", step.step, step.frame)));
            }
        }

        let faults = self.history.iter().filter(|s| s.is_fault()).count();
        if faults != self.page_faults {
            return Err(corrupt(format!(
                "{} page faults recorded, {} fault steps found",
                self.page_faults, faults
            )));
        }

        Ok(())
    }

    /// JSON in the shape served by the web simulation endpoint
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
