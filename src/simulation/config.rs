use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::common::types::Page;
use crate::simulation::engine::simulate;
use crate::simulation::error::{Result, SimulationError};
use crate::simulation::segment::SegmentMap;
use crate::simulation::trace::SimulationResult;

/// Page replacement policy, fixed for the whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Policy {
    #[default]
    #[serde(rename = "FIFO")]
    Fifo,
    #[serde(rename = "LRU")]
    Lru,
    #[serde(rename = "Optimal")]
    Optimal,
}

impl Policy {
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Optimal];

    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "Optimal",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = SimulationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FIFO" => Ok(Policy::Fifo),
            "LRU" => Ok(Policy::Lru),
            "OPT" | "OPTIMAL" => Ok(Policy::Optimal),
            _ => Err(SimulationError::UnknownPolicy(s.trim().to_string())),
        }
    }
}

/// Largest frame count accepted. Every step snapshots all frames, so the
/// bound keeps a trace proportional to the reference string.
pub const MAX_FRAMES: usize = 1024;

/// Check a frame count against `1..=MAX_FRAMES`
pub fn validate_frame_count(frame_count: usize) -> Result<()> {
    if frame_count == 0 || frame_count > MAX_FRAMES {
        return Err(SimulationError::InvalidFrameCount(frame_count));
    }
    Ok(())
}

/// Everything a simulation needs besides the reference string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of page frames
    pub frame_count: usize,

    /// Replacement policy
    pub policy: Policy,

    /// Segment sets used to tag pages
    pub segments: SegmentMap,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            frame_count: 3,
            policy: Policy::Fifo,
            segments: SegmentMap::new(),
        }
    }
}

impl SimulationConfig {
    pub fn new(frame_count: usize, policy: &str) -> Result<Self> {
        let config = Self {
            frame_count,
            policy: policy.parse()?,
            segments: SegmentMap::new(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_segments(mut self, segments: SegmentMap) -> Self {
        self.segments = segments;
        self
    }

    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_frame_count(self.frame_count)
    }

    /// Run the configured simulation over `pages`
    pub fn run(&self, pages: &[Page]) -> Result<SimulationResult> {
        simulate(pages, self.frame_count, self.policy, &self.segments)
    }
}
