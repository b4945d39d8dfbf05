use serde::{Deserialize, Serialize};

use crate::common::types::Page;
use crate::input::error::Result;
use crate::input::parse::{
    parse_frame_count, parse_reference_string, segment_map_from_counts, SegmentCounts,
};
use crate::simulation::config::SimulationConfig;

fn default_frames() -> i64 {
    3
}

fn default_algorithm() -> String {
    "FIFO".to_string()
}

/// Simulation request as posted by the web form:
/// `{"pages": "7 0 1 2", "frames": 3, "algorithm": "LRU"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    #[serde(default)]
    pub pages: String,

    #[serde(default = "default_frames")]
    pub frames: i64,

    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    #[serde(default)]
    pub segments: Option<SegmentCounts>,
}

impl SimulationRequest {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the request and split it into engine arguments
    pub fn prepare(&self) -> Result<(Vec<Page>, SimulationConfig)> {
        let pages = parse_reference_string(&self.pages)?;

        let frame_count = parse_frame_count(&self.frames.to_string())?;

        let mut config = SimulationConfig::new(frame_count, &self.algorithm)?;
        if let Some(counts) = &self.segments {
            config = config.with_segments(segment_map_from_counts(&pages, counts)?);
        }

        Ok((pages, config))
    }
}
