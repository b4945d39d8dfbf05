use thiserror::Error;

use crate::simulation::config::{Policy, MAX_FRAMES};

/// Configuration errors reported before any step is simulated
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Invalid frame count {0}: expected 1 to {max} frames", max = MAX_FRAMES)]
    InvalidFrameCount(usize),
    #[error("Reference string is empty")]
    EmptyReferenceString,
    #[error("Unknown replacement policy: {0}")]
    UnknownPolicy(String),
    #[error("Unknown memory segment: {0}")]
    UnknownSegment(String),
    #[error("Replacement policy {0} found no victim among {1} frames")]
    NoVictim(Policy, usize),
    #[error("Corrupt trace: {0}")]
    CorruptTrace(String),
    #[error("Trace encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, SimulationError>;
