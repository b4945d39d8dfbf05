use thiserror::Error;
use crate::simulation::error::SimulationError;

/// Errors turning raw user input into simulation arguments
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Invalid count: {0}")]
    InvalidCount(String),
    #[error("Invalid segment specification: {0}")]
    InvalidSegmentSpec(String),
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    #[error("Malformed request: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for input operations
pub type Result<T> = std::result::Result<T, InputError>;
