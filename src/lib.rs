// Page replacement simulator
//
// Plays a page reference string against a fixed number of frames under
// FIFO, LRU or Optimal replacement and records a replayable trace.

pub mod common;
pub mod input;
pub mod render;
pub mod replay;
pub mod simulation;

// Re-export key items for convenient access
pub use common::types::{FrameId, Page};
pub use input::{InputError, SimulationRequest};
pub use replay::ReplaySession;
pub use simulation::{
    simulate, AccessStatus, Frame, FrameStatus, Policy, Segment, SegmentMap, SimulationConfig,
    SimulationError, SimulationResult, Step,
};
