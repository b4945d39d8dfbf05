pub mod config;
pub mod engine;
pub mod error;
pub mod frame;
pub mod replacer;
pub mod segment;
pub mod trace;

pub use config::{validate_frame_count, Policy, SimulationConfig, MAX_FRAMES};
pub use engine::simulate;
pub use error::SimulationError;
pub use frame::{AccessStatus, Frame, FrameStatus};
pub use segment::{Segment, SegmentMap};
pub use trace::{SimulationResult, Step};
