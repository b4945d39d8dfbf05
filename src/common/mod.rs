pub mod types;

pub use types::{FrameId, Page, StepNumber};
