pub mod error;
pub mod parse;
pub mod request;

pub use error::InputError;
pub use parse::{
    parse_frame_count, parse_reference_string, parse_segment_counts, parse_segment_spec,
    segment_map_from_counts, SegmentCounts,
};
pub use request::SimulationRequest;
