// Victim selection policies
//
// The engine owns the frames and the empty-frame list; a replacer is only
// consulted once every frame is occupied.

mod fifo;
mod lru;
mod optimal;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;

use crate::common::types::{FrameId, Page};
use crate::simulation::config::Policy;
use crate::simulation::frame::Frame;

/// Bookkeeping and victim choice for one replacement policy
pub trait Replacer {
    /// A page was loaded into `frame_id` while processing reference `position`
    fn record_insert(&mut self, _frame_id: FrameId, _page: &Page, _position: usize) {}

    /// `page` was referenced at `position` (hit or fault), after the frame
    /// decision for that reference is final
    fn record_access(&mut self, _page: &Page, _position: usize) {}

    /// `page` left memory
    fn remove(&mut self, _page: &Page) {}

    /// Choose the frame to evict. Called only when every frame is occupied.
    fn victim(&mut self, frames: &[Frame], position: usize) -> Option<FrameId>;
}

/// Build the replacer for `policy`. Optimal needs the whole reference string.
pub fn for_policy(policy: Policy, frame_count: usize, references: &[Page]) -> Box<dyn Replacer> {
    match policy {
        Policy::Fifo => Box::new(FifoReplacer::new(frame_count)),
        Policy::Lru => Box::new(LruReplacer::new(frame_count)),
        Policy::Optimal => Box::new(OptimalReplacer::new(references)),
    }
}
