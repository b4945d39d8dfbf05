use crate::common::types::{FrameId, Page};
use crate::simulation::frame::Frame;
use super::Replacer;

/// First-in-first-out replacement over a circular insertion pointer.
///
/// The pointer moves on every load and never on hits, so it always names the
/// frame holding the oldest loaded page.
pub struct FifoReplacer {
    pointer: FrameId,
    frame_count: usize,
}

impl FifoReplacer {
    pub fn new(frame_count: usize) -> Self {
        Self {
            pointer: 0,
            frame_count,
        }
    }

    pub fn pointer(&self) -> FrameId {
        self.pointer
    }
}

impl Replacer for FifoReplacer {
    fn record_insert(&mut self, _frame_id: FrameId, _page: &Page, _position: usize) {
        self.pointer = (self.pointer + 1) % self.frame_count;
    }

    fn victim(&mut self, frames: &[Frame], _position: usize) -> Option<FrameId> {
        if self.pointer < frames.len() {
            Some(self.pointer)
        } else {
            None
        }
    }
}
