use std::collections::HashMap;
use crate::common::types::{FrameId, Page};
use crate::simulation::frame::Frame;
use super::Replacer;

/// Least Recently Used replacement keyed on the last reference position
/// of each resident page
pub struct LruReplacer {
    last_used: HashMap<Page, usize>,
}

impl LruReplacer {
    pub fn new(frame_count: usize) -> Self {
        Self {
            last_used: HashMap::with_capacity(frame_count),
        }
    }

    pub fn last_used(&self, page: &Page) -> Option<usize> {
        self.last_used.get(page).copied()
    }
}

impl Replacer for LruReplacer {
    fn record_access(&mut self, page: &Page, position: usize) {
        self.last_used.insert(page.clone(), position);
    }

    fn remove(&mut self, page: &Page) {
        self.last_used.remove(page);
    }

    /// Smallest last-use position wins; ties go to the lowest frame index
    fn victim(&mut self, frames: &[Frame], _position: usize) -> Option<FrameId> {
        let mut victim: Option<(FrameId, Option<usize>)> = None;

        for (frame_id, frame) in frames.iter().enumerate() {
            let Some(page) = &frame.occupant else { continue };
            let last = self.last_used(page);
            match victim {
                Some((_, best)) if last >= best => {}
                _ => victim = Some((frame_id, last)),
            }
        }

        victim.map(|(frame_id, _)| frame_id)
    }
}
