use std::collections::HashMap;
use crate::common::types::{FrameId, Page};
use crate::simulation::frame::Frame;
use super::Replacer;

/// Belady's optimal replacement: evict the page whose next use lies
/// farthest ahead, or that is never used again.
///
/// Needs the complete reference string up front.
pub struct OptimalReplacer {
    occurrences: HashMap<Page, Vec<usize>>,
}

impl OptimalReplacer {
    pub fn new(references: &[Page]) -> Self {
        let mut occurrences: HashMap<Page, Vec<usize>> = HashMap::new();
        for (position, page) in references.iter().enumerate() {
            occurrences.entry(page.clone()).or_default().push(position);
        }
        Self { occurrences }
    }

    /// Position of the first reference to `page` strictly after `position`
    pub fn next_use(&self, page: &Page, position: usize) -> Option<usize> {
        let positions = self.occurrences.get(page)?;
        let idx = positions.partition_point(|&p| p <= position);
        positions.get(idx).copied()
    }
}

impl Replacer for OptimalReplacer {
    /// Farthest next use wins (never used again counts as infinitely far);
    /// ties go to the lowest frame index
    fn victim(&mut self, frames: &[Frame], position: usize) -> Option<FrameId> {
        let mut victim: Option<(FrameId, usize)> = None;

        for (frame_id, frame) in frames.iter().enumerate() {
            let Some(page) = &frame.occupant else { continue };
            let distance = self.next_use(page, position).unwrap_or(usize::MAX);
            match victim {
                Some((_, farthest)) if distance <= farthest => {}
                _ => victim = Some((frame_id, distance)),
            }
        }

        victim.map(|(frame_id, _)| frame_id)
    }
}
