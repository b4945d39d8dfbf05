// Simulation engine
//
// Plays a reference string against a fresh set of frames. Frames are filled
// lowest index first; only when none is empty does the policy's replacer
// pick a victim.

use std::collections::{HashMap, VecDeque};
use log::{debug, info, trace};

use crate::common::types::{FrameId, Page};
use crate::simulation::config::{validate_frame_count, Policy};
use crate::simulation::error::{Result, SimulationError};
use crate::simulation::frame::{AccessStatus, Frame, FrameStatus};
use crate::simulation::replacer::{self, Replacer};
use crate::simulation::segment::{SegmentMap, SegmentResolver};
use crate::simulation::trace::{SimulationResult, Step};

/// Simulate `pages` against `frame_count` frames under `policy`.
///
/// Fails before producing any step if the frame count is outside
/// `1..=MAX_FRAMES` or the reference string is empty.
pub fn simulate(
    pages: &[Page],
    frame_count: usize,
    policy: Policy,
    segments: &SegmentMap,
) -> Result<SimulationResult> {
    validate_frame_count(frame_count)?;
    if pages.is_empty() {
        return Err(SimulationError::EmptyReferenceString);
    }

    SimulationEngine::new(pages, frame_count, policy, segments).run()
}

/// Live state of one simulation call. Never leaves this module: callers only
/// see the sealed `Step` snapshots.
struct SimulationEngine<'a> {
    pages: &'a [Page],
    policy: Policy,
    frames: Vec<Frame>,
    page_table: HashMap<Page, FrameId>,
    free_list: VecDeque<FrameId>,
    replacer: Box<dyn Replacer>,
    segments: SegmentResolver<'a>,
}

impl<'a> SimulationEngine<'a> {
    fn new(pages: &'a [Page], frame_count: usize, policy: Policy, segments: &'a SegmentMap) -> Self {
        Self {
            pages,
            policy,
            frames: vec![Frame::empty(); frame_count],
            page_table: HashMap::with_capacity(frame_count),
            free_list: (0..frame_count).collect(),
            replacer: replacer::for_policy(policy, frame_count, pages),
            segments: SegmentResolver::new(segments),
        }
    }

    fn run(mut self) -> Result<SimulationResult> {
        let mut history = Vec::with_capacity(self.pages.len());
        let mut page_faults = 0;

        for (position, page) in self.pages.iter().enumerate() {
            let step = self.access(position, page)?;
            if step.is_fault() {
                page_faults += 1;
            }
            history.push(step);
        }

        info!(
            "{} simulation over {} references with {} frames: {} faults",
            self.policy,
            history.len(),
            self.frames.len(),
            page_faults
        );

        Ok(SimulationResult {
            frame_count: self.frames.len(),
            policy: self.policy,
            page_faults,
            history,
        })
    }

    /// Apply one reference and seal its step
    fn access(&mut self, position: usize, page: &Page) -> Result<Step> {
        for frame in &mut self.frames {
            frame.status = FrameStatus::Idle;
        }

        let segment = self.segments.resolve(page);

        let resident = self.page_table.get(page).copied();
        let (frame_id, status, replaced) = match resident {
            Some(frame_id) => {
                self.frames[frame_id].status = FrameStatus::Hit;
                trace!("step {}: hit on page {} in frame {}", position + 1, page, frame_id);
                (frame_id, AccessStatus::Hit, None)
            }
            None => {
                let frame_id = self.allocate_frame(position)?;
                let replaced = self.frames[frame_id].load(page.clone(), segment);
                if let Some(evicted) = &replaced {
                    self.page_table.remove(evicted);
                    self.replacer.remove(evicted);
                    debug!(
                        "step {}: fault on page {}, evicted {} from frame {}",
                        position + 1,
                        page,
                        evicted,
                        frame_id
                    );
                } else {
                    debug!("step {}: fault on page {}, filled frame {}", position + 1, page, frame_id);
                }
                self.page_table.insert(page.clone(), frame_id);
                self.replacer.record_insert(frame_id, page, position);
                (frame_id, AccessStatus::Fault, replaced)
            }
        };

        let step = Step {
            step: position + 1,
            page: page.clone(),
            segment,
            frame: frame_id,
            frames: self.frames.clone(),
            status,
            replaced,
        };

        self.replacer.record_access(page, position);

        Ok(step)
    }

    /// Lowest empty frame first, otherwise the policy's victim
    fn allocate_frame(&mut self, position: usize) -> Result<FrameId> {
        if let Some(frame_id) = self.free_list.pop_front() {
            return Ok(frame_id);
        }

        match self.replacer.victim(&self.frames, position) {
            Some(frame_id) => Ok(frame_id),
            None => Err(SimulationError::NoVictim(self.policy, self.frames.len())),
        }
    }
}
