// Replay of a finished simulation
//
// A session owns one trace and a cursor into it. It only reads stored
// steps; the engine is never run again.

use crate::simulation::trace::{SimulationResult, Step};

/// View state for stepping through one simulation result
#[derive(Debug, Clone)]
pub struct ReplaySession {
    result: SimulationResult,
    /// `None` before the first step is shown
    cursor: Option<usize>,
}

impl ReplaySession {
    pub fn new(result: SimulationResult) -> Self {
        Self { result, cursor: None }
    }

    pub fn result(&self) -> &SimulationResult {
        &self.result
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn current(&self) -> Option<&Step> {
        self.cursor.and_then(|i| self.result.history.get(i))
    }

    /// Advance one step; past the last step the cursor wraps to the first
    pub fn step(&mut self) -> Option<&Step> {
        if self.result.history.is_empty() {
            return None;
        }
        let next = match self.cursor {
            Some(i) if i + 1 < self.result.history.len() => i + 1,
            Some(_) => 0,
            None => 0,
        };
        self.cursor = Some(next);
        self.current()
    }

    /// Jump to a stored step; out-of-range indices leave the cursor alone
    pub fn seek(&mut self, index: usize) -> Option<&Step> {
        if index >= self.result.history.len() {
            return None;
        }
        self.cursor = Some(index);
        self.current()
    }

    /// Back to the state before the first step
    pub fn reset(&mut self) {
        self.cursor = None;
    }

    /// `(shown, total)`, e.g. `(0, 5)` before the first step
    pub fn position(&self) -> (usize, usize) {
        let shown = self.current().map(|s| s.step).unwrap_or(0);
        (shown, self.result.history.len())
    }

    pub fn progress(&self) -> String {
        let (shown, total) = self.position();
        format!("{}/{}", shown, total)
    }

    pub fn into_result(self) -> SimulationResult {
        self.result
    }
}
