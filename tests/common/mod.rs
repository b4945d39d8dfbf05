#![allow(dead_code)]

use rand::prelude::*;
use pagesim::{Page, SimulationResult};

// Build a reference string from space-separated ids
pub fn pages(ids: &str) -> Vec<Page> {
    ids.split_whitespace().map(Page::from).collect()
}

// Random reference string over `distinct` page ids
pub fn random_pages(rng: &mut StdRng, len: usize, distinct: u32) -> Vec<Page> {
    (0..len).map(|_| Page::from(rng.gen_range(0..distinct))).collect()
}

// Occupants of a step's frames, "-" for empty ones
pub fn occupants(result: &SimulationResult, index: usize) -> Vec<String> {
    result.history[index]
        .frames
        .iter()
        .map(|f| f.occupant.as_ref().map(|p| p.to_string()).unwrap_or_else(|| "-".to_string()))
        .collect()
}

pub fn replaced(result: &SimulationResult) -> Vec<Option<String>> {
    result
        .history
        .iter()
        .map(|s| s.replaced.as_ref().map(|p| p.to_string()))
        .collect()
}
