// Raw text parsing
//
// Reference strings accept commas and any whitespace as separators.

use serde::{Deserialize, Serialize};

use crate::common::types::Page;
use crate::input::error::{InputError, Result};
use crate::simulation::config::validate_frame_count;
use crate::simulation::error::SimulationError;
use crate::simulation::segment::{Segment, SegmentMap};

fn tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Split a delimited reference string into pages
pub fn parse_reference_string(raw: &str) -> Result<Vec<Page>> {
    let pages: Vec<Page> = tokens(raw).map(Page::from).collect();
    if pages.is_empty() {
        return Err(SimulationError::EmptyReferenceString.into());
    }
    Ok(pages)
}

/// Parse a frame count; must lie in `1..=MAX_FRAMES`
pub fn parse_frame_count(raw: &str) -> Result<usize> {
    let count = parse_count(raw)?;
    validate_frame_count(count)?;
    Ok(count)
}

fn parse_count(raw: &str) -> Result<usize> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| InputError::InvalidCount(raw.trim().to_string()))
}

/// Number of distinct pages to deal to each segment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentCounts {
    pub code: usize,
    pub data: usize,
    pub stack: usize,
    pub heap: usize,
}

impl SegmentCounts {
    pub fn total(&self) -> usize {
        self.code + self.data + self.stack + self.heap
    }

    fn get(&self, segment: Segment) -> usize {
        match segment {
            Segment::Code => self.code,
            Segment::Data => self.data,
            Segment::Stack => self.stack,
            Segment::Heap => self.heap,
            Segment::Unknown => 0,
        }
    }
}

/// Deal distinct pages, in order of first appearance, to Code, Data, Stack
/// and Heap according to `counts`. Pages left over stay untagged.
pub fn segment_map_from_counts(pages: &[Page], counts: &SegmentCounts) -> Result<SegmentMap> {
    let mut distinct: Vec<&Page> = Vec::new();
    for page in pages {
        if !distinct.contains(&page) {
            distinct.push(page);
        }
    }

    let mut map = SegmentMap::new();
    let mut remaining = distinct.into_iter();
    for segment in Segment::ASSIGNABLE {
        let share: Vec<Page> = remaining.by_ref().take(counts.get(segment)).cloned().collect();
        if !share.is_empty() {
            map.assign(segment, share)?;
        }
    }
    Ok(map)
}

/// Parse explicit segment sets, e.g. `code=1,2;stack=7 8`
pub fn parse_segment_spec(raw: &str) -> Result<SegmentMap> {
    let mut map = SegmentMap::new();
    for part in raw.split(';').map(str::trim).filter(|p| !p.is_empty()) {
        let (name, pages) = part
            .split_once('=')
            .ok_or_else(|| InputError::InvalidSegmentSpec(part.to_string()))?;
        map.assign_named(name, tokens(pages).map(Page::from))?;
    }
    Ok(map)
}

/// Parse `code=2,data=1` style counts; missing segments count zero
pub fn parse_segment_counts(raw: &str) -> Result<SegmentCounts> {
    let mut counts = SegmentCounts::default();
    for part in tokens(raw) {
        let (name, value) = part
            .split_once('=')
            .ok_or_else(|| InputError::InvalidSegmentSpec(part.to_string()))?;
        let value = parse_count(value)?;
        match name.parse::<Segment>()? {
            Segment::Code => counts.code = value,
            Segment::Data => counts.data = value,
            Segment::Stack => counts.stack = value,
            Segment::Heap => counts.heap = value,
            Segment::Unknown => return Err(InputError::InvalidSegmentSpec(part.to_string())),
        }
    }
    Ok(counts)
}
