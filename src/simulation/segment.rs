// Memory segment tagging
//
// Segments are display metadata only; they never influence victim selection.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::common::types::Page;
use crate::simulation::error::SimulationError;

/// Logical memory region a page belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Segment {
    Code,
    Data,
    Stack,
    Heap,
    Unknown,
}

impl Segment {
    /// Segments a caller can assign pages to, in resolution order
    pub const ASSIGNABLE: [Segment; 4] = [Segment::Code, Segment::Data, Segment::Stack, Segment::Heap];

    pub fn name(&self) -> &'static str {
        match self {
            Segment::Code => "Code",
            Segment::Data => "Data",
            Segment::Stack => "Stack",
            Segment::Heap => "Heap",
            Segment::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Segment {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "code" => Ok(Segment::Code),
            "data" => Ok(Segment::Data),
            "stack" => Ok(Segment::Stack),
            "heap" => Ok(Segment::Heap),
            _ => Err(SimulationError::UnknownSegment(s.trim().to_string())),
        }
    }
}

/// Caller-supplied mapping of segment -> ordered set of pages.
///
/// Sets are expected to be disjoint. When they are not, a page resolves to the
/// first segment containing it in `Segment::ASSIGNABLE` order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentMap {
    sets: HashMap<Segment, Vec<Page>>,
}

impl SegmentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add pages to a segment's set, keeping first-insertion order and
    /// skipping duplicates. Pages cannot be assigned to `Unknown`.
    pub fn assign<I, P>(&mut self, segment: Segment, pages: I) -> Result<(), SimulationError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Page>,
    {
        if segment == Segment::Unknown {
            return Err(SimulationError::UnknownSegment(segment.to_string()));
        }
        let set = self.sets.entry(segment).or_default();
        for page in pages {
            let page = page.into();
            if !set.contains(&page) {
                set.push(page);
            }
        }
        Ok(())
    }

    /// Same as `assign`, with the segment given by name
    pub fn assign_named<I, P>(&mut self, name: &str, pages: I) -> Result<(), SimulationError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Page>,
    {
        let segment = name.parse::<Segment>()?;
        self.assign(segment, pages)
    }

    pub fn with<I, P>(mut self, segment: Segment, pages: I) -> Result<Self, SimulationError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Page>,
    {
        self.assign(segment, pages)?;
        Ok(self)
    }

    pub fn pages(&self, segment: Segment) -> &[Page] {
        self.sets.get(&segment).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.sets.values().all(Vec::is_empty)
    }

    /// Resolve a page to its segment (first match wins, `Unknown` otherwise)
    pub fn resolve(&self, page: &Page) -> Segment {
        Segment::ASSIGNABLE
            .iter()
            .copied()
            .find(|segment| self.pages(*segment).contains(page))
            .unwrap_or(Segment::Unknown)
    }
}

/// Per-simulation memo of resolved segments, so a page keeps one segment
/// for the whole run
#[derive(Debug)]
pub(crate) struct SegmentResolver<'a> {
    map: &'a SegmentMap,
    resolved: HashMap<Page, Segment>,
}

impl<'a> SegmentResolver<'a> {
    pub(crate) fn new(map: &'a SegmentMap) -> Self {
        Self {
            map,
            resolved: HashMap::new(),
        }
    }

    pub(crate) fn resolve(&mut self, page: &Page) -> Segment {
        if let Some(&segment) = self.resolved.get(page) {
            return segment;
        }
        let segment = self.map.resolve(page);
        self.resolved.insert(page.clone(), segment);
        segment
    }
}
