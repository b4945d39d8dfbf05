// Text presentation of simulation traces
//
// Everything here renders to a String so the CLI and tests can share it.

use linked_hash_map::LinkedHashMap;

use crate::common::types::{FrameId, Page};
use crate::simulation::frame::FrameStatus;
use crate::simulation::segment::Segment;
use crate::simulation::trace::{SimulationResult, Step};

const EMPTY_CELL: &str = "-";

/// Render rows under headers as a bordered table. Columns are at least three
/// characters wide.
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len().max(3)).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut separator = String::from("+");
    for &width in &widths {
        separator.push_str(&"-".repeat(width + 2));
        separator.push('+');
    }

    let line = |cells: &[String]| {
        let mut out = String::from("|");
        for (i, &width) in widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            out.push_str(&format!(" {:<width$} |", cell, width = width));
        }
        out.push('\n');
        out
    };

    let mut out = format!("{}\n{}{}\n", separator, line(headers), separator);
    for row in rows {
        out.push_str(&line(row));
    }
    out.push_str(&separator);
    out.push('\n');
    out
}

fn page_or_empty(page: Option<&Page>) -> String {
    page.map(Page::to_string).unwrap_or_else(|| EMPTY_CELL.to_string())
}

/// Frame grid for one step. `None` renders the initial all-empty memory.
pub fn render_frames(step: Option<&Step>, frame_count: usize) -> String {
    let headers: Vec<String> = (0..frame_count).map(|i| format!("Frame {}", i)).collect();

    let mut occupants = Vec::with_capacity(frame_count);
    let mut statuses = Vec::with_capacity(frame_count);
    let mut segments = Vec::with_capacity(frame_count);

    for i in 0..frame_count {
        let frame = step.and_then(|s| s.frames.get(i));
        occupants.push(page_or_empty(frame.and_then(|f| f.occupant.as_ref())));
        statuses.push(frame.map(|f| f.status).unwrap_or(FrameStatus::Idle).to_string());
        segments.push(
            frame
                .and_then(|f| f.segment)
                .map(|s| s.to_string())
                .unwrap_or_else(|| EMPTY_CELL.to_string()),
        );
    }

    render_table(&headers, &[occupants, statuses, segments])
}

/// One line per step, the active step marked with `>`
pub fn render_timeline(history: &[Step], active: Option<usize>) -> String {
    let mut out = String::new();
    for (i, step) in history.iter().enumerate() {
        let marker = if active == Some(i) { '>' } else { ' ' };
        let frames: Vec<String> = step.occupants().into_iter().map(page_or_empty).collect();
        let flag = if step.is_hit() { "✔" } else { "✱" };

        out.push_str(&format!(
            "{} #{:02}  Page {:<4} Frames: [{}]  {}",
            marker,
            step.step,
            step.page,
            frames.join(", "),
            step.status
        ));
        if let Some(replaced) = &step.replaced {
            out.push_str(&format!("  Replaced: {}", replaced));
        }
        out.push_str(&format!("  {}\n", flag));
    }
    out
}

/// Resident pages of a step with their frame and segment, in frame order
pub fn page_locations(step: &Step) -> LinkedHashMap<Page, (FrameId, Segment)> {
    let mut locations = LinkedHashMap::new();
    for (frame_id, frame) in step.frames.iter().enumerate() {
        if let Some(page) = &frame.occupant {
            locations.insert(page.clone(), (frame_id, frame.segment.unwrap_or(Segment::Unknown)));
        }
    }
    locations
}

pub fn render_page_table(step: &Step) -> String {
    let headers = vec!["Page".to_string(), "Frame".to_string(), "Segment".to_string()];
    let rows: Vec<Vec<String>> = page_locations(step)
        .iter()
        .map(|(page, (frame_id, segment))| {
            vec![page.to_string(), frame_id.to_string(), segment.to_string()]
        })
        .collect();
    render_table(&headers, &rows)
}

pub fn render_summary(result: &SimulationResult) -> String {
    format!(
        "Algorithm: {}\nFrames:    {}\nFaults:    {}/{} ({:.1}%)\nHits:      {} ({:.1}%)\n",
        result.policy,
        result.frame_count,
        result.page_faults,
        result.len(),
        result.fault_rate() * 100.0,
        result.hits(),
        result.hit_rate() * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{simulate, Policy, SegmentMap};

    fn result() -> SimulationResult {
        let pages: Vec<Page> = ["A", "B", "C", "A", "D"].into_iter().map(Page::from).collect();
        let segments = SegmentMap::new().with(Segment::Stack, ["C"]).unwrap();
        simulate(&pages, 3, Policy::Fifo, &segments).unwrap()
    }

    #[test]
    fn test_table_layout() {
        let out = render_table(
            &["Page".to_string(), "Frame".to_string()],
            &[vec!["A".to_string(), "0".to_string()]],
        );
        let expected = "+------+-------+\n| Page | Frame |\n+------+-------+\n| A    | 0     |\n+------+-------+\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_initial_frames_render_empty_and_idle() {
        let out = render_frames(None, 2);
        assert!(out.contains("Frame 0"));
        assert!(out.contains("Frame 1"));
        assert!(out.contains("Idle"));
        assert!(!out.contains("Fault"));
    }

    #[test]
    fn test_frames_show_occupants_and_status() {
        let result = result();
        let out = render_frames(result.history.last(), result.frame_count);
        assert!(out.contains("| D "));
        assert!(out.contains("Fault"));
        assert!(out.contains("Stack"));
    }

    #[test]
    fn test_timeline_marks_active_step_and_replacements() {
        let result = result();
        let out = render_timeline(&result.history, Some(4));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("  #01"));
        assert!(lines[3].contains("Hit"));
        assert!(lines[4].starts_with("> #05"));
        assert!(lines[4].contains("Replaced: A"));
    }

    #[test]
    fn test_page_table_in_frame_order() {
        let result = result();
        let locations = page_locations(&result.history[4]);
        let order: Vec<&str> = locations.keys().map(Page::as_str).collect();
        assert_eq!(order, vec!["D", "B", "C"]);
        assert_eq!(locations[&Page::from("C")], (2, Segment::Stack));
        assert!(render_page_table(&result.history[4]).contains("Stack"));
    }

    #[test]
    fn test_summary() {
        let out = render_summary(&result());
        assert!(out.contains("Algorithm: FIFO"));
        assert!(out.contains("Faults:    4/5 (80.0%)"));
    }
}
