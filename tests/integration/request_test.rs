use anyhow::Result;

use pagesim::input::SegmentCounts;
use pagesim::{InputError, Policy, Segment, SimulationError, SimulationRequest};

#[test]
fn test_request_defaults() -> Result<()> {
    let request = SimulationRequest::from_json(r#"{"pages": "1, 2, 3"}"#)?;
    assert_eq!(request.frames, 3);
    assert_eq!(request.algorithm, "FIFO");

    let (pages, config) = request.prepare()?;
    assert_eq!(pages.len(), 3);
    assert_eq!(config.policy, Policy::Fifo);
    assert!(config.segments.is_empty());

    Ok(())
}

#[test]
fn test_request_runs_end_to_end() -> Result<()> {
    let request = SimulationRequest::from_json(
        r#"{"pages": "7 0 1 2 0 3", "frames": 3, "algorithm": "LRU", "segments": {"code": 1, "stack": 1}}"#,
    )?;
    let (pages, config) = request.prepare()?;
    let result = config.run(&pages)?;

    assert_eq!(result.policy, Policy::Lru);
    assert_eq!(result.page_faults, 5);
    assert_eq!(result.history[0].segment, Segment::Code);
    assert_eq!(result.history[1].segment, Segment::Stack);
    assert_eq!(result.history[2].segment, Segment::Unknown);

    Ok(())
}

#[test]
fn test_request_validation() -> Result<()> {
    let empty = SimulationRequest::from_json(r#"{"pages": "  "}"#)?;
    assert!(matches!(
        empty.prepare(),
        Err(InputError::Simulation(SimulationError::EmptyReferenceString))
    ));

    let zero = SimulationRequest::from_json(r#"{"pages": "1", "frames": 0}"#)?;
    assert!(matches!(
        zero.prepare(),
        Err(InputError::Simulation(SimulationError::InvalidFrameCount(0)))
    ));

    let huge = SimulationRequest::from_json(r#"{"pages": "1 2", "frames": 4000000000000000000}"#)?;
    assert!(matches!(
        huge.prepare(),
        Err(InputError::Simulation(SimulationError::InvalidFrameCount(_)))
    ));

    let negative = SimulationRequest::from_json(r#"{"pages": "1", "frames": -1}"#)?;
    assert!(matches!(negative.prepare(), Err(InputError::InvalidCount(_))));

    let policy = SimulationRequest::from_json(r#"{"pages": "1", "algorithm": "CLOCK"}"#)?;
    assert!(matches!(
        policy.prepare(),
        Err(InputError::Simulation(SimulationError::UnknownPolicy(_)))
    ));

    assert!(matches!(SimulationRequest::from_json("{"), Err(InputError::Json(_))));

    Ok(())
}

#[test]
fn test_segment_counts_default_to_zero() -> Result<()> {
    let counts: SegmentCounts = serde_json::from_str(r#"{"heap": 2}"#)?;
    assert_eq!(counts, SegmentCounts { code: 0, data: 0, stack: 0, heap: 2 });
    Ok(())
}
