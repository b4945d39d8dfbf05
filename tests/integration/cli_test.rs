use anyhow::Result;
use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;

fn pagesim(args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_pagesim")).args(args).output()?)
}

/// Test that a run prints the timeline and the summary
#[test]
fn test_cli_run_prints_timeline() -> Result<()> {
    let output = pagesim(&["--frames", "3", "--policy", "FIFO", "run", "A,B,C,A,D"])?;
    assert!(output.status.success(), "CLI run failed");

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("#01"), "Timeline not found");
    assert!(stdout.contains("Replaced: A"), "Eviction not reported");
    assert!(stdout.contains("Algorithm: FIFO"), "Summary not found");
    assert!(stdout.contains("Faults:    4/5"), "Fault count not found");

    Ok(())
}

/// Test JSON output matches the web API shape
#[test]
fn test_cli_run_json() -> Result<()> {
    let output = pagesim(&["--policy", "lru", "run", "--json", "A B C A D"])?;
    assert!(output.status.success(), "CLI json run failed");

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["algorithm"], "LRU");
    assert_eq!(value["pageFaults"], 4);
    assert_eq!(value["history"].as_array().map(|h| h.len()), Some(5));

    Ok(())
}

/// Test that a saved trace replays identically
#[test]
fn test_cli_save_and_replay() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let trace = temp_dir.path().join("trace.bin");
    let trace_path = trace.to_string_lossy().to_string();

    let output = pagesim(&["--policy", "opt", "run", "--save", &trace_path, "7 0 1 2 0 3 0 4"])?;
    assert!(output.status.success(), "CLI run --save failed");
    assert!(fs::metadata(&trace)?.len() > 0, "Trace file is empty");

    let replay = pagesim(&["replay", &trace_path])?;
    assert!(replay.status.success(), "CLI replay failed");
    let stdout = String::from_utf8(replay.stdout)?;
    assert!(stdout.contains("Algorithm: Optimal"));
    assert!(stdout.contains("#08"));

    Ok(())
}

/// Test that configuration errors fail the process without a trace
#[test]
fn test_cli_rejects_bad_configuration() -> Result<()> {
    let zero = pagesim(&["--frames", "0", "run", "1 2 3"])?;
    assert!(!zero.status.success());
    assert!(String::from_utf8(zero.stderr)?.contains("frame count"));

    let policy = pagesim(&["--policy", "clock", "run", "1 2 3"])?;
    assert!(!policy.status.success());
    assert!(String::from_utf8(policy.stderr)?.contains("Unknown replacement policy"));

    let huge = pagesim(&["--frames", "4000000000000000000", "run", "1 2 3"])?;
    assert!(!huge.status.success());
    assert!(String::from_utf8(huge.stderr)?.contains("frame count"));

    let empty = pagesim(&["run", " , "])?;
    assert!(!empty.status.success());

    Ok(())
}

/// Test the policy comparison table
#[test]
fn test_cli_compare() -> Result<()> {
    let output = pagesim(&["compare", "7 0 1 2 0 3 0 4 2 3 0 3 2 1 2 0 1 7 0 1"])?;
    assert!(output.status.success(), "CLI compare failed");

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("| FIFO"));
    assert!(stdout.contains("| LRU"));
    assert!(stdout.contains("| Optimal"));
    assert!(stdout.contains("| 15 "));
    assert!(stdout.contains("| 9 "));

    Ok(())
}

/// Test running a JSON request file
#[test]
fn test_cli_request_file() -> Result<()> {
    let mut request = NamedTempFile::new()?;
    write!(request, r#"{{"pages": "1 2 1 3", "frames": 2, "algorithm": "FIFO"}}"#)?;

    let output = pagesim(&["request", &request.path().to_string_lossy()])?;
    assert!(output.status.success(), "CLI request failed");

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["framesCount"], 2);
    assert_eq!(value["pageFaults"], 3);

    Ok(())
}

/// Test the shell with input redirection
#[test]
fn test_cli_shell_interaction() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let mut child = Command::new(env!("CARGO_BIN_EXE_pagesim"))
        .current_dir(temp_dir.path())
        .args(["--segments", "stack=B", "shell", "A B A"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(b"step\nstep\ntable\nstep\nstep\nexit\n")?;
    }

    let output = child.wait_with_output()?;
    assert!(output.status.success(), "CLI shell failed");

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Step 1/3"));
    assert!(stdout.contains("Stack"));
    assert!(stdout.contains("Step 3/3"));
    assert!(stdout.contains("Goodbye!"));

    Ok(())
}

/// Test that a tampered trace file is refused instead of replayed
#[test]
fn test_cli_replay_rejects_tampered_trace() -> Result<()> {
    let mut result = pagesim::simulate(
        &[pagesim::Page::from("A"), pagesim::Page::from("B")],
        2,
        pagesim::Policy::Lru,
        &pagesim::SegmentMap::new(),
    )?;
    result.page_faults = 9;
    result.history.pop();

    let mut trace = NamedTempFile::new()?;
    trace.write_all(&result.to_bytes()?)?;

    let output = pagesim(&["replay", &trace.path().to_string_lossy()])?;
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("Invalid trace file"));

    Ok(())
}
