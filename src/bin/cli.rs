use std::fs;
use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tracing_subscriber::EnvFilter;

use pagesim::input::{
    parse_frame_count, parse_reference_string, parse_segment_counts, parse_segment_spec, segment_map_from_counts,
};
use pagesim::render::{render_frames, render_page_table, render_summary, render_table, render_timeline};
use pagesim::{Page, Policy, ReplaySession, SegmentMap, SimulationConfig, SimulationRequest, SimulationResult};

const HISTORY_FILE: &str = ".pagesim_history";

#[derive(Parser)]
#[command(author, version, about = "pagesim - step through FIFO, LRU and Optimal page replacement")]
struct Cli {
    /// Number of page frames
    #[arg(short, long, default_value_t = 3, value_parser = parse_frame_count)]
    frames: usize,

    /// Replacement policy: FIFO, LRU or OPT
    #[arg(short, long, default_value = "FIFO")]
    policy: String,

    /// Explicit segment sets, e.g. "code=1,2;stack=7"
    #[arg(long, conflicts_with = "segment_counts")]
    segments: Option<String>,

    /// Distinct pages dealt to each segment in order, e.g. "code=2,data=1"
    #[arg(long = "segment-counts")]
    segment_counts: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a reference string and print the trace
    Run {
        /// Pages separated by spaces or commas
        pages: String,

        /// Print the trace as JSON
        #[arg(long)]
        json: bool,

        /// Save the trace to a file for later replay
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Run a JSON request ({"pages", "frames", "algorithm"}) and print JSON
    Request {
        /// Request file
        file: PathBuf,
    },

    /// Compare fault counts of every policy
    Compare {
        /// Pages separated by spaces or commas
        pages: String,
    },

    /// Print a saved trace without simulating again
    Replay {
        /// Trace file written by `run --save`
        file: PathBuf,

        /// Step through the trace interactively
        #[arg(long)]
        shell: bool,
    },

    /// Simulate, then step through the trace interactively
    Shell {
        /// Pages separated by spaces or commas
        pages: String,
    },
}

impl Cli {
    fn config(&self, pages: &[Page]) -> Result<SimulationConfig> {
        let segments = if let Some(spec) = &self.segments {
            parse_segment_spec(spec)?
        } else if let Some(counts) = &self.segment_counts {
            segment_map_from_counts(pages, &parse_segment_counts(counts)?)?
        } else {
            SegmentMap::new()
        };

        Ok(SimulationConfig::new(self.frames, &self.policy)?.with_segments(segments))
    }

    fn simulate(&self, raw_pages: &str) -> Result<SimulationResult> {
        let pages = parse_reference_string(raw_pages)?;
        let config = self.config(&pages)?;
        let result = config.run(&pages).context("Simulation failed")?;
        Ok(result)
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn display_result(result: &SimulationResult) {
    print!("{}", render_timeline(&result.history, None));
    println!();
    print!("{}", render_summary(result));
}

fn display_step(session: &ReplaySession) {
    let frame_count = session.result().frame_count;
    match session.current() {
        Some(step) => {
            print!("{}", render_frames(Some(step), frame_count));
            match &step.replaced {
                Some(replaced) => println!("Page {}: {} (replaced {})", step.page, step.status, replaced),
                None => println!("Page {}: {}", step.page, step.status),
            }
        }
        None => print!("{}", render_frames(None, frame_count)),
    }
    println!("Step {}", session.progress());
}

fn compare_policies(cli: &Cli, raw_pages: &str) -> Result<()> {
    let pages = parse_reference_string(raw_pages)?;
    let base = cli.config(&pages)?;

    let headers = vec![
        "Policy".to_string(),
        "Faults".to_string(),
        "Hits".to_string(),
        "Fault rate".to_string(),
    ];
    let mut rows = Vec::new();
    for policy in Policy::ALL {
        let result = base.clone().with_policy(policy).run(&pages)?;
        rows.push(vec![
            policy.to_string(),
            result.page_faults.to_string(),
            result.hits().to_string(),
            format!("{:.1}%", result.fault_rate() * 100.0),
        ]);
    }

    println!("{} references, {} frames", pages.len(), base.frame_count);
    print!("{}", render_table(&headers, &rows));
    Ok(())
}

fn run_shell(session: &mut ReplaySession) -> Result<()> {
    println!(
        "{} simulation loaded ({} steps). Type 'help' for assistance or 'exit' to quit.",
        session.result().policy,
        session.result().len()
    );

    let mut rl = Editor::<(), DefaultHistory>::new()?;
    if let Err(err) = rl.load_history(HISTORY_FILE) {
        if !err.to_string().contains("No such file or directory") {
            println!("Error loading history: {}", err);
        }
    }

    loop {
        match rl.readline("pagesim> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);

                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                match line.to_lowercase().as_str() {
                    "exit" | "quit" => {
                        println!("Goodbye!");
                        break;
                    }
                    "help" => print_help(),
                    "step" | "s" | "next" | "n" => {
                        session.step();
                        display_step(session);
                    }
                    "reset" => {
                        session.reset();
                        display_step(session);
                    }
                    "show" => display_step(session),
                    "timeline" => print!("{}", render_timeline(&session.result().history, session.cursor())),
                    "table" => match session.current() {
                        Some(step) => print!("{}", render_page_table(step)),
                        None => println!("No step shown yet. Use 'step' first."),
                    },
                    "summary" => print!("{}", render_summary(session.result())),
                    other => {
                        if let Some(target) = other.strip_prefix("goto ") {
                            match target.trim().parse::<usize>() {
                                Ok(n) if n >= 1 && session.seek(n - 1).is_some() => display_step(session),
                                _ => println!("No such step: {}", target.trim()),
                            }
                        } else {
                            println!("Unknown command: {}. Type 'help' for assistance.", other);
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {}", err);
                break;
            }
        }
    }

    if let Err(err) = rl.save_history(HISTORY_FILE) {
        println!("Error saving history: {}", err);
    }
    Ok(())
}

fn print_help() {
    println!("Available commands:");
    println!("  step | s        - Show the next step (wraps to the first after the last)");
    println!("  goto <n>        - Show step n");
    println!("  reset           - Go back before the first step");
    println!("  show            - Show the current frames again");
    println!("  timeline        - Show every step, current one marked with >");
    println!("  table           - Show which frame holds each resident page");
    println!("  summary         - Show fault and hit counts");
    println!("  help            - Display this help message");
    println!("  exit            - Exit the shell");
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Run { pages, json, save } => {
            let result = cli.simulate(pages)?;
            if *json {
                println!("{}", result.to_json()?);
            } else {
                display_result(&result);
            }
            if let Some(path) = save {
                fs::write(path, result.to_bytes()?)
                    .with_context(|| format!("Failed to save trace to {}", path.display()))?;
                if !*json {
                    println!("Trace saved to {}", path.display());
                }
            }
        }
        Commands::Request { file } => {
            let body = fs::read_to_string(file)
                .with_context(|| format!("Failed to read request {}", file.display()))?;
            let (pages, config) = SimulationRequest::from_json(&body)?.prepare()?;
            let result = config.run(&pages)?;
            println!("{}", result.to_json()?);
        }
        Commands::Compare { pages } => {
            compare_policies(&cli, pages)?;
        }
        Commands::Replay { file, shell } => {
            let bytes = fs::read(file)
                .with_context(|| format!("Failed to read trace {}", file.display()))?;
            let result = SimulationResult::from_bytes(&bytes).context("Invalid trace file")?;
            if *shell {
                run_shell(&mut ReplaySession::new(result))?;
            } else {
                display_result(&result);
            }
        }
        Commands::Shell { pages } => {
            let result = cli.simulate(pages)?;
            run_shell(&mut ReplaySession::new(result))?;
        }
    }

    Ok(())
}
