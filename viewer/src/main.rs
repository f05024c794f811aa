//! Main entry point for the viewer binary
//!
//! Wires the CLI to the engine: builds a sequence, starts a run and
//! hands the event stream to the chosen frontend.

use std::path::PathBuf;

use clap::Parser;
use tokio::signal;
use tracing::{error, info};

use engine::pacing::delay_for_percent;
use engine::{EngineConfig, RunEvent, SortAlgorithm, SortEngine, ValueRange};
use viewer::{
    drive_run, drive_run_interactive, logging, Frontend, JsonRenderer, TerminalRenderer,
    TraceRecorder, ViewerError, ViewerResult,
};

/// Animated terminal viewer for classic sorting algorithms
#[derive(Parser)]
#[command(name = "viewer")]
#[command(about = "Watch sorting algorithms rearrange a bar chart in your terminal")]
pub struct Args {
    /// Algorithm to animate (see --list for the catalog)
    #[arg(long, default_value = "bubble")]
    pub algorithm: String,

    /// Number of values to sort
    #[arg(long, default_value = "40")]
    pub size: usize,

    /// Animation speed in percent (0 = slowest, 100 = fastest)
    #[arg(long, default_value = "55")]
    pub speed: u8,

    /// Seed for a reproducible sequence
    #[arg(long)]
    pub seed: Option<u64>,

    /// Smallest generated value
    #[arg(long, default_value = "20")]
    pub min: u32,

    /// Largest generated value
    #[arg(long, default_value = "319")]
    pub max: u32,

    /// Emit events as JSON lines on stdout instead of drawing bars
    #[arg(long)]
    pub headless: bool,

    /// Also write the event trace as JSON lines to this file
    #[arg(long)]
    pub record: Option<PathBuf>,

    /// Print the algorithm catalog and exit
    #[arg(long)]
    pub list: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

#[tokio::main]
async fn main() -> ViewerResult<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Interactive mode owns the screen, so logging defaults to quiet there
    let log_level = args
        .log_level
        .clone()
        .unwrap_or_else(|| if args.headless { "info" } else { "warn" }.to_string());
    logging::init_tracing(&log_level);

    if args.list {
        print_catalog();
        return Ok(());
    }

    let algorithm = SortAlgorithm::parse(&args.algorithm).ok_or_else(|| {
        ViewerError::config(format!(
            "unknown algorithm '{}', see --list for the catalog",
            args.algorithm
        ))
    })?;

    // Build the engine with the requested pacing and value range
    let config = EngineConfig {
        default_delay: delay_for_percent(args.speed),
        value_range: ValueRange::new(args.min, args.max),
        ..EngineConfig::default()
    };
    let engine = SortEngine::with_config(config);
    let values = match args.seed {
        Some(seed) => engine.generate_seeded(args.size, seed).await?,
        None => engine.generate(args.size).await?,
    };

    let mut recorder = match &args.record {
        Some(path) => Some(TraceRecorder::create(path, &values).await?),
        None => None,
    };

    let speed = engine.speed();
    let mut run = engine.start(algorithm).await?;

    let outcome = if args.headless {
        // In raw mode Ctrl+C arrives as a key event; this task covers headless runs
        let cancel = run.cancel_sender();
        tokio::spawn(async move {
            match signal::ctrl_c().await {
                Ok(()) => {
                    info!("🛑 Received Ctrl+C, cancelling run");
                    let _ = cancel.try_send(());
                }
                Err(err) => error!("❌ Signal handling failed: {err}"),
            }
        });

        let mut frontend = JsonRenderer::new(&values)?;
        let outcome = drive_run(&mut run, &mut frontend, recorder.as_mut()).await?;
        frontend.finish().await?;
        outcome
    } else {
        let mut renderer = TerminalRenderer::new(algorithm, speed.clone(), &values)?;
        let driven =
            drive_run_interactive(&mut run, &mut renderer, &speed, recorder.as_mut()).await;
        // Restore the terminal before surfacing any driver error
        renderer.finish().await?;
        driven?
    };

    if let Some(recorder) = recorder {
        recorder.finish().await?;
    }

    report_outcome(algorithm, &outcome, args.headless)
}

fn report_outcome(
    algorithm: SortAlgorithm,
    outcome: &RunEvent,
    headless: bool,
) -> ViewerResult<()> {
    match outcome {
        RunEvent::Completed { stats, .. } => {
            let summary = format!(
                "✅ {} completed: {} comparisons, {} swaps, {} writes ({} steps)",
                algorithm.label(),
                stats.comparisons,
                stats.swaps,
                stats.writes,
                stats.steps
            );
            // Headless stdout carries the JSON stream, keep the summary off it
            if headless {
                info!("{summary}");
            } else {
                println!("{summary}");
            }
            Ok(())
        }
        RunEvent::Cancelled { stats } => {
            let summary = format!("🛑 Cancelled after {} steps", stats.steps);
            if headless {
                info!("{summary}");
            } else {
                println!("{summary}");
            }
            Ok(())
        }
        RunEvent::Failed { message } => {
            error!("❌ Run failed: {message}");
            Err(ViewerError::RunFailed {
                message: message.clone(),
            })
        }
        // The drivers only ever return terminal events
        RunEvent::Step(_) => Ok(()),
    }
}

fn print_catalog() {
    println!("available algorithms:");
    for algorithm in SortAlgorithm::ALL {
        let complexity = algorithm.complexity();
        let name = algorithm.to_string();
        println!(
            "  {name:<10} {:<17} best {:<11} average {:<11} worst {:<11} space {:<9} {}",
            algorithm.label(),
            complexity.best,
            complexity.average,
            complexity.worst,
            complexity.space,
            if complexity.stable { "stable" } else { "unstable" },
        );
    }
}
