use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use plantwatch_engine::{recent_history_with_limit, summarize, DEFAULT_HISTORY_LIMIT};
use plantwatch_ingest::{load_dataset, read_csv};
use plantwatch_types::ScatterPoint;

#[derive(Parser, Debug)]
#[command(name = "plantwatch")]
#[command(about = "Summarize sensor-equipment datasets from the command line")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long, global = true)]
    compact: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize one dataset file
    Summarize {
        /// Path to a CSV dataset
        file: PathBuf,
    },

    /// Project one dataset file into scatter-chart points
    Scatter {
        /// Path to a CSV dataset
        file: PathBuf,
    },

    /// Summarize the most recent of several dataset files, newest first
    History {
        /// Paths to CSV datasets
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// How many recent datasets to include
        #[arg(short, long, default_value_t = DEFAULT_HISTORY_LIMIT)]
        limit: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let value = match args.command {
        Command::Summarize { file } => {
            let readings = read_csv(&file)
                .with_context(|| format!("failed to load dataset {}", file.display()))?;
            info!(rows = readings.len(), "dataset loaded");

            let summary = summarize(&readings)?;
            serde_json::to_value(summary)?
        }

        Command::Scatter { file } => {
            let readings = read_csv(&file)
                .with_context(|| format!("failed to load dataset {}", file.display()))?;

            let points: Vec<ScatterPoint> = readings.iter().map(ScatterPoint::from).collect();
            serde_json::to_value(points)?
        }

        Command::History { files, limit } => {
            let datasets = files
                .iter()
                .enumerate()
                .map(|(i, file)| {
                    load_dataset(file, i as u64 + 1)
                        .with_context(|| format!("failed to load dataset {}", file.display()))
                })
                .collect::<Result<Vec<_>>>()?;
            info!(datasets = datasets.len(), limit, "datasets loaded");

            let history = recent_history_with_limit(&datasets, limit);
            serde_json::to_value(history)?
        }
    };

    let rendered = if args.compact {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };
    println!("{rendered}");

    Ok(())
}
