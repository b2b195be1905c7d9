//! One-shot training entrypoint.
//!
//! Produces the durable model artifact the service loads at startup. Run
//! once before the first `fintag-web` start, or any time a retrain outside
//! the running service is wanted.

use anyhow::{Context, Result};
use clap::Parser;
use fintag_core::FeedbackStore;
use fintag_model::run_training;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "fintag-train")]
#[command(about = "Train the fintag category model and persist the artifact")]
struct Cli {
    /// Directory to write the model artifact into
    #[arg(short, long, default_value = "model")]
    model_dir: PathBuf,

    /// Path to the feedback CSV file
    #[arg(short, long, default_value = "feedback.csv")]
    feedback: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    let store = FeedbackStore::new(&cli.feedback);
    let report = run_training(&store, &cli.model_dir).context("training failed")?;

    tracing::info!(
        total = report.total_examples,
        train = report.train_examples,
        eval = report.eval_examples,
        accuracy = report.accuracy,
        labels = report.num_labels,
        "model trained and persisted"
    );

    Ok(())
}
