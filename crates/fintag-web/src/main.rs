//! Fintag classification service.

use anyhow::{Context, Result};
use clap::Parser;
use fintag_core::FeedbackStore;
use fintag_model::ModelRegistry;
use fintag_web::{routes, AppState};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "fintag-web")]
#[command(about = "Transaction category classification service")]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value = "5001")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Directory holding the model artifact
    #[arg(short, long, default_value = "model")]
    model_dir: PathBuf,

    /// Path to the feedback CSV file
    #[arg(short, long, default_value = "feedback.csv")]
    feedback: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    // No model, no service: there is no fallback classifier to serve with.
    let registry = ModelRegistry::load_initial(&cli.model_dir)
        .context("loading initial model artifact")?;
    let feedback = FeedbackStore::new(&cli.feedback);

    let state = AppState::new(registry, feedback, cli.model_dir);
    let app = routes::create_router(state);

    let addr = format!("{}:{}", cli.host, cli.port);
    tracing::info!(%addr, "fintag service listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
