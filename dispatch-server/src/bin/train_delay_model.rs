//! Fit a delay model from historical runs and write it as JSON.
//!
//! The history CSV needs the columns
//! `current_time,station,weather_condition,day_of_week,delayed`.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dispatch_server::risk::{TrainOptions, TrainedModel, load_history};

#[derive(Debug, Parser)]
#[command(name = "train-delay-model", about = "Train the delay risk model")]
struct Cli {
    /// Historical delay records (CSV)
    #[arg(long)]
    history: PathBuf,

    /// Where to write the model (JSON)
    #[arg(long)]
    output: PathBuf,

    /// Gradient descent passes
    #[arg(long, default_value_t = TrainOptions::default().epochs)]
    epochs: usize,

    #[arg(long, default_value_t = TrainOptions::default().learning_rate)]
    learning_rate: f64,

    /// L2 penalty on the weights
    #[arg(long, default_value_t = TrainOptions::default().l2)]
    l2: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let examples = load_history(&cli.history)
        .with_context(|| format!("failed to read history from {}", cli.history.display()))?;
    info!(examples = examples.len(), "loaded history");

    let options = TrainOptions {
        epochs: cli.epochs,
        learning_rate: cli.learning_rate,
        l2: cli.l2,
    };
    let model = TrainedModel::train(&examples, &options).context("training failed")?;

    model
        .save(&cli.output)
        .with_context(|| format!("failed to write model to {}", cli.output.display()))?;
    info!(
        path = %cli.output.display(),
        examples = model.examples(),
        "saved model"
    );

    Ok(())
}
