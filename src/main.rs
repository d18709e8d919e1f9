//! Command-line driver: builds a network, trains it on a dataset and logs
//! progress and final predictions.
//!
//! With no arguments it fits the quadratic `x² + 2x + 3` from the features
//! `[x², x, 1]`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use backprop_nn::{train_loop, ActivationFunction, Dataset, DivergenceGuard, LogReporter, RunConfig};

#[derive(Parser)]
#[command(name = "backprop-nn")]
#[command(about = "Train a small fully-connected network with plain backpropagation", long_about = None)]
struct Cli {
    /// JSON run configuration (model, training, seed)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON dataset: an array of { "input": [...], "target": [...] }
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Number of training epochs
    #[arg(short, long)]
    epochs: Option<usize>,

    /// How many progress reports to emit over the run
    #[arg(short, long)]
    report_count: Option<usize>,

    /// Gradient-descent learning rate
    #[arg(long)]
    learning_rate: Option<f64>,

    /// Hidden layer sizes, comma separated (e.g. 8,4)
    #[arg(long, value_delimiter = ',')]
    hidden: Vec<usize>,

    /// Activation: identity, sigmoid, tanh, relu, leaky-relu, elu
    #[arg(short, long)]
    activation: Option<ActivationFunction>,

    /// Seed for the initial weights
    #[arg(long)]
    seed: Option<u64>,

    /// Verbosity level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let dataset = match &cli.data {
        Some(path) => Dataset::load_json(path)
            .with_context(|| format!("reading dataset {}", path.display()))?,
        None => Dataset::quadratic(),
    };

    let mut run = match &cli.config {
        Some(path) => RunConfig::load_json(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => {
            let mut run = RunConfig::default();
            if let Some((input, output)) = dataset.shape() {
                run.model.layer_sizes = vec![input, output];
            }
            run
        }
    };
    if !cli.hidden.is_empty() {
        run.model.set_hidden(&cli.hidden);
    }
    if let Some(rate) = cli.learning_rate {
        run.model.learning_rate = rate;
    }
    if let Some(activation) = cli.activation {
        run.model.activation = activation;
    }
    if let Some(epochs) = cli.epochs {
        run.training.epochs = epochs;
    }
    if let Some(report_count) = cli.report_count {
        run.training.report_count = report_count;
    }
    if cli.seed.is_some() {
        run.seed = cli.seed;
    }

    let mut network = match run.seed {
        Some(seed) => run.model.build_with_rng(&mut StdRng::seed_from_u64(seed)),
        None => run.model.build(),
    }
    .context("building network")?;

    info!(
        layers = ?run.model.layer_sizes,
        learning_rate = run.model.learning_rate,
        activation = %run.model.activation,
        examples = dataset.len(),
        epochs = run.training.epochs,
        "training"
    );

    let mut reporter = DivergenceGuard::new(LogReporter);
    train_loop(&mut network, dataset.examples(), &run.training, &mut reporter)?;
    reporter.finish().context("training diverged; try a smaller learning rate")?;

    for example in dataset.examples() {
        let prediction = network.predict(&example.input)?;
        info!(input = ?example.input, target = ?example.target, prediction = ?prediction, "prediction");
    }

    Ok(())
}
