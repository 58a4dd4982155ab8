//! Hopfield glyph recall CLI
//!
//! Trains on `training_data/<mode>/<label>/*`, recalls `test_data/<mode>.txt`
//! and prints the attractor as ASCII art.
//!
//! ```text
//! hopfield binary
//! hopfield bipolar --config hopfield.json -vv
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use hopfield::{Hopfield, HopfieldConfig, Mode};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

/// Recall a stored glyph from a noisy query with a Hopfield network
#[derive(Parser)]
#[command(name = "hopfield")]
#[command(version)]
#[command(about = "Recall a stored glyph from a noisy query with a Hopfield network")]
struct Cli {
    /// Value encoding of the training and query glyphs
    #[arg(value_enum)]
    mode: ModeArg,

    /// JSON configuration file (thresholds, limits, data directories)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Binary,
    Bipolar,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Binary => Mode::Binary,
            ModeArg::Bipolar => Mode::Bipolar,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => HopfieldConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => HopfieldConfig::default(),
    };
    let mode = Mode::from(cli.mode);

    let net = Hopfield::train(config, mode)
        .with_context(|| format!("training {} network", mode))?;

    let query_path = net.query_path();
    let recall = net
        .recall_file(&query_path)
        .with_context(|| format!("recalling {}", query_path.display()))?;
    if !recall.converged {
        warn!(
            sweeps = recall.sweeps,
            "no fixed point reached; showing the last state"
        );
    }

    print!("{}", net.render(&recall.pattern)?);
    Ok(())
}
