mod config;
mod convert;
mod error;
mod notation;
mod theory;
mod types;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::ConverterConfig;
use convert::{Conversion, Converter};
use error::PitchError;
use types::NotationStyle;

/// Convert between frequencies and pitch notations using equal temperament
#[derive(Parser, Debug)]
#[command(name = "pitchfreq")]
#[command(
    about = "Convert various pitch and frequency notations using equal temperament",
    long_about = None
)]
struct Args {
    /// Input: a frequency in Hz, or a note name (scientific pitch notation by default)
    #[arg(allow_hyphen_values = true)]
    input: String,

    /// Input or output uses Helmholtz notation (same as --notation helmholtz)
    #[arg(short = 'm', long = "helmholtz")]
    helmholtz: bool,

    /// Notation for input and output: scientific or helmholtz
    #[arg(short = 'n', long = "notation", conflicts_with = "helmholtz")]
    notation: Option<NotationStyle>,

    /// Show all notations
    #[arg(short = 'a', long = "all")]
    show_all: bool,

    /// Tuning of A4 in Hz (default: 440)
    #[arg(short = 't', long = "tuning", allow_negative_numbers = true)]
    tuning: Option<f64>,

    /// Configuration file (YAML)
    #[arg(short = 'c', long = "config")]
    config: Option<std::path::PathBuf>,
}

/// Resolve settings: defaults, then the config file, then command line flags
fn build_config(args: &Args) -> Result<ConverterConfig> {
    let config = match &args.config {
        Some(path) => ConverterConfig::load(path)?,
        None => ConverterConfig::default(),
    };

    let notation = if args.helmholtz {
        Some(NotationStyle::Helmholtz)
    } else {
        args.notation
    };

    let config = config.with_overrides(args.tuning, notation);
    config.validate()?;
    Ok(config)
}

/// Validate flags and settings, then convert the input
fn run(args: &Args) -> Result<Conversion> {
    if args.show_all {
        return Err(PitchError::UnimplementedFeature("-a").into());
    }

    let config = build_config(args)?;
    info!(tuning = config.tuning, notation = %config.notation, "configuration loaded");

    let converter = Converter::new(&config);
    Ok(converter.convert(&args.input)?)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let conversion = run(&args)?;
    print!("{}", conversion);

    Ok(())
}
