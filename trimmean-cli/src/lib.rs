#![warn(missing_docs)]
//! Trimmean CLI Library
//!
//! Command-line front end for the trimmed mean calculator. Use
//! `trimmean::run()` (or `trimmean_cli::run()`) from a binary's `main`.
//!
//! # Example
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     trimmean_cli::run()
//! }
//! ```

mod config;
mod executor;
mod session;

pub use config::*;
pub use executor::{
    BatchError, format_human_batch, format_human_output, parse_batch, run_batch, submit,
};
pub use session::{Session, SessionStats};

use anyhow::Context;
use clap::{Parser, Subcommand};
use rayon::ThreadPoolBuilder;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use trimmean_input::RawInput;
use trimmean_report::{OutputFormat, generate_json_batch, generate_json_report};

/// Trimmean CLI arguments
#[derive(Parser, Debug)]
#[command(name = "trimmean")]
#[command(author, version, about = "Trimmean - trimmed arithmetic mean calculator")]
pub struct Cli {
    /// Optional subcommand (Compute, Interactive, Batch, Init); defaults to Compute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Numbers separated by commas, full-width commas or whitespace
    #[arg(allow_hyphen_values = true)]
    pub array: Option<String>,

    /// Total percentage to trim, split evenly between both tails
    #[arg(short, long, global = true, allow_hyphen_values = true)]
    pub percent: Option<String>,

    /// Decimal places in the result (0 to 8)
    #[arg(short, long, global = true, allow_hyphen_values = true)]
    pub digits: Option<String>,

    /// Output format: human, json (defaults to trimmean.toml, then human)
    #[arg(long, global = true)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Configuration file (skips trimmean.toml discovery)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Number of threads for batch evaluation
    /// 0 = use all available cores (default), 1 = single-threaded
    #[arg(long, short = 'j', default_value = "0", global = true)]
    pub threads: usize,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute one trimmed mean (default)
    Compute {
        /// Numbers separated by commas, full-width commas or whitespace
        #[arg(allow_hyphen_values = true)]
        array: Option<String>,
    },
    /// Prompt for input repeatedly until EOF or :q
    ///
    /// Output is always human-readable on stdout; --format and --output are ignored.
    Interactive,
    /// Evaluate one submission per line of FILE (`ARRAY; PERCENT; DIGITS`)
    Batch {
        /// Batch file path
        file: PathBuf,
    },
    /// Print a default trimmean.toml
    Init,
}

/// Run the Trimmean CLI with the process arguments.
///
/// # Returns
/// Returns `Ok(())` on success, or an error if something goes wrong.
/// Exits the process with status 1 when a submission is invalid.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the Trimmean CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Initialize logging (stderr keeps stdout clean for reports)
    let default_filter = if cli.verbose {
        "trimmean=debug"
    } else {
        "trimmean=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref())?;
    config.validate()?;

    // Parse output format: CLI wins, then trimmean.toml
    let format = match &cli.format {
        Some(f) => f.parse::<OutputFormat>().map_err(anyhow::Error::msg)?,
        None => config.output_format()?,
    };

    let all_valid = match &cli.command {
        Some(Commands::Init) => {
            print!("{}", TrimmeanConfig::default_toml());
            true
        }
        Some(Commands::Interactive) => run_interactive(&cli, &config)?,
        Some(Commands::Batch { file }) => run_batch_file(&cli, &config, file, format)?,
        Some(Commands::Compute { array }) => {
            let array = array.clone().or_else(|| cli.array.clone());
            run_compute(&cli, &config, array, format)?
        }
        None => run_compute(&cli, &config, cli.array.clone(), format)?,
    };

    if !all_valid {
        std::process::exit(1);
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<TrimmeanConfig> {
    match path {
        Some(path) => TrimmeanConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(TrimmeanConfig::discover().unwrap_or_default()),
    }
}

/// Build raw input by layering: CLI flags → trimmean.toml defaults → empty.
pub fn build_raw_input(cli: &Cli, config: &TrimmeanConfig, array: Option<String>) -> RawInput {
    let percent = cli
        .percent
        .clone()
        .or_else(|| config.defaults.percent.map(|p| p.to_string()))
        .unwrap_or_default();
    let digits = cli
        .digits
        .clone()
        .or_else(|| config.defaults.digits.map(|d| d.to_string()))
        .unwrap_or_default();

    RawInput::new(array.unwrap_or_default(), percent, digits)
}

fn run_compute(
    cli: &Cli,
    config: &TrimmeanConfig,
    array: Option<String>,
    format: OutputFormat,
) -> anyhow::Result<bool> {
    let raw = build_raw_input(cli, config, array);
    let report = submit(&raw, config.digits_policy());

    let output = match format {
        OutputFormat::Json => generate_json_report(&report)? + "\n",
        OutputFormat::Human => format_human_output(&report, config.output.show_trimmed),
    };
    write_output(cli.output.as_deref(), &output)?;

    Ok(report.is_valid())
}

fn run_interactive(cli: &Cli, config: &TrimmeanConfig) -> anyhow::Result<bool> {
    for flag in interactive_ignored_flags(cli) {
        tracing::warn!(flag, "ignored in interactive mode; output goes to stdout as text");
    }

    let initial = build_raw_input(cli, config, cli.array.clone());
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let mut session = Session::new(stdin.lock(), stdout.lock(), config.digits_policy(), initial)
        .show_trimmed(config.output.show_trimmed);
    let stats = session.run()?;
    tracing::info!(
        rounds = stats.rounds,
        computed = stats.computed,
        "session finished"
    );

    // Invalid rounds were already reported interactively
    Ok(true)
}

/// Output flags that interactive mode does not honour
fn interactive_ignored_flags(cli: &Cli) -> Vec<&'static str> {
    let mut flags = Vec::new();
    if cli.format.is_some() {
        flags.push("--format");
    }
    if cli.output.is_some() {
        flags.push("--output");
    }
    flags
}

fn run_batch_file(
    cli: &Cli,
    config: &TrimmeanConfig,
    file: &Path,
    format: OutputFormat,
) -> anyhow::Result<bool> {
    // Configure Rayon thread pool for batch evaluation
    if cli.threads > 0 {
        ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .ok();
    }

    let text = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read batch file {}", file.display()))?;
    let submissions = parse_batch(&text)?;
    tracing::debug!(count = submissions.len(), file = %file.display(), "parsed batch file");

    let report = run_batch(&submissions, config.digits_policy());

    let output = match format {
        OutputFormat::Json => generate_json_batch(&report)? + "\n",
        OutputFormat::Human => format_human_batch(&report, config.output.show_trimmed),
    };
    write_output(cli.output.as_deref(), &output)?;

    Ok(report.all_valid())
}

fn write_output(path: Option<&Path>, output: &str) -> anyhow::Result<()> {
    if let Some(path) = path {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        file.write_all(output.as_bytes())?;
        println!("Report written to: {}", path.display());
    } else {
        print!("{}", output);
    }
    Ok(())
}
