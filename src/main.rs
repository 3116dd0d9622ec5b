//! Box Dimension Search
//!
//! Searches integer box dimensions for a hollow box whose walls use close to a
//! target amount of material, and reports the candidates that enclose the most
//! volume. With the defaults, dimensions are in units of 100 mm, walls are
//! 4 units thick, and the target is 20000 units of material.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use brickbox::{logging, report, search};
use brickbox::{Candidate, Config, ConfigError, Overrides};

/// Finds box dimensions that use a target amount of wall material.
#[derive(Parser)]
#[command(name = "brickbox")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    options: Options,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    /// List the top solutions and the best one.
    Search,
    /// Show only the best solution.
    Best,
    /// Show the number of solutions.
    Count,
    /// Export all solutions as JSON.
    Export,
}

#[derive(Args, Debug, Default)]
struct Options {
    /// TOML file with [search] and [report] tables.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Lower search bound, inclusive.
    #[arg(long, global = true, allow_negative_numbers = true)]
    range_min: Option<i64>,

    /// Upper search bound, exclusive.
    #[arg(long, global = true, allow_negative_numbers = true)]
    range_max: Option<i64>,

    /// Wall thickness subtracted from each dimension.
    #[arg(long, global = true, allow_negative_numbers = true)]
    shrink: Option<i64>,

    /// Material quantity to approximate.
    #[arg(long, global = true, allow_negative_numbers = true)]
    target: Option<i64>,

    /// Accepted absolute deviation from the target.
    #[arg(long, global = true, allow_negative_numbers = true)]
    tolerance: Option<i64>,

    /// Number of solutions listed.
    #[arg(long, global = true)]
    top: Option<usize>,

    /// Keep one orientation per box shape.
    #[arg(long, global = true)]
    unique: bool,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,
}

impl Options {
    fn overrides(&self) -> Overrides {
        Overrides {
            range_min: self.range_min,
            range_max: self.range_max,
            shrink: self.shrink,
            target: self.target,
            tolerance: self.tolerance,
            top: self.top,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.options.verbose);

    let config = match load_config(&cli.options) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("configuration rejected: {}", e);
            eprintln!("Invalid configuration: {}", e);
            return ExitCode::from(2);
        }
    };
    tracing::debug!("effective config: {:?}", config);

    let solutions = run_search(&config, cli.options.unique);

    match cli.command.unwrap_or(Command::Search) {
        Command::Search => print!("{}", report::format_report(&solutions, &config)),
        Command::Best => run_best(&solutions, &config),
        Command::Count => print!("{}", report::format_count(&solutions)),
        Command::Export => return run_export(&solutions),
    }

    ExitCode::SUCCESS
}

/// Merges defaults, the optional config file, and command-line overrides.
fn load_config(options: &Options) -> Result<Config, ConfigError> {
    let mut config = match &options.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.apply(&options.overrides());
    config.validate()?;
    Ok(config)
}

/// Runs the scan and optionally collapses permutations of the same box.
fn run_search(config: &Config, unique: bool) -> Vec<Candidate> {
    let solutions = search::search(&config.search);
    let solutions = if unique {
        search::distinct_shapes(&solutions)
    } else {
        solutions
    };

    if solutions.is_empty() {
        tracing::info!("no candidate within tolerance");
    } else {
        tracing::info!("found {} solutions", solutions.len());
    }
    solutions
}

fn run_best(solutions: &[Candidate], config: &Config) {
    match search::best(solutions) {
        Some(candidate) => print!("{}", report::format_best(candidate, config)),
        None => println!("{}", report::NO_SOLUTIONS),
    }
}

fn run_export(solutions: &[Candidate]) -> ExitCode {
    match report::export_json(solutions) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("export failed: {}", e);
            eprintln!("Failed to export solutions: {}", e);
            ExitCode::FAILURE
        }
    }
}
