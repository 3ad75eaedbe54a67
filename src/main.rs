use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use overlap_engine::calculation::{compute_overlaps, compute_overlaps_parallel};
use overlap_engine::config::{ConfigLoader, EngineConfig, Separator};
use overlap_engine::parsing::{ParserRegistry, SourceFormat};
use overlap_engine::report::OverlapReport;

/// Find the pair of employees who worked together on common projects the longest
#[derive(Parser, Debug)]
#[command(name = "overlap-engine", version)]
#[command(long_about = None)]
struct Cli {
    /// Work-period file with rows of EmpID, ProjectID, DateFrom, DateTo
    file: PathBuf,

    /// Path to a YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Source format tag (default: csv)
    #[arg(short, long)]
    format: Option<SourceFormat>,

    /// Field separator, a single character (use "\t" for tab)
    #[arg(short, long)]
    separator: Option<Separator>,

    /// Treat the first row as a header
    #[arg(long)]
    header: bool,

    /// Process projects in parallel
    #[arg(long)]
    parallel: bool,

    /// Print every pair total instead of only the best pair
    #[arg(long, conflicts_with = "json")]
    all: bool,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    debug!(?cli, "Parsed arguments");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "Run failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // RUST_LOG takes precedence over -v.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .init();
}

fn resolve_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?
            .into_config(),
        None => EngineConfig::default(),
    };

    if let Some(format) = cli.format {
        config.source.format = format;
    }
    if let Some(separator) = cli.separator {
        config.source.separator = separator;
    }
    if cli.header {
        config.source.has_header = true;
    }
    if cli.parallel {
        config.engine.parallel = true;
    }
    Ok(config)
}

fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;
    let today = Local::now().date_naive();

    let periods = ParserRegistry::new()
        .load(&cli.file, &config.source, today)
        .with_context(|| format!("reading {}", cli.file.display()))?;

    let totals = if config.engine.parallel {
        compute_overlaps_parallel(&periods)
    } else {
        compute_overlaps(&periods)
    };

    let report = OverlapReport::new(periods.len(), &totals);
    if report.best.is_none() {
        warn!(records = periods.len(), "No overlapping work periods found");
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if cli.all {
        for line in report.all_lines() {
            println!("{line}");
        }
    } else {
        println!("{}", report.summary_line());
    }
    Ok(())
}
