//! CLI entry point for the CSV profiler.

use anyhow::{Context, Result};
use clap::Parser;
use csv_profiler::utils::{format_thousands, round_to};
use csv_profiler::{DataProfiler, IssueLevel, ProfilerConfig, Report, ReportGenerator, load_csv};
use dotenv::dotenv;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info};

#[derive(Parser, Debug)]
#[command(
    name = "csv-profiler",
    version,
    about = "Analyze CSV files and generate profiling reports",
    long_about = "Profiles every column of a CSV file: type, missing values, cardinality,\n\
                  summary statistics and data quality warnings.\n\n\
                  Writes <name>.json and <name>.md into the output directory.\n\n\
                  EXAMPLES:\n  \
                  # Basic usage\n  \
                  csv-profiler data.csv\n\n  \
                  # Custom output location and report name\n  \
                  csv-profiler data.csv -o reports/ -n sales\n\n  \
                  # Print the JSON report only\n  \
                  csv-profiler data.csv --json | jq '.columns[].name'"
)]
struct Args {
    /// Path to the CSV file to profile
    input: PathBuf,

    /// Output directory for reports
    #[arg(short, long, default_value = "outputs")]
    out_dir: PathBuf,

    /// Base name for report files (without extension)
    #[arg(short, long, default_value = "report")]
    name: String,

    /// Suppress progress output (only show errors)
    #[arg(short, long)]
    quiet: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Output JSON to stdout instead of writing report files
    ///
    /// Disables all logs; only the JSON report is written.
    #[arg(long)]
    json: bool,

    /// Number of top values listed for text columns
    ///
    /// Overrides the value from --config. Defaults to 5.
    #[arg(long)]
    top_k: Option<usize>,

    /// JSON file with profiler thresholds
    ///
    /// Any field left out keeps its default value.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    // Load environment variables (RUST_LOG) before building the filter
    dotenv().ok();

    let args = Args::parse();
    init_logging(&args.log_level, args.quiet, args.json);

    if let Err(e) = run(&args) {
        error!("Profiling failed: {:#}", e);
        return Err(e);
    }
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let profiler = DataProfiler::new(build_config(args)?);
    debug!(config = ?profiler.config(), "Using profiler configuration");

    let start = Instant::now();

    info!("Loading dataset from: {}", args.input.display());
    let rows = load_csv(&args.input)?;
    info!("Read {} rows", format_thousands(rows.len()));

    let mut report = profiler.profile_rows(&rows);
    info!("Profiled {} columns", report.n_cols);

    report.timing_ms = Some(round_to(start.elapsed().as_secs_f64() * 1000.0, 2));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let generator = ReportGenerator::new(&args.out_dir, &args.name);
    generator.write_all(&report)?;

    if !args.quiet {
        print_summary(&report, generator.output_dir());
    }

    Ok(())
}

fn build_config(args: &Args) -> Result<ProfilerConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            serde_json::from_str::<ProfilerConfig>(&content)
                .with_context(|| format!("Invalid config file {}", path.display()))?
        }
        None => ProfilerConfig::default(),
    };

    if let Some(top_k) = args.top_k {
        config.top_k = top_k;
    }

    config.validate()?;
    Ok(config)
}

/// Print a human-readable summary.
///
/// Uses `println!` rather than logging so the summary is visible at any
/// log level.
fn print_summary(report: &Report, out_dir: &Path) {
    println!("\n{}", "=".repeat(60));
    println!("Profiling complete");
    println!("{}", "=".repeat(60));
    println!("  Rows: {}", format_thousands(report.n_rows));
    println!("  Columns: {}", report.n_cols);
    if let Some(timing_ms) = report.timing_ms {
        println!("  Processing time: {:.2} ms", timing_ms);
    }

    let warnings = report
        .columns
        .iter()
        .flat_map(|col| &col.quality_issues)
        .filter(|issue| issue.level == IssueLevel::Warning)
        .count();
    println!(
        "  Quality issues: {} ({} warnings)",
        report.issue_count(),
        warnings
    );

    let out_dir = std::fs::canonicalize(out_dir).unwrap_or_else(|_| out_dir.to_path_buf());
    println!("  Reports saved to: {}", out_dir.display());
    println!("{}\n", "=".repeat(60));
}
