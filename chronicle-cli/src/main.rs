//! `chronicle` — classify timeline events, merge the results into the
//! canonical store, and shuttle the store to and from spreadsheets.
//!
//! Fatal conditions (unreadable store, failed backup, dead oracle, invalid
//! config) exit non-zero with a diagnostic; recoverable ones (timeouts,
//! unparsable replies) are logged and the batch continues.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use chronicle_classify::{build_report, create_oracle, ClassificationEngine};
use chronicle_core::config::defaults::DEFAULT_CLASSIFY_WORKERS;
use chronicle_core::ChronicleConfig;
use chronicle_store::{apply_results, load_events, merge_into_store, results_from_categorized, save_events};
use chronicle_tabular::{export_csv, import_csv, load_records, save_records};

#[derive(Parser)]
#[command(name = "chronicle", version, about = "Timeline event categorization pipeline")]
struct Cli {
    /// TOML config file (oracle, taxonomy, workers). Defaults apply when absent.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify every event in a store and write a categorized copy + report.
    Categorize {
        /// Canonical store to read events from.
        #[arg(long)]
        input: PathBuf,
        /// Categorized output file. Default: `<input stem>_categorized.json`.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Markdown report file. Default: `categorization_report.md` beside the output.
        #[arg(long)]
        report: Option<PathBuf>,
        /// Concurrent oracle calls (overrides config).
        #[arg(long)]
        workers: Option<usize>,
    },
    /// Merge a categorized file into the canonical store (backup written first).
    Merge {
        /// The canonical store to update.
        #[arg(long)]
        canonical: PathBuf,
        /// Categorized file produced by `categorize` (or hand-edited).
        #[arg(long)]
        classified: PathBuf,
    },
    /// Export the store as `;`-delimited text for spreadsheet editing.
    Export {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: PathBuf,
    },
    /// Import an edited spreadsheet back into store form.
    Import {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: PathBuf,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

/// Honors `CHRONICLE_LOG` for filtering, defaults to `info`.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("CHRONICLE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => ChronicleConfig::load(path)?,
        None => ChronicleConfig::default(),
    };

    match cli.command {
        Command::Categorize {
            input,
            output,
            report,
            workers,
        } => categorize(&config, &input, output, report, workers),
        Command::Merge {
            canonical,
            classified,
        } => merge(&canonical, &classified),
        Command::Export { input, output } => {
            let records = load_records(&input)?;
            export_csv(&records, &output)?;
            println!("Exported {} rows to {}", records.len(), output.display());
            Ok(())
        }
        Command::Import { input, output } => {
            let records = import_csv(&input)?;
            save_records(&output, &records)?;
            println!("Imported {} rows into {}", records.len(), output.display());
            Ok(())
        }
    }
}

fn categorize(
    config: &ChronicleConfig,
    input: &Path,
    output: Option<PathBuf>,
    report: Option<PathBuf>,
    workers: Option<usize>,
) -> anyhow::Result<()> {
    let taxonomy = config.taxonomy()?;
    let events = load_events(input)?;

    let oracle = create_oracle(&config.oracle)
        .context("oracle backend is required for categorization")?;
    let engine = ClassificationEngine::new(oracle, taxonomy.clone());

    let workers = workers.unwrap_or(config.workers).max(DEFAULT_CLASSIFY_WORKERS);
    let results = engine.classify_all_bounded(&events, workers);

    let mut categorized = events.clone();
    apply_results(&mut categorized, &results);

    let output = output.unwrap_or_else(|| sibling(input, "_categorized.json"));
    save_events(&output, &categorized)?;

    let report_path = report.unwrap_or_else(|| {
        output
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("categorization_report.md")
    });
    let report_text = build_report(&events, &results, &taxonomy);
    std::fs::write(&report_path, report_text)
        .with_context(|| format!("cannot write report {}", report_path.display()))?;

    println!("Categorized {} events", events.len());
    println!("Output: {}", output.display());
    println!("Report: {}", report_path.display());
    Ok(())
}

fn merge(canonical: &Path, classified: &Path) -> anyhow::Result<()> {
    let classified_events = load_events(classified)?;
    let results = results_from_categorized(&classified_events);

    let outcome = merge_into_store(canonical, &results)?;

    println!(
        "Merged: {} updated, {} skipped",
        outcome.stats.updated, outcome.stats.skipped
    );
    println!("Backup: {}", outcome.backup_path.display());
    if !outcome.stats.category_counts.is_empty() {
        println!("Categories across the store:");
        let mut counts: Vec<_> = outcome.stats.category_counts.iter().collect();
        counts.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        for (label, count) in counts {
            println!("  {label}: {count}");
        }
    }
    Ok(())
}

/// `timeline.json` → `timeline<suffix>` beside the original.
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("store");
    path.with_file_name(format!("{stem}{suffix}"))
}
