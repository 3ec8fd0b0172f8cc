//! `droptimizer` — prints the best upgrade per slot for a Raidbots report.
//!
//! ```text
//! droptimizer https://www.raidbots.com/simbot/report/jxmyHRqGFghsshiFAeUXn8 --sort boss
//! droptimizer --file data.json --sort slot
//! ```

mod render;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use raidbots_client::{RaidbotsConfig, fetch_report_from_input};
use serde_json::Value;
use tracing::Level;
use upgrade_engine::{
    Aggregation, SortMode,
    display::EntryView,
    gate::{self, Admission},
    telemetry,
};

#[derive(Parser)]
#[command(name = "droptimizer")]
#[command(about = "Best gear upgrade per slot from a droptimizer report", long_about = None)]
#[command(version)]
struct Cli {
    /// Report URL or 22-character report id.
    report: Option<String>,

    /// Read the report document from a local data.json instead of fetching it.
    #[arg(short, long, conflicts_with = "report")]
    file: Option<PathBuf>,

    /// Ordering: dps, slot or boss.
    #[arg(short, long, default_value = "dps")]
    sort: String,

    /// Print the ranked entries as JSON.
    #[arg(long)]
    json: bool,

    /// Verbose engine logging.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    telemetry::init("warn", level)?;

    let sort: SortMode = cli.sort.parse()?;
    let doc = load_document(&cli).await?;

    let report = match gate::admit(doc)? {
        Admission::Accepted(report) => report,
        Admission::WrongReportType { sim_type } => {
            eprintln!(
                "{} (simType: {})",
                "Not a droptimizer report".yellow(),
                sim_type.as_deref().unwrap_or("missing")
            );
            return Ok(());
        }
    };

    let aggregation = Aggregation::build(&report);
    let entries = aggregation.ranked(sort)?;
    let views: Vec<EntryView> = entries.iter().map(EntryView::from).collect();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    println!(
        "{} {}  {} {}",
        "Baseline:".bold(),
        upgrade_engine::display::format_delta(aggregation.baseline()).trim_start_matches('+'),
        "Sort:".bold(),
        sort
    );
    for row in render::render_rows(&views) {
        println!("{row}");
    }
    if aggregation.skipped() > 0 {
        eprintln!(
            "{}",
            format!("{} results skipped (unrecognized names)", aggregation.skipped()).dimmed()
        );
    }

    Ok(())
}

async fn load_document(cli: &Cli) -> Result<Value> {
    if let Some(path) = &cli.file {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        return serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()));
    }

    let Some(input) = cli.report.as_deref() else {
        bail!("pass a report URL/id or --file <data.json>");
    };

    let (_, doc) = fetch_report_from_input(RaidbotsConfig::from_env()?, input).await?;
    Ok(doc)
}
