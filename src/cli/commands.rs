//! Command implementation for the climate analyzer CLI
//!
//! Opens each input file in turn, folds it into a single aggregation and
//! prints the report once every file has been handled.

use crate::app::services::aggregation::{AggregationEngine, RunSummary, open_source};
use crate::app::services::report::render_report;
use crate::cli::args::Args;
use crate::constants::LOG_TARGET;
use anyhow::{Context, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info, warn};

/// Main command runner
///
/// Files that cannot be opened or read are reported on stderr and skipped.
/// Only invalid options or a logging setup failure abort the run.
pub fn run(args: Args) -> Result<RunSummary> {
    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    let config = args.to_config().context("Invalid command line options")?;
    let time_display = config.time_display;
    let mut engine = AggregationEngine::new(config)?;

    info!("Analysing {} file(s)", args.files.len());

    for path in &args.files {
        analyze_file(&mut engine, path, args.quiet);
    }

    let (state, summary) = engine.finish();
    print!("{}", render_report(&state, time_display));

    info!("{}", summary.summary());
    Ok(summary)
}

/// Open and ingest one file, reporting problems without stopping the run
fn analyze_file(engine: &mut AggregationEngine, path: &Path, quiet: bool) {
    let name = path.display().to_string();

    if !quiet {
        println!("Opening file: {}", name);
    }

    let file = match open_source(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("{}", format!("Error in opening file {}", name).bright_red());
            engine.record_unavailable(name, &e);
            return;
        }
    };

    let result = if engine.config().show_progress {
        let total = file.metadata().map(|m| m.len()).unwrap_or(0);
        let pb = create_file_progress_bar(total, &name);
        let result = engine.ingest(BufReader::new(pb.wrap_read(file)), &name);
        pb.finish_and_clear();
        result
    } else {
        engine.ingest(BufReader::new(file), &name)
    };

    match result {
        Ok(stats) if stats.records_rejected() > 0 => {
            warn!(
                "Skipped {} malformed line(s) in {}",
                stats.records_rejected(),
                name
            );
            for message in &stats.parse.errors {
                debug!("{}: {}", name, message);
            }
        }
        Ok(_) => {}
        Err(e) => {
            eprintln!("{}", format!("Error reading file {}: {}", name, e).bright_red());
        }
    }
}

/// Byte-based progress bar for a single file
fn create_file_progress_bar(total: u64, name: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb.set_message(name.to_string());
    pb
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .context("Failed to initialise logging")?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .context("Failed to initialise logging")?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalyzerConfig;
    use tempfile::TempDir;

    fn engine() -> AggregationEngine {
        AggregationEngine::new(AnalyzerConfig::default().with_progress()).unwrap()
    }

    #[test]
    fn test_missing_file_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("absent.tdv");

        let mut engine = engine();
        analyze_file(&mut engine, &missing, true);

        assert!(engine.state().is_empty());
        assert_eq!(engine.summary().sources_failed.len(), 1);
        assert_eq!(engine.summary().sources_processed, 0);
    }

    #[test]
    fn test_file_read_through_progress_bar() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("one.tdv");
        std::fs::write(
            &path,
            "TN\t1428300000000\tdn5rj8r1\t49.0\t0.0\t53.0\t1.0\t100421.0\t293.15\nbad line\n",
        )
        .unwrap();

        let mut engine = engine();
        analyze_file(&mut engine, &path, true);

        assert_eq!(engine.summary().sources_processed, 1);
        assert_eq!(engine.summary().parse.records_rejected, 1);
        assert_eq!(engine.state().get("TN").unwrap().lightning_count, 1);
    }

    #[test]
    fn test_progress_bar_length() {
        let pb = create_file_progress_bar(1024, "data.tdv");
        assert_eq!(pb.length(), Some(1024));
    }
}
