mod engine;
mod models;
mod storage;
mod types;

use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::engine::{Reconciliation, ReconciliationEngine};
use crate::storage::JsonFileStore;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: payment-reconciler [input].json [output].json [log_level:optional] [seed:optional]");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let log_level = args.get(3)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    let mut engine = ReconciliationEngine::new();

    if let Some(seed) = args.get(4) {
        let seed: u64 = seed.parse().with_context(|| format!("Invalid seed '{seed}', expected an unsigned integer"))?;
        engine = engine.with_seed(seed);
    }

    let store = Arc::new(JsonFileStore::new(&args[1], &args[2]));

    let timer = Instant::now();
    let reconciliation = engine.run(store.clone()).await?;
    let duration = timer.elapsed();

    info!("Reconciled dataset in: {duration:?}");

    write_summary_to_stdout(&reconciliation, &store)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the run summary, logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_summary_to_stdout(reconciliation: &Reconciliation, store: &JsonFileStore) -> Result<()> {
    let summary = &reconciliation.summary;
    let records: Vec<_> = reconciliation.dataset.import_records().collect();
    let payments = records.iter().filter(|record| record.endpoint() == "payments").count();

    let mut output = BufWriter::new(stdout().lock());

    writeln!(output, "Processed {} transactions ({} skipped: {} settled, {} short of payments, {} faulted)",
        summary.processed, summary.skipped(), summary.settled, summary.short_of_payments, summary.faulted)?;
    writeln!(output, "Allocated {} payments, dropped {}", summary.allocated_payments, summary.dropped_payments)?;
    writeln!(output, "Import records ready: {} ({} transactions, {} payments)", records.len(), records.len() - payments, payments)?;
    writeln!(output, "Saved to: {}", store.output().display())?;

    output.flush()?;

    Ok(())
}
