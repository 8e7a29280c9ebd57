//! Ticker Client — looks up per-ticker metrics from an HTTP server and prints the
//! JSON answer, pretty-printed, to stdout. A failed lookup prints `Error: ...`
//! instead.
//!
//! Usage example (CLI):
//! ```bash
//! ticker_client --server http://127.0.0.1:5000 --ticker aapl
//! ticker_client --path ./tickers.txt
//! ticker_client            # interactive: one ticker per line on stdin
//! ```
//!
//! The ticker file should contain symbols separated by commas, spaces, or new lines.
//! See `ticker_common::tickers` for details.
#![warn(missing_docs)]
mod args;
mod lookup;
mod view;

use crate::args::Args;
use crate::lookup::TickerLookup;
use crate::view::{ResultsView, StdoutView};
use clap::Parser;
use log::{debug, error, info};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use ticker_common::tickers::{Ticker, TickerParser};
use ticker_common::{LookupError, Result};
use tokio::sync::mpsc;
use tokio::task::JoinSet;

/// Lines buffered between the stdin thread and the dispatch loop.
const STDIN_BUFFER: usize = 64;

#[tokio::main]
async fn main() -> Result<(), LookupError> {
    init_logger();
    let args = Args::parse();

    let server = args.server.trim().replace('"', "");
    info!("Using metrics server {}", server);

    let lookup = Arc::new(TickerLookup::new(&server));
    let view: Arc<dyn ResultsView> = Arc::new(StdoutView);

    if let Some(input) = args.ticker {
        lookup.get_metrics(&input, view.as_ref()).await;
        return Ok(());
    }

    if let Some(raw_path) = args.path {
        let file_path = normalize_path(&raw_path);
        let file = File::open(&file_path).inspect_err(|e| {
            error!("Cannot open ticker file {}: {}", file_path.display(), e);
        })?;
        let tickers = Ticker::parse_from_file(BufReader::new(file))?;
        info!("Tickers: {:?}", tickers);
        return run_batch(lookup, view, tickers).await;
    }

    run_interactive(lookup, view).await
}

/// Dispatches one lookup per ticker at once and waits for all of them.
async fn run_batch(
    lookup: Arc<TickerLookup>,
    view: Arc<dyn ResultsView>,
    tickers: Vec<Ticker>,
) -> Result<()> {
    let mut in_flight = JoinSet::new();
    for ticker in tickers {
        dispatch(&mut in_flight, &lookup, &view, ticker.to_string());
    }
    drain(&mut in_flight).await;
    Ok(())
}

/// Treats every stdin line as one lookup event.
///
/// A new line does not wait for earlier lookups, so answers may arrive in any
/// order. EOF waits for what is still in flight; Ctrl+C abandons it.
async fn run_interactive(lookup: Arc<TickerLookup>, view: Arc<dyn ResultsView>) -> Result<()> {
    let mut lines = spawn_stdin_reader();
    let mut in_flight = JoinSet::new();
    info!("Enter one ticker per line. Press Ctrl+C to exit.");

    loop {
        tokio::select! {
            line = lines.recv() => match line {
                Some(line) => dispatch(&mut in_flight, &lookup, &view, line?),
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                info!("Ctrl+C received. Shutting down client...");
                in_flight.abort_all();
                return Ok(());
            }
        }
    }

    drain(&mut in_flight).await;
    Ok(())
}

/// Reads stdin on a plain thread and forwards each line.
///
/// The thread is detached: a read blocked on stdin never holds up shutdown.
/// The channel closes on EOF or after a read error has been forwarded.
fn spawn_stdin_reader() -> mpsc::Receiver<std::io::Result<String>> {
    let (tx, rx) = mpsc::channel(STDIN_BUFFER);
    thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let failed = line.is_err();
            if tx.blocking_send(line).is_err() || failed {
                break;
            }
        }
        debug!("Stdin reader stopping...");
    });
    rx
}

fn dispatch(
    in_flight: &mut JoinSet<()>,
    lookup: &Arc<TickerLookup>,
    view: &Arc<dyn ResultsView>,
    input: String,
) {
    let lookup = lookup.clone();
    let view = view.clone();
    in_flight.spawn(async move {
        lookup.get_metrics(&input, view.as_ref()).await;
    });
}

async fn drain(in_flight: &mut JoinSet<()>) {
    while let Some(joined) = in_flight.join_next().await {
        if let Err(e) = joined {
            error!("Lookup task failed: {}", e);
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}
