//! Command-line arguments for the Ticker Client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use ticker_common::net::DEFAULT_SERVER;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the metrics server.
    #[clap(long, env = "TICKER_SERVER", default_value = DEFAULT_SERVER)]
    pub server: String,

    /// Single ticker to look up. Case does not matter.
    #[clap(long, conflicts_with = "path")]
    pub ticker: Option<String>,

    /// Path to a text file with tickers to look up.
    /// Tickers may be separated by commas, spaces, or new lines.
    #[clap(long)]
    pub path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_server_and_interactive_mode() {
        let args = Args::try_parse_from(["ticker_client"]).unwrap();
        assert!(args.ticker.is_none());
        assert!(args.path.is_none());
        // TICKER_SERVER may be set in the environment running the tests.
        if std::env::var_os("TICKER_SERVER").is_none() {
            assert_eq!(args.server, DEFAULT_SERVER);
        }
    }

    #[test]
    fn ticker_and_path_are_exclusive() {
        let res = Args::try_parse_from(["ticker_client", "--ticker", "aapl", "--path", "t.txt"]);
        assert!(res.is_err());
    }

    #[test]
    fn empty_ticker_is_accepted() {
        let args = Args::try_parse_from(["ticker_client", "--ticker", ""]).unwrap();
        assert_eq!(args.ticker.as_deref(), Some(""));
    }
}
