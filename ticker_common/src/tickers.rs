//! Ticker symbols and helpers for reading them from files.

use std::convert::Infallible;
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use crate::error::LookupError;

/// Trait providing file parsing for tickers.
pub trait TickerParser {
    /// Parses tickers from a buffered reader.
    ///
    /// Tickers may be separated by commas, whitespace, or new lines. Empty
    /// entries are skipped. Returns an error if the reader fails or if the
    /// input holds no ticker at all.
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<Ticker>, LookupError>;
}

impl TickerParser for Ticker {
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<Self>, LookupError> {
        let mut tickers = Vec::new();

        for line_result in reader.lines() {
            let line = line_result.map_err(LookupError::Io)?;
            tickers.extend(
                line.split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|entry| !entry.is_empty())
                    .map(Ticker::new),
            );
        }

        if tickers.is_empty() {
            return Err(LookupError::ParseTickersFile(
                "no tickers found".to_string(),
            ));
        }
        Ok(tickers)
    }
}

/// A stock symbol as entered by the user, normalized to uppercase.
///
/// No other validation is applied: any text, including the empty string,
/// makes a ticker. Whether the symbol exists is up to the server.
#[derive(Debug, Clone, Default, Hash, Eq, PartialEq)]
pub struct Ticker(String);

impl Ticker {
    /// Builds a ticker from raw input by uppercasing it.
    pub fn new(raw: &str) -> Self {
        Ticker(raw.to_uppercase())
    }

    /// Returns the normalized symbol.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Ticker {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Ticker::new(s))
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
