//! API path constants and URL helpers.

use crate::tickers::Ticker;

/// Path prefix of the per-ticker metrics endpoint.
pub const TICKER_PATH: &str = "/api/ticker/";
/// Server used when neither `--server` nor `TICKER_SERVER` is given.
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";

/// Request path for a ticker: `TICKER_PATH` followed by the symbol, unescaped.
pub fn ticker_path(ticker: &Ticker) -> String {
    format!("{}{}", TICKER_PATH, ticker)
}

/// Full request URL for a ticker against the given server base.
pub fn ticker_url(base: &str, ticker: &Ticker) -> String {
    format!("{}{}", base.trim_end_matches('/'), ticker_path(ticker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_prefix_plus_uppercase_symbol() {
        for raw in ["aapl", "Msft", "", "spy etf", "a/b", "ß"] {
            let ticker = Ticker::new(raw);
            assert_eq!(ticker_path(&ticker), format!("/api/ticker/{}", raw.to_uppercase()));
        }
    }

    #[test]
    fn url_joins_base_without_double_slash() {
        let ticker = Ticker::new("aapl");
        assert_eq!(
            ticker_url("http://localhost:5000/", &ticker),
            "http://localhost:5000/api/ticker/AAPL"
        );
        assert_eq!(
            ticker_url(DEFAULT_SERVER, &Ticker::new("")),
            "http://127.0.0.1:5000/api/ticker/"
        );
    }
}
