//! Looking up ticker metrics over HTTP.
//!
//! `TickerLookup` turns one piece of user input into one `GET /api/ticker/{TICKER}`
//! request and writes either the indented JSON body or an `Error: ...` line into
//! a `ResultsView`.
use log::{debug, info, warn};
use serde_json::Value;
use ticker_common::net::{ticker_path, ticker_url};
use ticker_common::{Result, Ticker};

use crate::view::ResultsView;

/// Prefix of every failure text written to the view.
pub const ERROR_PREFIX: &str = "Error: ";

/// Request path for raw user input: `/api/ticker/` plus the uppercased input.
pub fn request_path(input: &str) -> String {
    ticker_path(&Ticker::new(input))
}

/// Renders a lookup outcome as the text shown in the view.
///
/// Values are pretty-printed with two-space indentation; errors become
/// `Error: ` followed by the error message.
pub fn render(outcome: Result<Value>) -> String {
    let text = outcome.and_then(|value| Ok(serde_json::to_string_pretty(&value)?));
    match text {
        Ok(text) => text,
        Err(e) => format!("{}{}", ERROR_PREFIX, e),
    }
}

/// Helper type for fetching ticker metrics from one server.
#[derive(Debug, Clone)]
pub struct TickerLookup {
    http: reqwest::Client,
    base_url: String,
}

impl TickerLookup {
    /// Creates a lookup against `base_url` with a default HTTP client.
    pub fn new(base_url: &str) -> Self {
        TickerLookup {
            http: reqwest::Client::new(),
            base_url: base_url.to_string(),
        }
    }

    /// Issues the request for `input` and parses the body as JSON.
    ///
    /// The HTTP status is not checked: any body that parses as JSON is a
    /// success, whatever the status code.
    pub async fn fetch(&self, input: &str) -> Result<Value> {
        let ticker = Ticker::new(input);
        let url = ticker_url(&self.base_url, &ticker);

        info!("Requesting {}", url);
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            debug!("{} answered with status {}", url, status);
        }

        let body = response.text().await?;
        debug!("Received {} bytes for {}", body.len(), ticker);
        Ok(serde_json::from_str(&body)?)
    }

    /// Looks up `input` and replaces the view's text with the outcome.
    ///
    /// Writes to the view exactly once. Failures are only displayed, never
    /// returned.
    pub async fn get_metrics(&self, input: &str, view: &dyn ResultsView) {
        let outcome = self.fetch(input).await;
        if let Err(e) = &outcome {
            warn!("Lookup of {} failed: {}", request_path(input), e);
        }
        view.set_text(render(outcome));
    }
}
