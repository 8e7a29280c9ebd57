//! Output sinks for rendered lookup results.
//!
//! A `ResultsView` plays the part of the single text element that every lookup
//! overwrites. Lookups running at the same time share one view and the last
//! write wins.
use std::io::Write;

/// Sink whose text is replaced by each lookup.
pub trait ResultsView: Send + Sync {
    /// Replaces the current text of the view.
    fn set_text(&self, text: String);
}

/// View that prints every text block to stdout.
#[derive(Debug, Default)]
pub struct StdoutView;

impl ResultsView for StdoutView {
    fn set_text(&self, text: String) {
        let mut out = std::io::stdout().lock();
        // Write errors on stdout are dropped.
        let _ = writeln!(out, "{}", text).and_then(|_| out.flush());
    }
}


#[cfg(test)]
mod tests {
    use super::recording::RecordingView;
    use super::*;

    #[test]
    fn each_write_replaces_previous_text() {
        let view = RecordingView::default();
        view.set_text("first".to_string());
        view.set_text("second".to_string());
        assert_eq!(view.text(), "second");
        assert_eq!(view.writes(), 2);
    }
}
