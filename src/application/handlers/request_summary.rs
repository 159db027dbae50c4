//! RequestSummaryHandler - Command handler for refreshing the summary.
//!
//! Hands the most recent log entries (oldest first) to the summarizer
//! port. On failure the error is surfaced for user-visible reporting
//! and any previously obtained summary stays in place; there is no
//! retry.

use std::sync::Arc;

use crate::application::session::SharedSession;
use crate::ports::{SummaryError, Summarizer};

/// Result of a successful summary refresh.
#[derive(Debug, Clone)]
pub struct RequestSummaryResult {
    /// The freshly obtained summary text.
    pub summary: String,
    /// How many decisions were summarized.
    pub decisions_summarized: usize,
}

/// Handler for summary requests.
pub struct RequestSummaryHandler {
    session: SharedSession,
    summarizer: Arc<dyn Summarizer>,
    window: usize,
}

impl RequestSummaryHandler {
    /// Creates a handler summarizing the last `window` log entries.
    pub fn new(session: SharedSession, summarizer: Arc<dyn Summarizer>, window: usize) -> Self {
        Self {
            session,
            summarizer,
            window,
        }
    }

    pub async fn handle(&self) -> Result<RequestSummaryResult, SummaryError> {
        // Snapshot under the lock; the await below runs without it.
        let decisions = {
            let session = self.session.lock().expect("kitchen session lock poisoned");
            session.log().recent(self.window)
        };

        let summary = self.summarizer.summarize(&decisions).await.map_err(|e| {
            tracing::warn!("summary request failed: {}", e);
            e
        })?;

        {
            let mut session = self.session.lock().expect("kitchen session lock poisoned");
            session.set_summary(summary.clone());
        }

        tracing::info!(decisions = decisions.len(), "summary refreshed");

        Ok(RequestSummaryResult {
            summary,
            decisions_summarized: decisions.len(),
        })
    }
}
