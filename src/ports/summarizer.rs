//! Summarizer port - interface for LLM-backed shift summaries.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::prep::PrepTimeDecision;

/// Port for natural-language summarization of recent prep-time
/// decisions.
///
/// Implementations call an external language model. The call is not
/// retried on failure: errors are surfaced for user-visible reporting,
/// and any previously obtained summary text is left untouched by the
/// caller.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarizes the given decisions, oldest first.
    async fn summarize(&self, decisions: &[PrepTimeDecision]) -> Result<String, SummaryError>;
}

/// Errors from the external summarization call.
///
/// All variants are non-fatal to the session; the kitchen view simply
/// keeps whatever summary it last had.
#[derive(Debug, Clone, Error)]
pub enum SummaryError {
    /// Provider unreachable or returned a server error.
    #[error("summary unavailable: {message}")]
    Unavailable { message: String },

    /// API key rejected.
    #[error("summary authentication failed")]
    AuthenticationFailed,

    /// Request exceeded the configured timeout.
    #[error("summary request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },

    /// Provider responded with something we could not parse.
    #[error("failed to parse summary response: {0}")]
    Parse(String),
}

impl SummaryError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        SummaryError::Unavailable {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_displays_the_transport_message() {
        let err = SummaryError::unavailable("connection refused");
        assert_eq!(format!("{}", err), "summary unavailable: connection refused");
    }

    #[test]
    fn timeout_displays_the_configured_limit() {
        let err = SummaryError::Timeout { timeout_secs: 60 };
        assert_eq!(format!("{}", err), "summary request timed out after 60s");
    }
}
