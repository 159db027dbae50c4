//! Mock summarizer for testing.
//!
//! Configurable to return scripted summaries or inject errors, and
//! records the decisions each call received for assertions.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::prep::PrepTimeDecision;
use crate::ports::{SummaryError, Summarizer};

/// Scripted summarizer for tests.
///
/// Responses are consumed in order; once the script is exhausted (or if
/// none was configured) a fixed canned summary is returned.
#[derive(Debug, Clone, Default)]
pub struct MockSummarizer {
    responses: Arc<Mutex<VecDeque<Result<String, SummaryError>>>>,
    calls: Arc<Mutex<Vec<Vec<PrepTimeDecision>>>>,
}

impl MockSummarizer {
    /// Creates a mock that answers every call with the canned summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful summary.
    pub fn with_summary(self, text: impl Into<String>) -> Self {
        self.responses
            .lock()
            .expect("MockSummarizer: responses lock poisoned")
            .push_back(Ok(text.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: SummaryError) -> Self {
        self.responses
            .lock()
            .expect("MockSummarizer: responses lock poisoned")
            .push_back(Err(error));
        self
    }

    /// Number of summarize calls made.
    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .expect("MockSummarizer: calls lock poisoned")
            .len()
    }

    /// The decision batches each call received.
    pub fn calls(&self) -> Vec<Vec<PrepTimeDecision>> {
        self.calls
            .lock()
            .expect("MockSummarizer: calls lock poisoned")
            .clone()
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(&self, decisions: &[PrepTimeDecision]) -> Result<String, SummaryError> {
        self.calls
            .lock()
            .expect("MockSummarizer: calls lock poisoned")
            .push(decisions.to_vec());

        self.responses
            .lock()
            .expect("MockSummarizer: responses lock poisoned")
            .pop_front()
            .unwrap_or_else(|| Ok("Prep time held steady.".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::StaffingLevel;
    use crate::domain::prep::PrepTimeEngine;

    fn one_decision() -> Vec<PrepTimeDecision> {
        vec![PrepTimeEngine::default().compute(20, StaffingLevel::default())]
    }

    #[tokio::test]
    async fn scripted_responses_are_consumed_in_order() {
        let mock = MockSummarizer::new()
            .with_summary("first")
            .with_error(SummaryError::AuthenticationFailed);

        assert_eq!(mock.summarize(&one_decision()).await.unwrap(), "first");
        assert!(matches!(
            mock.summarize(&one_decision()).await,
            Err(SummaryError::AuthenticationFailed)
        ));
    }

    #[tokio::test]
    async fn falls_back_to_canned_summary() {
        let mock = MockSummarizer::new();
        assert_eq!(
            mock.summarize(&one_decision()).await.unwrap(),
            "Prep time held steady."
        );
    }

    #[tokio::test]
    async fn records_received_decisions() {
        let mock = MockSummarizer::new();
        mock.summarize(&one_decision()).await.unwrap();

        assert_eq!(mock.call_count(), 1);
        assert_eq!(mock.calls()[0][0].active_orders, 20);
    }
}
