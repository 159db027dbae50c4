//! ClearOrdersHandler - Command handler for emptying the active queue.
//!
//! Completed history is untouched; the estimate falls back to the base
//! time on the refresh that follows.

use crate::application::session::SharedSession;
use crate::domain::prep::PrepTimeDecision;

/// Result of clearing the active queue.
#[derive(Debug, Clone)]
pub struct ClearOrdersResult {
    /// How many active orders were dropped.
    pub cleared: usize,
    /// The refreshed estimate.
    pub decision: PrepTimeDecision,
}

/// Handler for clearing the active queue.
pub struct ClearOrdersHandler {
    session: SharedSession,
}

impl ClearOrdersHandler {
    pub fn new(session: SharedSession) -> Self {
        Self { session }
    }

    pub fn handle(&self) -> ClearOrdersResult {
        let mut session = self.session.lock().expect("kitchen session lock poisoned");

        let cleared = session.queue_mut().clear_active();
        let decision = session.refresh().clone();

        tracing::info!(cleared, prep_minutes = decision.final_minutes, "queue cleared");

        ClearOrdersResult { cleared, decision }
    }
}
