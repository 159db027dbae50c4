//! SetStaffingHandler - Command handler for changing staffing.
//!
//! Accepts any positive percentage; the engine maps off-table values to
//! the neutral multiplier. The console's discrete choices live in
//! configuration, not here.

use crate::application::session::SharedSession;
use crate::domain::foundation::{StaffingLevel, ValidationError};
use crate::domain::prep::PrepTimeDecision;

/// Command to change the staffing level.
#[derive(Debug, Clone, Copy)]
pub struct SetStaffingCommand {
    /// New staffing percentage.
    pub percent: u16,
}

/// Result of successfully changing staffing.
#[derive(Debug, Clone)]
pub struct SetStaffingResult {
    /// The applied staffing level.
    pub staffing: StaffingLevel,
    /// The refreshed estimate.
    pub decision: PrepTimeDecision,
}

/// Handler for staffing changes.
pub struct SetStaffingHandler {
    session: SharedSession,
}

impl SetStaffingHandler {
    pub fn new(session: SharedSession) -> Self {
        Self { session }
    }

    pub fn handle(&self, cmd: SetStaffingCommand) -> Result<SetStaffingResult, ValidationError> {
        let staffing = StaffingLevel::try_new(cmd.percent)?;

        let mut session = self.session.lock().expect("kitchen session lock poisoned");
        session.set_staffing(staffing);
        let decision = session.refresh().clone();

        tracing::info!(
            staffing = %staffing,
            prep_minutes = decision.final_minutes,
            "staffing changed"
        );

        Ok(SetStaffingResult { staffing, decision })
    }
}
