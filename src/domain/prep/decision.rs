//! The prep-time decision record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{StaffingLevel, Timestamp};

/// One computed prep-time estimate with its inputs and justification.
///
/// Produced by the engine on every recompute; appended to the decision
/// log only when the final time moved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrepTimeDecision {
    /// Active order count the estimate was computed from.
    pub active_orders: usize,
    /// Staffing level the estimate was computed from.
    pub staffing: StaffingLevel,
    /// Base prep time in minutes.
    pub base_minutes: u32,
    /// Raw load adjustment from the tier table, before staffing.
    pub load_adjustment: u32,
    /// Staffing multiplier applied to the load adjustment.
    pub multiplier: f64,
    /// Final adjustment in minutes: floor(load_adjustment * multiplier).
    pub adjustment_minutes: u32,
    /// Final estimate: base_minutes + adjustment_minutes.
    pub final_minutes: u32,
    /// Human-readable justification for display and summarization.
    pub justification: String,
    /// When the decision was computed.
    pub decided_at: Timestamp,
}

impl PrepTimeDecision {
    /// Renders the decision as one line of summarization context,
    /// e.g. `2024-06-01T18:30:05Z: 20 orders, 75% staff -> 47 mins
    /// (Reason: 20 active orders with 75% staff resulted in +12 min
    /// adjustment.)`.
    pub fn summary_line(&self) -> String {
        format!(
            "{}: {} orders, {}% staff -> {} mins (Reason: {})",
            self.decided_at,
            self.active_orders,
            self.staffing.percent(),
            self.final_minutes,
            self.justification
        )
    }
}
