//! Read models for the kitchen monitor and display.

use serde::Serialize;

use crate::domain::foundation::{StaffingLevel, Timestamp};
use crate::domain::order::Order;
use crate::domain::prep::{PrepTimeChange, PrepTimeDecision};

/// One card on the kitchen display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCard {
    /// Short ticket token, e.g. `O3FA9`.
    pub ticket: String,
    /// Source channel label.
    pub source: String,
    pub item_count: u32,
    pub placed_at: Timestamp,
}

impl OrderCard {
    /// Builds a card from an order record.
    pub fn from_order(order: &Order) -> Self {
        Self {
            ticket: order.id().ticket(),
            source: order.source().label().to_string(),
            item_count: order.item_count(),
            placed_at: order.placed_at(),
        }
    }
}

/// Everything the rendering layer needs for one frame.
///
/// Produced by the view query; the pending change notification is
/// consumed by building the view, so it appears at most once.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KitchenView {
    /// Monitor metric: number of active orders.
    pub active_count: usize,
    /// Monitor metric: current staffing level.
    pub staffing: StaffingLevel,
    /// Monitor metric: current prep-time estimate in minutes.
    pub prep_minutes: u32,

    /// Active orders in insertion order.
    pub active_orders: Vec<OrderCard>,
    /// Recently completed orders, most recent first, bounded window.
    pub completed_orders: Vec<OrderCard>,

    /// The decision behind the current estimate.
    pub current_decision: PrepTimeDecision,
    /// Change notification, present at most once per change.
    pub pending_change: Option<PrepTimeChange>,
    /// Recent log entries, oldest first, bounded window.
    pub recent_decisions: Vec<PrepTimeDecision>,
    /// Last successful summary, absent until one was obtained.
    pub summary: Option<String>,
}
