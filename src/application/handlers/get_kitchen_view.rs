//! GetKitchenViewHandler - Query handler for the rendering layer.
//!
//! Assembles one frame of display state. Building the view consumes the
//! pending change notification, so each change is rendered at most
//! once.

use crate::application::session::SharedSession;
use crate::application::view::{KitchenView, OrderCard};
use crate::config::KitchenConfig;

/// Query handler producing the kitchen view.
pub struct GetKitchenViewHandler {
    session: SharedSession,
    completed_window: usize,
    log_window: usize,
}

impl GetKitchenViewHandler {
    /// Creates a handler with the configured display windows.
    pub fn new(session: SharedSession, config: &KitchenConfig) -> Self {
        Self {
            session,
            completed_window: config.completed_window,
            log_window: config.log_window,
        }
    }

    pub fn handle(&self) -> KitchenView {
        let mut session = self.session.lock().expect("kitchen session lock poisoned");

        let active_orders: Vec<OrderCard> = session
            .queue()
            .active()
            .iter()
            .map(OrderCard::from_order)
            .collect();
        let completed_orders: Vec<OrderCard> = session
            .queue()
            .completed()
            .take(self.completed_window)
            .map(OrderCard::from_order)
            .collect();
        let current_decision = session.current_decision().clone();
        let recent_decisions = session.log().recent(self.log_window);
        let summary = session.summary().cloned();
        let pending_change = session.take_pending_change();

        KitchenView {
            active_count: active_orders.len(),
            staffing: session.staffing(),
            prep_minutes: current_decision.final_minutes,
            active_orders,
            completed_orders,
            current_decision,
            pending_change,
            recent_decisions,
            summary,
        }
    }
}
