//! AddOrdersHandler - Command handler for placing orders.
//!
//! Places `count` orders from one source channel, each with a random
//! item count unless an explicit one is given, then re-runs the
//! estimate.

use crate::application::session::SharedSession;
use crate::domain::foundation::ValidationError;
use crate::domain::order::{Order, OrderSource};
use crate::domain::prep::PrepTimeDecision;

/// Command to place one or more orders.
#[derive(Debug, Clone)]
pub struct AddOrdersCommand {
    /// Channel the orders arrive through.
    pub source: OrderSource,
    /// How many orders to place.
    pub count: u32,
    /// Explicit item count per order; random when absent.
    pub item_count: Option<u32>,
}

/// Result of successfully placing orders.
#[derive(Debug, Clone)]
pub struct AddOrdersResult {
    /// The newly placed orders, in placement order.
    pub created: Vec<Order>,
    /// The refreshed estimate.
    pub decision: PrepTimeDecision,
}

/// Handler for placing orders.
pub struct AddOrdersHandler {
    session: SharedSession,
}

impl AddOrdersHandler {
    pub fn new(session: SharedSession) -> Self {
        Self { session }
    }

    pub fn handle(&self, cmd: AddOrdersCommand) -> Result<AddOrdersResult, ValidationError> {
        if cmd.count == 0 {
            return Err(ValidationError::not_positive("count", 0));
        }
        if let Some(0) = cmd.item_count {
            return Err(ValidationError::not_positive("item_count", 0));
        }

        let mut session = self.session.lock().expect("kitchen session lock poisoned");

        let mut created = Vec::with_capacity(cmd.count as usize);
        for _ in 0..cmd.count {
            let order = match cmd.item_count {
                Some(items) => session.factory().make_with_items(cmd.source, items)?,
                None => session.factory().make(cmd.source),
            };
            session.queue_mut().enqueue(order.clone());
            created.push(order);
        }

        let decision = session.refresh().clone();
        tracing::info!(
            source = %cmd.source,
            count = cmd.count,
            active = decision.active_orders,
            prep_minutes = decision.final_minutes,
            "orders placed"
        );

        Ok(AddOrdersResult { created, decision })
    }
}
