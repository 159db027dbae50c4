//! CompleteOrderHandler - Command handler for completing an order.
//!
//! Moves the order from the active queue to the completed history and
//! re-runs the estimate. A stale id (already completed, or never
//! existed) is recovered as a no-op: the queue stays untouched and the
//! result reports that nothing was completed.

use crate::application::session::SharedSession;
use crate::domain::foundation::OrderId;
use crate::domain::order::Order;
use crate::domain::prep::PrepTimeDecision;

/// Command to complete an active order.
#[derive(Debug, Clone, Copy)]
pub struct CompleteOrderCommand {
    /// Id of the order to complete.
    pub order_id: OrderId,
}

/// Result of a complete-order command.
#[derive(Debug, Clone)]
pub struct CompleteOrderResult {
    /// The completed order, or `None` when the id was stale.
    pub completed: Option<Order>,
    /// The current estimate (refreshed only if an order was removed).
    pub decision: PrepTimeDecision,
}

/// Handler for completing orders.
pub struct CompleteOrderHandler {
    session: SharedSession,
}

impl CompleteOrderHandler {
    pub fn new(session: SharedSession) -> Self {
        Self { session }
    }

    pub fn handle(&self, cmd: CompleteOrderCommand) -> CompleteOrderResult {
        let mut session = self.session.lock().expect("kitchen session lock poisoned");

        match session.queue_mut().complete(cmd.order_id) {
            Ok(order) => {
                let decision = session.refresh().clone();
                tracing::info!(
                    order = %order.id().ticket(),
                    active = decision.active_orders,
                    "order completed"
                );
                CompleteOrderResult {
                    completed: Some(order),
                    decision,
                }
            }
            Err(not_found) => {
                tracing::warn!(order_id = %cmd.order_id, "{}", not_found);
                CompleteOrderResult {
                    completed: None,
                    decision: session.current_decision().clone(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::{AddOrdersCommand, AddOrdersHandler};
    use crate::application::session::KitchenSession;
    use crate::config::KitchenConfig;
    use crate::domain::order::OrderSource;
    use std::sync::{Arc, Mutex};

    fn session_with_orders(count: u32) -> (SharedSession, Vec<Order>) {
        let session: SharedSession = Arc::new(Mutex::new(
            KitchenSession::new(&KitchenConfig::default()).unwrap(),
        ));
        let created = AddOrdersHandler::new(session.clone())
            .handle(AddOrdersCommand {
                source: OrderSource::Online,
                count,
                item_count: None,
            })
            .unwrap()
            .created;
        (session, created)
    }

    #[test]
    fn completes_an_active_order() {
        let (session, orders) = session_with_orders(3);
        let handler = CompleteOrderHandler::new(session.clone());

        let result = handler.handle(CompleteOrderCommand {
            order_id: orders[1].id(),
        });

        assert_eq!(result.completed.as_ref().unwrap().id(), orders[1].id());
        let guard = session.lock().unwrap();
        assert_eq!(guard.queue().active_count(), 2);
        assert_eq!(guard.queue().completed_count(), 1);
    }

    #[test]
    fn stale_id_is_a_no_op() {
        let (session, orders) = session_with_orders(3);
        let handler = CompleteOrderHandler::new(session.clone());

        handler.handle(CompleteOrderCommand {
            order_id: orders[0].id(),
        });
        // Second completion of the same id.
        let result = handler.handle(CompleteOrderCommand {
            order_id: orders[0].id(),
        });

        assert!(result.completed.is_none());
        let guard = session.lock().unwrap();
        assert_eq!(guard.queue().active_count(), 2);
        assert_eq!(guard.queue().completed_count(), 1);
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let (session, _) = session_with_orders(2);
        let handler = CompleteOrderHandler::new(session.clone());

        let result = handler.handle(CompleteOrderCommand {
            order_id: OrderId::new(),
        });

        assert!(result.completed.is_none());
        assert_eq!(session.lock().unwrap().queue().active_count(), 2);
    }

    #[test]
    fn completion_across_a_tier_boundary_lowers_the_estimate() {
        let (session, orders) = session_with_orders(15);
        let handler = CompleteOrderHandler::new(session.clone());
        session.lock().unwrap().take_pending_change();

        let result = handler.handle(CompleteOrderCommand {
            order_id: orders[0].id(),
        });

        // 15 -> 14 active drops the first load tier.
        assert_eq!(result.decision.final_minutes, 35);
        let change = session.lock().unwrap().take_pending_change().unwrap();
        assert_eq!(change.delta_minutes, -10);
    }
}
