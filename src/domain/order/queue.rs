//! Active and completed order collections.

use serde::Serialize;
use std::collections::VecDeque;
use thiserror::Error;

use crate::domain::foundation::OrderId;

use super::Order;

/// Completing an order that is not in the active queue (already
/// completed, or never existed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Order not found in active queue: {0}")]
pub struct OrderNotFound(pub OrderId);

/// Read-only view of queue contents at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueSnapshot {
    /// Active orders in insertion order.
    pub active: Vec<Order>,
    /// Completed orders, most recent first.
    pub completed: Vec<Order>,
}

/// The live order queue.
///
/// Active orders keep insertion order (the display groups by arrival);
/// completed orders are kept most-recent-first. An order id appears in
/// at most one of the two collections; uniqueness is guaranteed by the
/// id generator, so no insertion check is performed.
#[derive(Debug, Clone, Default)]
pub struct OrderQueue {
    active: Vec<Order>,
    completed: VecDeque<Order>,
}

impl OrderQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an order to the active queue.
    pub fn enqueue(&mut self, order: Order) {
        self.active.push(order);
    }

    /// Moves the order with the given id from active to completed.
    ///
    /// Safe to call with a stale id: fails with [`OrderNotFound`] and
    /// leaves both collections untouched.
    pub fn complete(&mut self, id: OrderId) -> Result<Order, OrderNotFound> {
        let position = self
            .active
            .iter()
            .position(|order| order.id() == id)
            .ok_or(OrderNotFound(id))?;

        let order = self.active.remove(position);
        self.completed.push_front(order.clone());
        Ok(order)
    }

    /// Empties the active queue. Completed history is untouched.
    pub fn clear_active(&mut self) -> usize {
        let cleared = self.active.len();
        self.active.clear();
        cleared
    }

    /// Number of active orders, the load input to the prep-time engine.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Number of completed orders retained this session.
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Active orders in insertion order.
    pub fn active(&self) -> &[Order] {
        &self.active
    }

    /// Completed orders, most recent first.
    pub fn completed(&self) -> impl Iterator<Item = &Order> {
        self.completed.iter()
    }

    /// Read-only snapshot of both collections for rendering.
    pub fn snapshot(&self) -> QueueSnapshot {
        QueueSnapshot {
            active: self.active.clone(),
            completed: self.completed.iter().cloned().collect(),
        }
    }
}
