//! The order record and its source channel.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{OrderId, Timestamp, ValidationError};

/// Sales channel an order arrived through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderSource {
    #[serde(rename = "dine_in")]
    DineIn,
    #[serde(rename = "online")]
    Online,
    #[serde(rename = "ubereats")]
    UberEats,
    #[serde(rename = "doordash")]
    DoorDash,
}

impl OrderSource {
    /// Stable lowercase label, matching the wire/display form.
    pub fn label(&self) -> &'static str {
        match self {
            OrderSource::DineIn => "dine_in",
            OrderSource::Online => "online",
            OrderSource::UberEats => "ubereats",
            OrderSource::DoorDash => "doordash",
        }
    }
}

impl fmt::Display for OrderSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single kitchen order.
///
/// Immutable once created; lifecycle state (active vs. completed) is
/// tracked by the queue, not by the order itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    source: OrderSource,
    item_count: u32,
    placed_at: Timestamp,
}

impl Order {
    /// Creates a new order with a fresh id, rejecting an empty item list.
    pub fn new(source: OrderSource, item_count: u32) -> Result<Self, ValidationError> {
        if item_count == 0 {
            return Err(ValidationError::not_positive("item_count", 0));
        }
        Ok(Self {
            id: OrderId::new(),
            source,
            item_count,
            placed_at: Timestamp::now(),
        })
    }

    /// Returns the order's unique id.
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Returns the source channel.
    pub fn source(&self) -> OrderSource {
        self.source
    }

    /// Returns the number of items on the order.
    pub fn item_count(&self) -> u32 {
        self.item_count
    }

    /// Returns when the order was placed.
    pub fn placed_at(&self) -> Timestamp {
        self.placed_at
    }
}
