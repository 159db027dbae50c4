//! Synthetic order generation.

use rand::Rng;
use std::ops::RangeInclusive;

use crate::domain::foundation::ValidationError;

use super::{Order, OrderSource};

/// Generates synthetic orders for a given source channel.
///
/// Item counts are drawn uniformly from a configurable inclusive range
/// (default 1..=5). Ids come from the order itself, so every generated
/// order is unique.
#[derive(Debug, Clone)]
pub struct OrderFactory {
    item_range: RangeInclusive<u32>,
}

impl OrderFactory {
    /// Creates a factory with the default 1..=5 item range.
    pub fn new() -> Self {
        Self { item_range: 1..=5 }
    }

    /// Creates a factory drawing item counts from `min..=max`.
    pub fn with_item_range(min: u32, max: u32) -> Result<Self, ValidationError> {
        if min == 0 {
            return Err(ValidationError::not_positive("item_count_min", 0));
        }
        if min > max {
            return Err(ValidationError::empty_range(
                "item_count_range",
                i64::from(min),
                i64::from(max),
            ));
        }
        Ok(Self {
            item_range: min..=max,
        })
    }

    /// Returns the configured item count range.
    pub fn item_range(&self) -> &RangeInclusive<u32> {
        &self.item_range
    }

    /// Generates an order with a randomized item count.
    pub fn make(&self, source: OrderSource) -> Order {
        let item_count = rand::thread_rng().gen_range(self.item_range.clone());
        Order::new(source, item_count).expect("item range lower bound is at least 1")
    }

    /// Generates an order with an explicit item count.
    pub fn make_with_items(
        &self,
        source: OrderSource,
        item_count: u32,
    ) -> Result<Order, ValidationError> {
        Order::new(source, item_count)
    }
}

impl Default for OrderFactory {
    fn default() -> Self {
        Self::new()
    }
}
