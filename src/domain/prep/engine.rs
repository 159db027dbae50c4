//! Rule-table prep-time engine.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::foundation::{StaffingLevel, Timestamp, ValidationError};

use super::PrepTimeDecision;

/// Default base prep time in minutes.
pub const DEFAULT_BASE_MINUTES: u32 = 35;

/// Load-adjustment tiers as (order count lower bound, minutes added),
/// checked top down. Kept as a table so the rule set stays auditable.
const LOAD_TIERS: [(usize, u32); 4] = [(35, 30), (25, 20), (15, 10), (0, 0)];

/// Staffing multiplier table, exact keys only. Percentages outside the
/// table get a neutral 1.0; there is no interpolation between keys.
static STAFFING_MULTIPLIERS: Lazy<HashMap<u16, f64>> =
    Lazy::new(|| HashMap::from([(50, 1.5), (75, 1.2), (100, 1.0), (125, 0.8)]));

/// Pure prep-time estimator.
///
/// Maps (active order count, staffing level) to an adjusted estimate
/// plus a justification string. No side effects; identical inputs
/// always produce the identical estimate and justification.
#[derive(Debug, Clone)]
pub struct PrepTimeEngine {
    base_minutes: u32,
}

impl PrepTimeEngine {
    /// Creates an engine with the given base prep time, rejecting zero.
    pub fn new(base_minutes: u32) -> Result<Self, ValidationError> {
        if base_minutes == 0 {
            return Err(ValidationError::not_positive("base_minutes", 0));
        }
        Ok(Self { base_minutes })
    }

    /// Returns the configured base prep time.
    pub fn base_minutes(&self) -> u32 {
        self.base_minutes
    }

    /// Computes the estimate for the current load and staffing.
    ///
    /// `final_minutes = base + floor(load_adjustment * multiplier)`,
    /// truncation toward zero.
    pub fn compute(&self, active_orders: usize, staffing: StaffingLevel) -> PrepTimeDecision {
        let load_adjustment = load_adjustment(active_orders);
        let multiplier = staffing_multiplier(staffing);
        let adjustment_minutes = (f64::from(load_adjustment) * multiplier) as u32;
        let final_minutes = self.base_minutes + adjustment_minutes;

        let justification = format!(
            "{} active orders with {}% staff resulted in +{} min adjustment.",
            active_orders,
            staffing.percent(),
            adjustment_minutes
        );

        PrepTimeDecision {
            active_orders,
            staffing,
            base_minutes: self.base_minutes,
            load_adjustment,
            multiplier,
            adjustment_minutes,
            final_minutes,
            justification,
            decided_at: Timestamp::now(),
        }
    }
}

impl Default for PrepTimeEngine {
    fn default() -> Self {
        Self {
            base_minutes: DEFAULT_BASE_MINUTES,
        }
    }
}

/// Minutes added for the given active order count.
fn load_adjustment(active_orders: usize) -> u32 {
    LOAD_TIERS
        .iter()
        .find(|(floor, _)| active_orders >= *floor)
        .map(|(_, minutes)| *minutes)
        .unwrap_or(0)
}

/// Multiplier for the given staffing level, neutral when off-table.
fn staffing_multiplier(staffing: StaffingLevel) -> f64 {
    STAFFING_MULTIPLIERS
        .get(&staffing.percent())
        .copied()
        .unwrap_or(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn staffing(percent: u16) -> StaffingLevel {
        StaffingLevel::try_new(percent).unwrap()
    }

    #[test]
    fn rejects_zero_base_time() {
        assert!(matches!(
            PrepTimeEngine::new(0),
            Err(ValidationError::NotPositive { .. })
        ));
    }

    #[test]
    fn default_base_is_35_minutes() {
        assert_eq!(PrepTimeEngine::default().base_minutes(), 35);
    }

    #[test]
    fn load_tier_boundaries() {
        assert_eq!(load_adjustment(0), 0);
        assert_eq!(load_adjustment(14), 0);
        assert_eq!(load_adjustment(15), 10);
        assert_eq!(load_adjustment(24), 10);
        assert_eq!(load_adjustment(25), 20);
        assert_eq!(load_adjustment(34), 20);
        assert_eq!(load_adjustment(35), 30);
        assert_eq!(load_adjustment(100), 30);
    }

    #[test]
    fn known_staffing_levels_use_the_table() {
        assert_eq!(staffing_multiplier(staffing(50)), 1.5);
        assert_eq!(staffing_multiplier(staffing(75)), 1.2);
        assert_eq!(staffing_multiplier(staffing(100)), 1.0);
        assert_eq!(staffing_multiplier(staffing(125)), 0.8);
    }

    #[test]
    fn off_table_staffing_behaves_like_full_staffing() {
        let engine = PrepTimeEngine::default();
        let at_90 = engine.compute(20, staffing(90));
        let at_100 = engine.compute(20, staffing(100));
        assert_eq!(at_90.final_minutes, at_100.final_minutes);
        assert_eq!(at_90.multiplier, 1.0);
    }

    #[test]
    fn worked_example_20_orders_75_percent() {
        let engine = PrepTimeEngine::default();
        let decision = engine.compute(20, staffing(75));

        assert_eq!(decision.load_adjustment, 10);
        assert_eq!(decision.multiplier, 1.2);
        assert_eq!(decision.adjustment_minutes, 12);
        assert_eq!(decision.final_minutes, 47);
        assert_eq!(
            decision.justification,
            "20 active orders with 75% staff resulted in +12 min adjustment."
        );
    }

    #[test]
    fn overstaffed_busy_kitchen_discounts_the_load() {
        let engine = PrepTimeEngine::default();
        let decision = engine.compute(40, staffing(125));
        assert_eq!(decision.adjustment_minutes, 24); // 30 * 0.8
        assert_eq!(decision.final_minutes, 59);
    }

    #[test]
    fn quiet_kitchen_keeps_the_base_estimate() {
        let engine = PrepTimeEngine::default();
        let decision = engine.compute(0, StaffingLevel::default());
        assert_eq!(decision.final_minutes, 35);
        assert_eq!(
            decision.justification,
            "0 active orders with 100% staff resulted in +0 min adjustment."
        );
    }

    proptest! {
        #[test]
        fn compute_is_deterministic(orders in 0usize..200, percent in 1u16..300) {
            let engine = PrepTimeEngine::default();
            let first = engine.compute(orders, staffing(percent));
            let second = engine.compute(orders, staffing(percent));
            prop_assert_eq!(first.final_minutes, second.final_minutes);
            prop_assert_eq!(first.justification, second.justification);
        }

        #[test]
        fn estimate_never_drops_below_base(orders in 0usize..200, percent in 1u16..300) {
            let engine = PrepTimeEngine::default();
            let decision = engine.compute(orders, staffing(percent));
            prop_assert!(decision.final_minutes >= decision.base_minutes);
            prop_assert_eq!(
                decision.final_minutes,
                decision.base_minutes + decision.adjustment_minutes
            );
        }
    }
}
