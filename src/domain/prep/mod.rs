//! Prep-time decision module.
//!
//! A pure rule-table engine turns (active order count, staffing level)
//! into an adjusted prep-time estimate, a capacity-bounded log records
//! estimate changes, and a notifier surfaces directional changes.

mod decision;
mod engine;
mod log;
mod notifier;

pub use decision::PrepTimeDecision;
pub use engine::{PrepTimeEngine, DEFAULT_BASE_MINUTES};
pub use log::DecisionLog;
pub use notifier::{ChangeDirection, ChangeNotifier, PrepTimeChange};
