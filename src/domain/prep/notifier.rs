//! Directional change notification.

use serde::{Deserialize, Serialize};

/// Direction of a prep-time change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Increase,
    Decrease,
}

/// Notification payload for a prep-time change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepTimeChange {
    /// Increase iff the delta is positive.
    pub direction: ChangeDirection,
    /// Signed change in minutes.
    pub delta_minutes: i32,
    /// The newly computed estimate.
    pub new_minutes: u32,
}

/// Detects changes between consecutive computed prep times.
///
/// Holds the last observed value separately from the decision log's
/// deduplication state: this gates notification, the log gates logging.
/// The stored value only moves on the not-equal branch, so repeated
/// identical estimates never re-fire.
#[derive(Debug, Clone)]
pub struct ChangeNotifier {
    last_observed: u32,
}

impl ChangeNotifier {
    /// Creates a notifier seeded with the base prep time, so the first
    /// unadjusted estimate does not fire.
    pub fn new(initial_minutes: u32) -> Self {
        Self {
            last_observed: initial_minutes,
        }
    }

    /// The last prep time this notifier observed.
    pub fn last_observed(&self) -> u32 {
        self.last_observed
    }

    /// Compares the newly computed estimate against the last observed
    /// one; on a difference, stores the new value and returns the
    /// change payload.
    pub fn on_computed(&mut self, new_minutes: u32) -> Option<PrepTimeChange> {
        if new_minutes == self.last_observed {
            return None;
        }

        let delta_minutes = new_minutes as i32 - self.last_observed as i32;
        self.last_observed = new_minutes;

        Some(PrepTimeChange {
            direction: if delta_minutes > 0 {
                ChangeDirection::Increase
            } else {
                ChangeDirection::Decrease
            },
            delta_minutes,
            new_minutes,
        })
    }
}
