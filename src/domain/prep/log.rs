//! Rolling decision log.

use std::collections::VecDeque;

use super::PrepTimeDecision;

/// Oldest entries are dropped past this cap; far beyond any display or
/// summarization window.
const CAPACITY: usize = 256;

/// Ledger of prep-time decisions, deduplicated on unchanged estimates.
///
/// Consecutive entries never share a final time; consumers only ever
/// read the most recent K entries. This state gates *logging* only;
/// change *notification* is the [`ChangeNotifier`](super::ChangeNotifier)'s
/// separate concern.
#[derive(Debug, Clone, Default)]
pub struct DecisionLog {
    entries: VecDeque<PrepTimeDecision>,
}

impl DecisionLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the decision unless it repeats the last logged final
    /// time. Returns whether an entry was appended; callers may use
    /// this to drive display refreshes.
    pub fn record(&mut self, decision: PrepTimeDecision) -> bool {
        let changed = self
            .entries
            .back()
            .map_or(true, |last| last.final_minutes != decision.final_minutes);

        if changed {
            if self.entries.len() == CAPACITY {
                self.entries.pop_front();
            }
            self.entries.push_back(decision);
        }
        changed
    }

    /// The most recently logged decision.
    pub fn last(&self) -> Option<&PrepTimeDecision> {
        self.entries.back()
    }

    /// Number of logged decisions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been logged yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent `count` entries, oldest first.
    pub fn recent(&self, count: usize) -> Vec<PrepTimeDecision> {
        let skip = self.entries.len().saturating_sub(count);
        self.entries.iter().skip(skip).cloned().collect()
    }
}
