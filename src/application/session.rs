//! Kitchen session state.

use std::sync::{Arc, Mutex};

use crate::config::KitchenConfig;
use crate::domain::foundation::{StaffingLevel, ValidationError};
use crate::domain::order::{OrderFactory, OrderQueue};
use crate::domain::prep::{ChangeNotifier, DecisionLog, PrepTimeChange, PrepTimeDecision, PrepTimeEngine};

/// Shared handle to one session's kitchen state.
///
/// Commands run one at a time in this single-actor model; the mutex
/// guards the handle, it is not a concurrency design. A multi-session
/// server must create one independent session per session key.
pub type SharedSession = Arc<Mutex<KitchenSession>>;

/// Mutable state for one kitchen monitoring session.
///
/// Created at session start, discarded at session end, never shared
/// across sessions. All mutation goes through the documented commands;
/// [`refresh`](Self::refresh) is the explicit recompute step handlers
/// invoke after each mutation.
#[derive(Debug)]
pub struct KitchenSession {
    queue: OrderQueue,
    factory: OrderFactory,
    engine: PrepTimeEngine,
    staffing: StaffingLevel,
    log: DecisionLog,
    notifier: ChangeNotifier,
    current: PrepTimeDecision,
    pending_change: Option<PrepTimeChange>,
    summary: Option<String>,
}

impl KitchenSession {
    /// Creates a session from kitchen configuration.
    ///
    /// The opening estimate (empty queue, full staffing) becomes the
    /// first log entry; the notifier is seeded with the base time so
    /// that opening estimate never fires a change notification.
    pub fn new(config: &KitchenConfig) -> Result<Self, ValidationError> {
        let engine = PrepTimeEngine::new(config.base_prep_minutes)?;
        let factory = OrderFactory::with_item_range(config.item_count_min, config.item_count_max)?;
        let staffing = StaffingLevel::default();
        let notifier = ChangeNotifier::new(engine.base_minutes());

        let current = engine.compute(0, staffing);
        let mut log = DecisionLog::new();
        log.record(current.clone());

        Ok(Self {
            queue: OrderQueue::new(),
            factory,
            engine,
            staffing,
            log,
            notifier,
            current,
            pending_change: None,
            summary: None,
        })
    }

    /// Re-runs the estimate after a state mutation.
    ///
    /// Computes a fresh decision from the current queue size and
    /// staffing, surfaces a directional change notification if the
    /// estimate moved, and logs the decision when its final time
    /// differs from the last logged one.
    pub fn refresh(&mut self) -> &PrepTimeDecision {
        let decision = self.engine.compute(self.queue.active_count(), self.staffing);

        if let Some(change) = self.notifier.on_computed(decision.final_minutes) {
            self.pending_change = Some(change);
        }
        self.log.record(decision.clone());
        self.current = decision;
        &self.current
    }

    /// The live order queue.
    pub fn queue(&self) -> &OrderQueue {
        &self.queue
    }

    /// Mutable access to the queue for command handlers.
    pub fn queue_mut(&mut self) -> &mut OrderQueue {
        &mut self.queue
    }

    /// The synthetic order factory.
    pub fn factory(&self) -> &OrderFactory {
        &self.factory
    }

    /// The current staffing level.
    pub fn staffing(&self) -> StaffingLevel {
        self.staffing
    }

    /// Updates the staffing level. Takes effect on the next refresh.
    pub fn set_staffing(&mut self, staffing: StaffingLevel) {
        self.staffing = staffing;
    }

    /// The rolling decision log.
    pub fn log(&self) -> &DecisionLog {
        &self.log
    }

    /// The most recently computed decision.
    pub fn current_decision(&self) -> &PrepTimeDecision {
        &self.current
    }

    /// Takes the pending change notification, clearing it.
    ///
    /// The notification is consumed exactly once; a later change before
    /// the next read replaces an unconsumed one.
    pub fn take_pending_change(&mut self) -> Option<PrepTimeChange> {
        self.pending_change.take()
    }

    /// The last successfully obtained summary, if any.
    pub fn summary(&self) -> Option<&String> {
        self.summary.as_ref()
    }

    /// Stores a freshly obtained summary.
    pub fn set_summary(&mut self, summary: String) {
        self.summary = Some(summary);
    }
}
