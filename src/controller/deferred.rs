// SPDX-License-Identifier: MPL-2.0
//! Cancellable one-shot deadline, the primitive under both named timers.

use std::time::{Duration, Instant};

/// A cancellable, delayed, single-shot action slot.
///
/// At most one deadline is pending at a time: scheduling replaces any
/// previously scheduled, not-yet-fired deadline (cancel-then-schedule,
/// never duplicate). The deadline is polled by the host's UI loop, so
/// firing always happens on the UI-owning execution context.
#[derive(Debug, Clone, Default)]
pub struct DeferredAction {
    deadline: Option<Instant>,
}

impl DeferredAction {
    /// Arm the slot, replacing any pending deadline.
    pub fn schedule(&mut self, delay: Duration) {
        self.deadline = Some(Instant::now() + delay);
    }

    /// Idempotent; safe to call when nothing is pending.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true at most once per schedule, clearing the deadline.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Pull the pending deadline into the past, for deterministic tests.
    #[cfg(test)]
    pub(crate) fn rewind(&mut self, by: Duration) {
        if let Some(deadline) = self.deadline {
            self.deadline = deadline.checked_sub(by);
        }
    }
}
