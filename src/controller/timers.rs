// SPDX-License-Identifier: MPL-2.0
//! The two named screen timers: controls auto-hide and suggestions reset.
//!
//! Exactly these two deferred actions exist for a controller instance.
//! Enabling either one is a guaranteed no-op while the engine is not ready,
//! and rearming is always disable-then-enable so a pending deadline can
//! never be duplicated.

use std::time::{Duration, Instant};

use log::debug;

use crate::config::defaults::SUGGESTIONS_RESET_TIMEOUT_MS;
use crate::config::PlayerConfig;

use super::deferred::DeferredAction;
use super::lifecycle::UiState;

/// A timer deadline that elapsed during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerFired {
    /// The controls overlay inactivity timeout elapsed.
    AutoHide,
    /// The suggestion panel cursor reset delay elapsed.
    SuggestionsReset,
}

/// Owns the two named deferred actions of the playback screen.
#[derive(Debug, Default)]
pub struct TimeoutScheduler {
    auto_hide: DeferredAction,
    suggestions_reset: DeferredAction,
}

impl TimeoutScheduler {
    /// Arm the controls auto-hide countdown.
    ///
    /// No-op unless the engine is ready and the configured timeout is
    /// non-zero (0 disables auto-hide).
    pub fn enable_auto_hide(&mut self, ui: UiState, config: &PlayerConfig) {
        debug!("starting auto hide ui timer");
        if ui.engine_ready && config.ui_hide_timeout_secs > 0 {
            self.auto_hide
                .schedule(Duration::from_secs(u64::from(config.ui_hide_timeout_secs)));
        }
    }

    pub fn disable_auto_hide(&mut self) {
        debug!("stopping auto hide ui timer");
        self.auto_hide.cancel();
    }

    /// Arm the suggestion panel cursor reset. No-op unless the engine is
    /// ready; the delay is fixed at 500 ms.
    pub fn enable_suggestions_reset(&mut self, ui: UiState) {
        debug!("starting reset position timer");
        if ui.engine_ready {
            self.suggestions_reset
                .schedule(Duration::from_millis(SUGGESTIONS_RESET_TIMEOUT_MS));
        }
    }

    pub fn disable_suggestions_reset(&mut self) {
        debug!("stopping reset position timer");
        self.suggestions_reset.cancel();
    }

    /// Cancel both timers unconditionally (engine release, key debounce).
    pub fn disable_all(&mut self) {
        self.disable_auto_hide();
        self.disable_suggestions_reset();
    }

    pub fn auto_hide_pending(&self) -> bool {
        self.auto_hide.is_pending()
    }

    pub fn suggestions_reset_pending(&self) -> bool {
        self.suggestions_reset.is_pending()
    }

    /// Poll both deadlines; each reports at most once per arm.
    pub fn tick(&mut self, now: Instant) -> Vec<TimerFired> {
        let mut fired = Vec::new();
        if self.auto_hide.fire_due(now) {
            fired.push(TimerFired::AutoHide);
        }
        if self.suggestions_reset.fire_due(now) {
            fired.push(TimerFired::SuggestionsReset);
        }
        fired
    }

    #[cfg(test)]
    pub(crate) fn rewind_auto_hide(&mut self, by: Duration) {
        self.auto_hide.rewind(by);
    }

    #[cfg(test)]
    pub(crate) fn rewind_suggestions_reset(&mut self, by: Duration) {
        self.suggestions_reset.rewind(by);
    }
}
