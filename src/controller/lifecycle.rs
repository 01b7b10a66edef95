// SPDX-License-Identifier: MPL-2.0
//! Engine lifecycle tracking and metadata application.
//!
//! The bridge is the sole mutator of [`UiState`]; the timers and the key
//! dispatcher only ever read it.

use log::debug;

use crate::config::PlayerConfig;
use crate::media::{LikeStatus, MediaMetadata};
use crate::surface::PlaybackSurface;

use super::timers::TimeoutScheduler;

/// Shared UI flags for one playback-screen instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiState {
    pub engine_ready: bool,
    pub debug_view_enabled: bool,
}

/// Engine lifecycle phase. `Released` is terminal: a released controller
/// instance is never re-armed, the screen is recreated instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Uninitialized,
    Ready,
    Released,
}

#[derive(Debug, Default)]
pub struct LifecycleBridge {
    phase: Phase,
    ui: UiState,
}

impl LifecycleBridge {
    pub fn ui(&self) -> UiState {
        self.ui
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// `Ready` is entered once, when the engine signals init complete.
    pub fn on_engine_initialized(&mut self) {
        if self.phase == Phase::Released {
            debug!("engine init after release ignored");
            return;
        }
        self.phase = Phase::Ready;
        self.ui.engine_ready = true;
    }

    /// Terminal transition: cancels both timers and drops engine readiness.
    pub fn on_engine_released(&mut self, timers: &mut TimeoutScheduler) {
        debug!("engine released, disabling all callbacks");
        self.ui.engine_ready = false;
        self.phase = Phase::Released;
        timers.disable_all();
    }

    pub fn on_video_loaded(&mut self, config: &PlayerConfig, surface: &mut dyn PlaybackSurface) {
        // Engine transitions can drop the debug overlay; reapply it.
        surface.show_debug_view(self.ui.debug_view_enabled);
        surface.set_debug_button_state(self.ui.debug_view_enabled);

        if config.seek_preview_enabled {
            surface.load_storyboard();
        }
    }

    /// Apply remote metadata straight to the three toggle buttons. No state
    /// is cached beyond the current screen.
    pub fn on_metadata(&mut self, metadata: &MediaMetadata, surface: &mut dyn PlaybackSurface) {
        surface.set_like_button_state(metadata.like_status == LikeStatus::Like);
        surface.set_dislike_button_state(metadata.like_status == LikeStatus::Dislike);
        surface.set_subscribe_button_state(metadata.subscribed);
    }

    pub fn set_debug_view(&mut self, enabled: bool, surface: &mut dyn PlaybackSurface) {
        self.ui.debug_view_enabled = enabled;
        surface.show_debug_view(enabled);
    }
}
