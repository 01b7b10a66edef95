// SPDX-License-Identifier: MPL-2.0
//! Playback-screen orchestration.
//!
//! [`PlayerUi`] is a thin orchestrator over four narrow components:
//! the [`timers::TimeoutScheduler`] (controls auto-hide and suggestions
//! reset), the key dispatcher in [`keys`], the [`lifecycle::LifecycleBridge`]
//! and the [`gateway::RemoteActionGateway`]. All state reads/writes, timer
//! arming and key dispatch happen on the host's single UI execution context;
//! the only true concurrency is the gateway's detached remote calls, which
//! never feed back into controller state.

pub mod deferred;
pub mod gateway;
pub mod keys;
pub mod lifecycle;
pub mod options;
#[cfg(test)]
pub(crate) mod test_support;
pub mod timers;

use std::sync::Arc;
use std::time::Instant;

use tokio::runtime::Handle;

use crate::config::PlayerConfig;
use crate::media::{MediaMetadata, SubtitleFormat, SubtitleStyle, Video};
use crate::surface::{MediaToggleService, Navigator, Notifier, PlaybackSurface, SettingsDialog};

use self::gateway::RemoteActionGateway;
use self::keys::Key;
use self::lifecycle::{LifecycleBridge, Phase};
use self::timers::{TimeoutScheduler, TimerFired};

const SUBTITLES_DISABLED_LABEL: &str = "Subtitles disabled";
const SUBSCRIBED_MESSAGE: &str = "Subscribed to channel";
const UNSUBSCRIBED_MESSAGE: &str = "Unsubscribed from channel";

/// UI controller for one playback-screen instance.
///
/// The host forwards its lifecycle events, key presses and UI clicks here,
/// and drives [`PlayerUi::on_tick`] from its UI loop so due timers fire on
/// the UI-owning context.
pub struct PlayerUi {
    config: PlayerConfig,
    surface: Box<dyn PlaybackSurface>,
    dialog: Box<dyn SettingsDialog>,
    navigator: Box<dyn Navigator>,
    notifier: Box<dyn Notifier>,
    timers: TimeoutScheduler,
    lifecycle: LifecycleBridge,
    gateway: RemoteActionGateway,
    selected_subtitle_style: Option<SubtitleStyle>,
}

impl PlayerUi {
    pub fn new(
        surface: Box<dyn PlaybackSurface>,
        dialog: Box<dyn SettingsDialog>,
        navigator: Box<dyn Navigator>,
        notifier: Box<dyn Notifier>,
        service: Arc<dyn MediaToggleService>,
        runtime: Handle,
    ) -> Self {
        Self {
            config: PlayerConfig::default(),
            surface,
            dialog,
            navigator,
            notifier,
            timers: TimeoutScheduler::default(),
            lifecycle: LifecycleBridge::default(),
            gateway: RemoteActionGateway::new(service, runtime),
            selected_subtitle_style: None,
        }
    }

    /// Install the per-lifecycle configuration snapshot. The config is
    /// treated as immutable until the controller is recreated.
    pub fn on_init_done(&mut self, config: PlayerConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    pub fn timers(&self) -> &TimeoutScheduler {
        &self.timers
    }

    // ═══════════════════════════════════════════════════════════════════════
    // LIFECYCLE HOOKS
    // ═══════════════════════════════════════════════════════════════════════

    pub fn on_engine_initialized(&mut self) {
        self.lifecycle.on_engine_initialized();
    }

    pub fn on_engine_released(&mut self) {
        self.lifecycle.on_engine_released(&mut self.timers);
    }

    pub fn on_video_loaded(&mut self) {
        self.lifecycle
            .on_video_loaded(&self.config, self.surface.as_mut());
    }

    pub fn on_metadata(&mut self, metadata: &MediaMetadata) {
        self.lifecycle.on_metadata(metadata, self.surface.as_mut());
    }

    /// The host reports overlay visibility changes; showing the controls
    /// restarts the auto-hide countdown, hiding them stops it.
    pub fn on_controls_shown(&mut self, shown: bool) {
        self.timers.disable_auto_hide();
        if shown {
            self.timers.enable_auto_hide(self.lifecycle.ui(), &self.config);
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // INPUT AND TIME
    // ═══════════════════════════════════════════════════════════════════════

    /// Dispatch one raw key code. Returns true when the host should
    /// suppress its default handling.
    pub fn on_key_down(&mut self, key_code: u32) -> bool {
        self.on_key(Key::from_code(key_code))
    }

    pub fn on_key(&mut self, key: Key) -> bool {
        keys::dispatch(
            key,
            self.lifecycle.ui(),
            &self.config,
            &mut self.timers,
            self.surface.as_mut(),
        )
    }

    /// Poll the two named timers and apply their firing policy.
    pub fn on_tick(&mut self, now: Instant) {
        for fired in self.timers.tick(now) {
            match fired {
                TimerFired::AutoHide => self.handle_auto_hide_fired(),
                TimerFired::SuggestionsReset => self.surface.reset_suggested_position(),
            }
        }
    }

    fn handle_auto_hide_fired(&mut self) {
        if self.surface.is_playing() {
            // Don't hide while the user is browsing suggestions.
            if !self.surface.is_suggestions_shown() {
                self.surface.show_controls(false);
            }
        } else {
            // In seeking state? Rearm and recheck on the same cadence
            // until playback resumes.
            self.timers.disable_auto_hide();
            self.timers.enable_auto_hide(self.lifecycle.ui(), &self.config);
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // UI ACTION HOOKS
    // ═══════════════════════════════════════════════════════════════════════

    pub fn on_subtitles_clicked(&mut self) {
        let formats = self.surface.subtitle_formats();
        let format_items = options::subtitle_format_options(&formats, SUBTITLES_DISABLED_LABEL);
        let style_items = options::subtitle_style_options(
            &self.config.subtitle_styles,
            self.selected_subtitle_style.as_ref(),
        );
        self.dialog.show_subtitle_options(format_items, style_items);
    }

    pub fn on_subtitle_format_selected(&mut self, format: &SubtitleFormat) {
        self.surface.select_subtitle_format(format);
    }

    pub fn on_subtitle_style_selected(&mut self, style: &SubtitleStyle) {
        self.selected_subtitle_style = Some(style.clone());
        self.surface.set_subtitle_style(style);
    }

    pub fn on_video_speed_clicked(&mut self) {
        let items = options::speed_options(self.surface.speed());
        self.dialog.show_speed_options(items);
    }

    pub fn on_speed_selected(&mut self, speed: f32) {
        self.surface.set_speed(speed);
    }

    /// Remote toggle plus an immediate local toast; the toast does not wait
    /// for (or reflect) the remote outcome.
    pub fn on_subscribe_clicked(&mut self, subscribed: bool) {
        let video = self.surface.video();
        self.gateway.toggle_subscription(video.as_ref(), subscribed);

        let message = if subscribed {
            SUBSCRIBED_MESSAGE
        } else {
            UNSUBSCRIBED_MESSAGE
        };
        self.notifier.show_message(message);
    }

    pub fn on_thumbs_up_clicked(&mut self, up: bool) {
        let video = self.surface.video();
        self.gateway.set_like(video.as_ref(), up);
    }

    pub fn on_thumbs_down_clicked(&mut self, down: bool) {
        let video = self.surface.video();
        self.gateway.set_dislike(video.as_ref(), down);
    }

    pub fn on_channel_clicked(&mut self) {
        if let Some(video) = self.surface.video() {
            self.navigator.open_channel(&video);
        }
    }

    pub fn on_search_clicked(&mut self) {
        self.navigator.start_search();
    }

    pub fn on_playlist_add_clicked(&mut self) {
        if let Some(video) = self.surface.video() {
            self.navigator.show_video_menu(&video);
        }
    }

    pub fn on_suggestion_item_long_clicked(&mut self, video: &Video) {
        self.navigator.show_video_menu(video);
    }

    pub fn on_video_stats_clicked(&mut self, enabled: bool) {
        self.lifecycle.set_debug_view(enabled, self.surface.as_mut());
    }
}
