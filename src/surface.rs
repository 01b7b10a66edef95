// SPDX-License-Identifier: MPL-2.0
//! Capability interfaces consumed by the controller.
//!
//! The playback engine, the settings dialogs, navigation, the remote toggle
//! service and the notification toast are all external collaborators. The
//! controller reads their state and invokes their operations through these
//! traits without owning any of their implementations.

use crate::controller::options::OptionItem;
use crate::media::{MediaItem, SubtitleFormat, SubtitleStyle, Video};
use futures_util::future::BoxFuture;

/// The playback engine's view of the screen: playback state, overlay
/// visibility, and per-video operations.
pub trait PlaybackSurface {
    fn is_playing(&self) -> bool;
    fn is_controls_shown(&self) -> bool;
    fn is_suggestions_shown(&self) -> bool;

    fn show_controls(&mut self, shown: bool);
    fn set_play(&mut self, play: bool);
    /// Tear down the playback screen.
    fn exit(&mut self);
    /// Recenter the suggestion panel cursor.
    fn reset_suggested_position(&mut self);

    /// The video currently bound to the screen, if any.
    fn video(&self) -> Option<Video>;

    fn subtitle_formats(&self) -> Vec<SubtitleFormat>;
    fn select_subtitle_format(&mut self, format: &SubtitleFormat);
    fn set_subtitle_style(&mut self, style: &SubtitleStyle);

    fn speed(&self) -> f32;
    fn set_speed(&mut self, speed: f32);

    fn show_debug_view(&mut self, enabled: bool);
    fn set_debug_button_state(&mut self, enabled: bool);
    fn set_like_button_state(&mut self, active: bool);
    fn set_dislike_button_state(&mut self, active: bool);
    fn set_subscribe_button_state(&mut self, active: bool);

    /// Request preloading of seek-preview thumbnails.
    fn load_storyboard(&mut self);
}

/// Renders selection dialogs built by the controller.
pub trait SettingsDialog {
    fn show_subtitle_options(&mut self, formats: Vec<OptionItem>, styles: Vec<OptionItem>);
    fn show_speed_options(&mut self, options: Vec<OptionItem>);
}

/// Screen-to-screen navigation owned by the host.
pub trait Navigator {
    fn open_channel(&mut self, video: &Video);
    fn start_search(&mut self);
    /// Open the per-video context menu (playlist add, long-press).
    fn show_video_menu(&mut self, video: &Video);
}

/// Transient user feedback (toast-style messages).
pub trait Notifier {
    fn show_message(&mut self, text: &str);
}

/// Remote media-toggle service.
///
/// Each operation returns a completion future that the controller spawns and
/// ignores; retries and failure handling belong to the service itself.
pub trait MediaToggleService: Send + Sync {
    fn subscribe(&self, item: &MediaItem) -> BoxFuture<'static, ()>;
    fn unsubscribe(&self, item: &MediaItem) -> BoxFuture<'static, ()>;
    fn set_like(&self, item: &MediaItem) -> BoxFuture<'static, ()>;
    fn remove_like(&self, item: &MediaItem) -> BoxFuture<'static, ()>;
    fn set_dislike(&self, item: &MediaItem) -> BoxFuture<'static, ()>;
    fn remove_dislike(&self, item: &MediaItem) -> BoxFuture<'static, ()>;
}
