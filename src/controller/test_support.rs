// SPDX-License-Identifier: MPL-2.0
//! Shared fakes for controller unit tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};

use futures_util::future::BoxFuture;

use crate::controller::options::OptionItem;
use crate::media::{MediaItem, SubtitleFormat, SubtitleStyle, Video};
use crate::surface::{MediaToggleService, Navigator, Notifier, PlaybackSurface, SettingsDialog};

/// Recording playback surface with directly settable state.
#[derive(Debug, Default)]
pub(crate) struct FakeSurface {
    pub playing: bool,
    pub controls_shown: bool,
    pub suggestions_shown: bool,
    pub video: Option<Video>,
    pub speed: f32,
    pub exited: bool,
    pub suggested_position_resets: u32,
    pub debug_view: Option<bool>,
    pub debug_button: Option<bool>,
    pub like_button: Option<bool>,
    pub dislike_button: Option<bool>,
    pub subscribe_button: Option<bool>,
    pub storyboard_loads: u32,
    pub formats: Vec<SubtitleFormat>,
    pub selected_format: Option<SubtitleFormat>,
    pub selected_style: Option<SubtitleStyle>,
}

impl PlaybackSurface for FakeSurface {
    fn is_playing(&self) -> bool {
        self.playing
    }

    fn is_controls_shown(&self) -> bool {
        self.controls_shown
    }

    fn is_suggestions_shown(&self) -> bool {
        self.suggestions_shown
    }

    fn show_controls(&mut self, shown: bool) {
        self.controls_shown = shown;
    }

    fn set_play(&mut self, play: bool) {
        self.playing = play;
    }

    fn exit(&mut self) {
        self.exited = true;
    }

    fn reset_suggested_position(&mut self) {
        self.suggested_position_resets += 1;
    }

    fn video(&self) -> Option<Video> {
        self.video.clone()
    }

    fn subtitle_formats(&self) -> Vec<SubtitleFormat> {
        self.formats.clone()
    }

    fn select_subtitle_format(&mut self, format: &SubtitleFormat) {
        self.selected_format = Some(format.clone());
    }

    fn set_subtitle_style(&mut self, style: &SubtitleStyle) {
        self.selected_style = Some(style.clone());
    }

    fn speed(&self) -> f32 {
        self.speed
    }

    fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    fn show_debug_view(&mut self, enabled: bool) {
        self.debug_view = Some(enabled);
    }

    fn set_debug_button_state(&mut self, enabled: bool) {
        self.debug_button = Some(enabled);
    }

    fn set_like_button_state(&mut self, active: bool) {
        self.like_button = Some(active);
    }

    fn set_dislike_button_state(&mut self, active: bool) {
        self.dislike_button = Some(active);
    }

    fn set_subscribe_button_state(&mut self, active: bool) {
        self.subscribe_button = Some(active);
    }

    fn load_storyboard(&mut self) {
        self.storyboard_loads += 1;
    }
}

/// Handle to a [`FakeSurface`] that can be boxed into the orchestrator while
/// the test keeps a clone for assertions.
#[derive(Clone, Default)]
pub(crate) struct SharedSurface(pub Rc<RefCell<FakeSurface>>);

impl PlaybackSurface for SharedSurface {
    fn is_playing(&self) -> bool {
        self.0.borrow().playing
    }

    fn is_controls_shown(&self) -> bool {
        self.0.borrow().controls_shown
    }

    fn is_suggestions_shown(&self) -> bool {
        self.0.borrow().suggestions_shown
    }

    fn show_controls(&mut self, shown: bool) {
        self.0.borrow_mut().controls_shown = shown;
    }

    fn set_play(&mut self, play: bool) {
        self.0.borrow_mut().playing = play;
    }

    fn exit(&mut self) {
        self.0.borrow_mut().exited = true;
    }

    fn reset_suggested_position(&mut self) {
        self.0.borrow_mut().suggested_position_resets += 1;
    }

    fn video(&self) -> Option<Video> {
        self.0.borrow().video.clone()
    }

    fn subtitle_formats(&self) -> Vec<SubtitleFormat> {
        self.0.borrow().formats.clone()
    }

    fn select_subtitle_format(&mut self, format: &SubtitleFormat) {
        self.0.borrow_mut().selected_format = Some(format.clone());
    }

    fn set_subtitle_style(&mut self, style: &SubtitleStyle) {
        self.0.borrow_mut().selected_style = Some(style.clone());
    }

    fn speed(&self) -> f32 {
        self.0.borrow().speed
    }

    fn set_speed(&mut self, speed: f32) {
        self.0.borrow_mut().speed = speed;
    }

    fn show_debug_view(&mut self, enabled: bool) {
        self.0.borrow_mut().debug_view = Some(enabled);
    }

    fn set_debug_button_state(&mut self, enabled: bool) {
        self.0.borrow_mut().debug_button = Some(enabled);
    }

    fn set_like_button_state(&mut self, active: bool) {
        self.0.borrow_mut().like_button = Some(active);
    }

    fn set_dislike_button_state(&mut self, active: bool) {
        self.0.borrow_mut().dislike_button = Some(active);
    }

    fn set_subscribe_button_state(&mut self, active: bool) {
        self.0.borrow_mut().subscribe_button = Some(active);
    }

    fn load_storyboard(&mut self) {
        self.0.borrow_mut().storyboard_loads += 1;
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingDialog {
    pub subtitle_calls: Vec<(Vec<OptionItem>, Vec<OptionItem>)>,
    pub speed_calls: Vec<Vec<OptionItem>>,
}

#[derive(Clone, Default)]
pub(crate) struct SharedDialog(pub Rc<RefCell<RecordingDialog>>);

impl SettingsDialog for SharedDialog {
    fn show_subtitle_options(&mut self, formats: Vec<OptionItem>, styles: Vec<OptionItem>) {
        self.0.borrow_mut().subtitle_calls.push((formats, styles));
    }

    fn show_speed_options(&mut self, options: Vec<OptionItem>) {
        self.0.borrow_mut().speed_calls.push(options);
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingNavigator {
    pub opened_channels: Vec<Video>,
    pub searches: u32,
    pub video_menus: Vec<Video>,
}

#[derive(Clone, Default)]
pub(crate) struct SharedNavigator(pub Rc<RefCell<RecordingNavigator>>);

impl Navigator for SharedNavigator {
    fn open_channel(&mut self, video: &Video) {
        self.0.borrow_mut().opened_channels.push(video.clone());
    }

    fn start_search(&mut self) {
        self.0.borrow_mut().searches += 1;
    }

    fn show_video_menu(&mut self, video: &Video) {
        self.0.borrow_mut().video_menus.push(video.clone());
    }
}

#[derive(Clone, Default)]
pub(crate) struct SharedNotifier(pub Rc<RefCell<Vec<String>>>);

impl Notifier for SharedNotifier {
    fn show_message(&mut self, text: &str) {
        self.0.borrow_mut().push(text.to_string());
    }
}

/// Counts remote toggle operations; each returned future is a no-op.
#[derive(Debug, Default)]
pub(crate) struct CountingService {
    pub subscribes: AtomicU32,
    pub unsubscribes: AtomicU32,
    pub likes: AtomicU32,
    pub unlikes: AtomicU32,
    pub dislikes: AtomicU32,
    pub undislikes: AtomicU32,
}

impl CountingService {
    pub fn total(&self) -> u32 {
        self.subscribes.load(Ordering::SeqCst)
            + self.unsubscribes.load(Ordering::SeqCst)
            + self.likes.load(Ordering::SeqCst)
            + self.unlikes.load(Ordering::SeqCst)
            + self.dislikes.load(Ordering::SeqCst)
            + self.undislikes.load(Ordering::SeqCst)
    }
}

impl MediaToggleService for CountingService {
    fn subscribe(&self, _item: &MediaItem) -> BoxFuture<'static, ()> {
        self.subscribes.fetch_add(1, Ordering::SeqCst);
        Box::pin(async {})
    }

    fn unsubscribe(&self, _item: &MediaItem) -> BoxFuture<'static, ()> {
        self.unsubscribes.fetch_add(1, Ordering::SeqCst);
        Box::pin(async {})
    }

    fn set_like(&self, _item: &MediaItem) -> BoxFuture<'static, ()> {
        self.likes.fetch_add(1, Ordering::SeqCst);
        Box::pin(async {})
    }

    fn remove_like(&self, _item: &MediaItem) -> BoxFuture<'static, ()> {
        self.unlikes.fetch_add(1, Ordering::SeqCst);
        Box::pin(async {})
    }

    fn set_dislike(&self, _item: &MediaItem) -> BoxFuture<'static, ()> {
        self.dislikes.fetch_add(1, Ordering::SeqCst);
        Box::pin(async {})
    }

    fn remove_dislike(&self, _item: &MediaItem) -> BoxFuture<'static, ()> {
        self.undislikes.fetch_add(1, Ordering::SeqCst);
        Box::pin(async {})
    }
}
