// SPDX-License-Identifier: MPL-2.0
//! Remote-control key classification and the dispatch decision procedure.

use log::debug;

use crate::config::{OkButtonBehavior, PlayerConfig};
use crate::surface::PlaybackSurface;

use super::lifecycle::UiState;
use super::timers::TimeoutScheduler;

const KEYCODE_BACK: u32 = 4;
const KEYCODE_DPAD_CENTER: u32 = 23;
const KEYCODE_ENTER: u32 = 66;
const KEYCODE_MENU: u32 = 82;
const KEYCODE_MEDIA_STOP: u32 = 86;
const KEYCODE_ESCAPE: u32 = 111;
const KEYCODE_NUMPAD_ENTER: u32 = 160;

/// A remote-control key event, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Back,
    Menu,
    Confirm,
    Stop,
    Other,
}

impl Key {
    pub fn from_code(code: u32) -> Self {
        match code {
            KEYCODE_BACK | KEYCODE_ESCAPE => Key::Back,
            KEYCODE_MENU => Key::Menu,
            KEYCODE_DPAD_CENTER | KEYCODE_ENTER | KEYCODE_NUMPAD_ENTER => Key::Confirm,
            KEYCODE_MEDIA_STOP => Key::Stop,
            _ => Key::Other,
        }
    }
}

/// Run the fixed decision procedure for one key press.
///
/// Returns the consumed flag: true tells the host to suppress its default
/// key handling. Every press debounces both timers before any branch, and
/// every key except Stop restarts the auto-hide countdown afterwards.
pub fn dispatch(
    key: Key,
    ui: UiState,
    config: &PlayerConfig,
    timers: &mut TimeoutScheduler,
    surface: &mut dyn PlaybackSurface,
) -> bool {
    timers.disable_auto_hide();
    timers.disable_suggestions_reset();

    let mut consumed = false;
    match key {
        Key::Back => timers.enable_suggestions_reset(ui),
        Key::Menu => {
            let shown = surface.is_controls_shown();
            surface.show_controls(!shown);
        }
        Key::Confirm if !surface.is_controls_shown() => match config.ok_button_behavior {
            OkButtonBehavior::ShowUiOnly => {
                surface.show_controls(true);
                consumed = true;
            }
            OkButtonBehavior::ShowUiAndPause => {}
            OkButtonBehavior::PauseOnly => {
                let playing = surface.is_playing();
                surface.set_play(!playing);
                consumed = true;
            }
        },
        Key::Stop => {
            // The screen is being torn down; do not rearm auto-hide.
            debug!("stop key pressed, exiting playback");
            surface.exit();
            return true;
        }
        _ => {}
    }

    timers.enable_auto_hide(ui, config);
    consumed
}
