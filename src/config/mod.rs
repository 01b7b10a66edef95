// SPDX-License-Identifier: MPL-2.0
//! Player configuration, loaded and saved as a `player.toml` file.
//!
//! The orchestration core fetches one [`PlayerConfig`] snapshot per
//! controller lifecycle and treats it as immutable from then on; the host
//! owns loading, editing, and persisting it.

pub mod defaults;

use crate::error::Result;
use crate::media::SubtitleStyle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use self::defaults::DEFAULT_UI_HIDE_TIMEOUT_SECS;

const CONFIG_FILE: &str = "player.toml";
const APP_NAME: &str = "LeanbackUi";

/// What the confirm (OK) button does while the controls overlay is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OkButtonBehavior {
    /// Show the controls overlay, nothing else.
    #[default]
    ShowUiOnly,
    /// Let the press fall through to the host's default handling.
    ShowUiAndPause,
    /// Toggle play/pause, leaving the overlay hidden.
    PauseOnly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PlayerConfig {
    #[serde(default)]
    pub ok_button_behavior: OkButtonBehavior,
    /// Seconds of inactivity before the controls overlay hides; 0 disables
    /// auto-hide.
    #[serde(default = "default_ui_hide_timeout")]
    pub ui_hide_timeout_secs: u32,
    #[serde(default = "default_seek_preview")]
    pub seek_preview_enabled: bool,
    #[serde(default = "default_subtitle_styles")]
    pub subtitle_styles: Vec<SubtitleStyle>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            ok_button_behavior: OkButtonBehavior::default(),
            ui_hide_timeout_secs: default_ui_hide_timeout(),
            seek_preview_enabled: default_seek_preview(),
            subtitle_styles: default_subtitle_styles(),
        }
    }
}

fn default_ui_hide_timeout() -> u32 {
    DEFAULT_UI_HIDE_TIMEOUT_SECS
}

fn default_seek_preview() -> bool {
    true
}

fn default_subtitle_styles() -> Vec<SubtitleStyle> {
    vec![
        SubtitleStyle::new(0, "Default"),
        SubtitleStyle::new(1, "Semi-transparent background"),
        SubtitleStyle::new(2, "Black background"),
    ]
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<PlayerConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(PlayerConfig::default())
}

pub fn save(config: &PlayerConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<PlayerConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &PlayerConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
