// SPDX-License-Identifier: MPL-2.0
//! Builders for the selection lists shown by the settings dialog.

use crate::config::defaults::SPEED_PRESETS;
use crate::media::{SubtitleFormat, SubtitleStyle};

/// A single selectable row handed to the settings dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionItem {
    pub label: String,
    pub selected: bool,
}

/// One row per configured subtitle style; equality with the current style
/// decides which row is marked selected.
pub fn subtitle_style_options(
    styles: &[SubtitleStyle],
    current: Option<&SubtitleStyle>,
) -> Vec<OptionItem> {
    styles
        .iter()
        .map(|style| OptionItem {
            label: style.display_name.clone(),
            selected: Some(style) == current,
        })
        .collect()
}

/// Subtitle track rows, with a leading "disabled" entry that is selected
/// when no track is.
pub fn subtitle_format_options(
    formats: &[SubtitleFormat],
    disabled_label: &str,
) -> Vec<OptionItem> {
    let none_selected = !formats.iter().any(|format| format.selected);
    let mut items = vec![OptionItem {
        label: disabled_label.to_string(),
        selected: none_selected,
    }];
    items.extend(formats.iter().map(|format| OptionItem {
        label: format.language.clone(),
        selected: format.selected,
    }));
    items
}

/// One row per speed preset, marking the surface's current speed.
pub fn speed_options(current_speed: f32) -> Vec<OptionItem> {
    SPEED_PRESETS
        .iter()
        .map(|&speed| OptionItem {
            label: format!("{speed}"),
            selected: (speed - current_speed).abs() < f32::EPSILON,
        })
        .collect()
}
