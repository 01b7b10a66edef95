// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for player configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the playback screen. Constants are organized by category.

// ==========================================================================
// Controls Overlay Defaults
// ==========================================================================

/// Default auto-hide timeout for the controls overlay (in seconds).
pub const DEFAULT_UI_HIDE_TIMEOUT_SECS: u32 = 3;

/// Minimum auto-hide timeout (0 disables auto-hide entirely).
pub const MIN_UI_HIDE_TIMEOUT_SECS: u32 = 0;

/// Maximum auto-hide timeout (in seconds).
pub const MAX_UI_HIDE_TIMEOUT_SECS: u32 = 30;

// ==========================================================================
// Suggestion Panel Defaults
// ==========================================================================

/// Fixed delay before the suggestion panel cursor resets (in milliseconds).
pub const SUGGESTIONS_RESET_TIMEOUT_MS: u64 = 500;

// ==========================================================================
// Playback Speed Defaults
// ==========================================================================

/// Playback speed presets offered by the speed selection dialog.
pub const SPEED_PRESETS: &[f32] = &[
    0.25, 0.5, 0.75, 1.0, 1.1, 1.15, 1.25, 1.5, 1.75, 2.0, 2.25, 2.5, 2.75, 3.0,
];
