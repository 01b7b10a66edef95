// SPDX-License-Identifier: MPL-2.0
//! `leanback_ui` is the UI-orchestration layer for a single remote-driven
//! video playback screen.
//!
//! It owns the timeout/debounce state machine that auto-hides the controls
//! overlay and resets the suggestion panel, the key-dispatch decision logic,
//! the engine lifecycle bridge, and the guarded fire-and-forget remote toggle
//! gateway. Playback, rendering, and network transport stay with the host:
//! the crate drives them through the capability traits in [`surface`].

pub mod config;
pub mod controller;
pub mod error;
pub mod media;
pub mod surface;
