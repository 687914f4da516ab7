// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Tunable knobs for an editor session.

use std::time::Duration;

use crate::constant;

/// Per-session configuration.
///
/// Hosts construct one of these (usually `Default`) and pass it when a
/// session opens. All limits are enforced by the geometry layer on every
/// gesture update, so out-of-range input is clamped rather than rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Maximum zoom scale (e.g., 3.0 = 300%).
    pub max_scale: f32,
    /// Undo/redo stack depth.
    pub history_depth: usize,
    /// How long a commit waits for an in-flight settle animation.
    pub settle_timeout: Duration,
    /// Nominal duration of the visual settle spring.
    pub settle_duration: Duration,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_scale: constant::MAX_SCALE,
            history_depth: constant::HISTORY_DEPTH,
            settle_timeout: constant::SETTLE_TIMEOUT,
            settle_duration: constant::SETTLE_DURATION,
        }
    }
}
