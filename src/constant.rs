// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Crate constants that should not be changed by the user.

use std::time::Duration;

/// Rotation step in degrees (90 = quarter turn).
pub const ROTATION_STEP: f32 = 90.0;

/// Full rotation in degrees (for modulo calculation in angle normalization).
pub const FULL_ROTATION: f32 = 360.0;

/// Upper bound for pinch zoom.
pub const MAX_SCALE: f32 = 3.0;

/// Minimum crop rectangle side in screen pixels.
pub const MIN_CROP_SIZE: f32 = 100.0;

/// Maximum crop rectangle side in screen pixels.
pub const MAX_CROP_SIZE: f32 = 4096.0;

/// Fraction of the shorter viewport side used for the initial crop square.
pub const DEFAULT_CROP_FRACTION: f32 = 0.8;

/// Undo/redo stack depth.
pub const HISTORY_DEPTH: usize = 50;

/// Tolerance for scale comparisons (float precision in zoom bookkeeping).
pub const SCALE_EPSILON: f32 = 0.0001;

/// Tolerance for screen-space position comparisons.
pub const OFFSET_EPSILON: f32 = 0.01;

/// How long a commit waits for an in-flight settle animation before
/// proceeding with the current values.
pub const SETTLE_TIMEOUT: Duration = Duration::from_secs(2);

/// Nominal duration of the visual settle spring.
pub const SETTLE_DURATION: Duration = Duration::from_millis(300);

/// Spring displacement below which the settle animation is at rest.
pub const SETTLE_REST_EPSILON: f32 = 0.001;

/// Frame interval used when stepping the settle spring.
pub const SETTLE_FRAME: Duration = Duration::from_millis(16);
