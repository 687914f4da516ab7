// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/transform.rs
//
// View transform state and pan/pinch gesture accumulation.

use super::crop::CropRect;
use super::geometry::ImageSize;
use crate::constant::{FULL_ROTATION, ROTATION_STEP};

/// Scale, translation and rotation of the displayed image, plus the base
/// snapshots that make gesture deltas cumulative-from-start.
///
/// Gestures arrive as start/update/end sessions. `begin_*` copies the
/// committed value into the base holder, every `update_*` recomputes the
/// current value from base plus the session-total delta, and `end_*`
/// commits. Outside an active session `current == base`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    pub scale: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    /// Not normalized during interaction; normalize at commit.
    pub rotation_degrees: f32,
    base_scale: f32,
    base_translate_x: f32,
    base_translate_y: f32,
}

impl TransformState {
    /// Create a transform at the given initial scale, untranslated and
    /// unrotated.
    pub fn new(scale: f32) -> Self {
        Self {
            scale,
            translate_x: 0.0,
            translate_y: 0.0,
            rotation_degrees: 0.0,
            base_scale: scale,
            base_translate_x: 0.0,
            base_translate_y: 0.0,
        }
    }

    /// The scale at which the image exactly fills the crop rectangle.
    ///
    /// Evaluated against the original image dimensions, never a preview
    /// resolution, so preview and export agree.
    pub fn fit_scale(crop: &CropRect, image: ImageSize) -> f32 {
        Self::min_scale(crop, image)
    }

    /// Smallest scale at which the image still fully covers the crop
    /// rectangle. Recompute from the current crop size on every pinch
    /// update; the crop can change between gestures.
    pub fn min_scale(crop: &CropRect, image: ImageSize) -> f32 {
        if !image.is_valid() {
            return 0.0;
        }
        (crop.width / image.width as f32).max(crop.height / image.height as f32)
    }

    // -------------------------------------------------------------------------
    // Pan session
    // -------------------------------------------------------------------------

    pub fn begin_pan(&mut self) {
        self.base_translate_x = self.translate_x;
        self.base_translate_y = self.translate_y;
    }

    /// Apply a pan delta. `dx`/`dy` are cumulative from gesture start, so
    /// the last delta wins; they are not frame increments.
    pub fn update_pan(&mut self, dx: f32, dy: f32) {
        self.translate_x = self.base_translate_x + dx;
        self.translate_y = self.base_translate_y + dy;
    }

    pub fn end_pan(&mut self) {
        self.base_translate_x = self.translate_x;
        self.base_translate_y = self.translate_y;
    }

    // -------------------------------------------------------------------------
    // Pinch session
    // -------------------------------------------------------------------------

    pub fn begin_pinch(&mut self) {
        self.base_scale = self.scale;
    }

    /// Apply a pinch factor (ratio of current finger distance to the
    /// distance at gesture start), clamped to `[min_scale, max_scale]`.
    pub fn update_pinch(&mut self, factor: f32, min_scale: f32, max_scale: f32) {
        let candidate = self.base_scale * factor;
        self.scale = candidate.clamp(min_scale.min(max_scale), max_scale);
    }

    pub fn end_pinch(&mut self) {
        self.base_scale = self.scale;
    }

    // -------------------------------------------------------------------------
    // Rotation
    // -------------------------------------------------------------------------

    /// Rotate a quarter turn clockwise. Four applications return to the
    /// starting angle.
    pub fn rotate_cw(&mut self) {
        self.rotation_degrees = (self.rotation_degrees + ROTATION_STEP).rem_euclid(FULL_ROTATION);
    }

    /// Rotation normalized to `[0, 360)`.
    pub fn normalized_rotation(&self) -> f32 {
        self.rotation_degrees.rem_euclid(FULL_ROTATION)
    }

    /// Whether a session (pan or pinch) is quiescent, i.e. current values
    /// match their base snapshots.
    pub fn is_committed(&self) -> bool {
        self.scale == self.base_scale
            && self.translate_x == self.base_translate_x
            && self.translate_y == self.base_translate_y
    }
}

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;
