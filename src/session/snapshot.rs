// SPDX-License-Identifier: GPL-3.0-or-later
// src/session/snapshot.rs
//
// Undo/redo unit: a full value copy of the editable state.

use serde::{Deserialize, Serialize};

use crate::domain::{AspectRatio, CropRect, TransformState};

/// A freehand stroke. Plain value record; no behavior of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingPath {
    pub points: Vec<(f32, f32)>,
    /// RGBA.
    pub color: [u8; 4],
    pub stroke_width: f32,
}

/// A placed text sticker. Plain value record; no behavior of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSticker {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
    /// RGBA.
    pub color: [u8; 4],
    pub rotation_degrees: f32,
    pub scale: f32,
}

/// Deep copy of the editable state, owned exclusively by the undo/redo
/// stacks.
///
/// Every field is a value type, so `Clone` is the deep copy: a snapshot
/// never aliases live mutable state, and later edits cannot corrupt
/// history.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSnapshot {
    pub transform: TransformState,
    pub crop: CropRect,
    pub aspect: AspectRatio,
    pub brightness: f32,
    pub contrast: f32,
    pub saturation: f32,
    pub drawings: Vec<DrawingPath>,
    pub stickers: Vec<TextSticker>,
}
