// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop.rs
//
// Crop rectangle model, corner-drag state and bounds clamping.

use serde::{Deserialize, Serialize};

use super::aspect::{self, AspectRatio};
use super::geometry::Viewport;
use crate::constant::{DEFAULT_CROP_FRACTION, MAX_CROP_SIZE, MIN_CROP_SIZE};

/// Draggable crop handles. Only corners resize; edges are not handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// The diagonally opposite corner, which a resize keeps fixed.
    pub fn opposite(self) -> Self {
        match self {
            Self::TopLeft => Self::BottomRight,
            Self::TopRight => Self::BottomLeft,
            Self::BottomLeft => Self::TopRight,
            Self::BottomRight => Self::TopLeft,
        }
    }
}

/// Crop rectangle in screen-space pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CropRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Absolute screen position of a corner.
    pub fn corner_position(&self, corner: Corner) -> (f32, f32) {
        match corner {
            Corner::TopLeft => (self.x, self.y),
            Corner::TopRight => (self.right(), self.y),
            Corner::BottomLeft => (self.x, self.bottom()),
            Corner::BottomRight => (self.right(), self.bottom()),
        }
    }
}

/// Clamp a candidate rectangle to the viewport and the size floor.
///
/// Two passes on purpose. Edge clipping discards the overflowing part (the
/// rectangle is not wrapped or shifted), which can shrink a side below the
/// floor; the floor is re-applied afterwards and the rectangle shifted
/// inward if re-flooring pushed it back over a bound. The result always
/// fits the viewport and respects the minimum, and the function is
/// idempotent.
pub fn clamp_to_bounds(rect: CropRect, viewport: Viewport) -> CropRect {
    let min_size = MIN_CROP_SIZE;
    let mut x = rect.x;
    let mut y = rect.y;
    let mut w = rect.width.max(min_size);
    let mut h = rect.height.max(min_size);

    if x < 0.0 {
        w += x;
        x = 0.0;
    }
    if y < 0.0 {
        h += y;
        y = 0.0;
    }
    if x + w > viewport.width {
        w = viewport.width - x;
    }
    if y + h > viewport.height {
        h = viewport.height - y;
    }

    // Viewport clipping can undercut the floor; re-apply it, then shift
    // inward so the rectangle still fits.
    w = w.max(min_size);
    h = h.max(min_size);
    if x + w > viewport.width {
        x = viewport.width - w;
    }
    if y + h > viewport.height {
        y = viewport.height - h;
    }

    CropRect::new(x.max(0.0), y.max(0.0), w, h)
}

/// Crop rectangle plus its gesture session state.
///
/// Corner drags follow the same start/update/end protocol as pan and
/// pinch: `begin_drag` snapshots the live rectangle, every `update_drag`
/// recomputes from the snapshot plus the session-total delta, `end_drag`
/// commits.
#[derive(Debug, Clone)]
pub struct CropModel {
    pub rect: CropRect,
    pub aspect: AspectRatio,
    base: CropRect,
    active_corner: Option<Corner>,
}

impl CropModel {
    /// Initial crop: a centered square sized from the shorter viewport
    /// side.
    pub fn centered_default(viewport: Viewport) -> Self {
        let side = (viewport.width.min(viewport.height) * DEFAULT_CROP_FRACTION)
            .clamp(MIN_CROP_SIZE, MAX_CROP_SIZE);
        let rect = CropRect::new(
            (viewport.width - side) / 2.0,
            (viewport.height - side) / 2.0,
            side,
            side,
        );
        let rect = clamp_to_bounds(rect, viewport);
        Self {
            rect,
            aspect: AspectRatio::Free,
            base: rect,
            active_corner: None,
        }
    }

    pub fn begin_drag(&mut self, corner: Corner) {
        self.base = self.rect;
        self.active_corner = Some(corner);
    }

    /// Apply a corner drag delta (cumulative from gesture start): move the
    /// active corner, keep the diagonally opposite corner fixed.
    ///
    /// No smoothing mid-drag; the live rectangle is written directly.
    pub fn update_drag(&mut self, dx: f32, dy: f32, viewport: Viewport) {
        let Some(corner) = self.active_corner else {
            return;
        };

        let b = self.base;
        let candidate = match corner {
            Corner::TopLeft => {
                CropRect::new(b.x + dx, b.y + dy, b.width - dx, b.height - dy)
            }
            Corner::TopRight => CropRect::new(b.x, b.y + dy, b.width + dx, b.height - dy),
            Corner::BottomLeft => CropRect::new(b.x + dx, b.y, b.width - dx, b.height + dy),
            Corner::BottomRight => CropRect::new(b.x, b.y, b.width + dx, b.height + dy),
        };

        let candidate = match self.aspect.ratio() {
            Some(target) => aspect::constrain_drag(candidate, corner, &b, target, dx, dy),
            None => candidate,
        };

        self.rect = clamp_to_bounds(candidate, viewport);
    }

    pub fn end_drag(&mut self) {
        self.base = self.rect;
        self.active_corner = None;
    }

    /// Apply an explicit aspect-ratio selection, recomputing about the
    /// rectangle's current center.
    pub fn set_aspect(&mut self, aspect: AspectRatio, viewport: Viewport) {
        self.aspect = aspect;
        self.rect = aspect::apply_selection(self.rect, aspect, viewport);
        self.base = self.rect;
    }

    /// Replace the committed rectangle outside of a drag (undo/redo
    /// restore path).
    pub fn set_rect(&mut self, rect: CropRect) {
        self.rect = rect;
        self.base = rect;
        self.active_corner = None;
    }

    /// Base snapshot of the current drag session (the committed rectangle
    /// when no drag is active).
    pub fn base_rect(&self) -> CropRect {
        self.base
    }
}

#[cfg(test)]
#[path = "crop_test.rs"]
mod crop_test;
