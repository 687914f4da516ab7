// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/aspect.rs
//
// Aspect-ratio constraints for the crop rectangle.

use serde::{Deserialize, Serialize};

use super::crop::{clamp_to_bounds, Corner, CropRect};
use super::geometry::Viewport;
use crate::constant::{MAX_CROP_SIZE, MIN_CROP_SIZE, SCALE_EPSILON};

/// Selectable crop aspect ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    Free,
    Square,
    Portrait4x5,
    Landscape16x9,
}

impl AspectRatio {
    /// Width-over-height value, or `None` for an unconstrained crop.
    pub fn ratio(self) -> Option<f32> {
        match self {
            Self::Free => None,
            Self::Square => Some(1.0),
            Self::Portrait4x5 => Some(4.0 / 5.0),
            Self::Landscape16x9 => Some(16.0 / 9.0),
        }
    }
}

/// Recompute a rectangle for an explicit aspect-ratio selection.
///
/// The rectangle keeps its current center. The over-long dimension is
/// derived from the other via the target ratio, sizes are clamped to the
/// viewport and the floor/ceiling, and if clamping changed a side the
/// other is re-derived so the ratio still holds. The final bounds clamp
/// can only shift the rectangle, never resize it.
pub fn apply_selection(rect: CropRect, aspect: AspectRatio, viewport: Viewport) -> CropRect {
    let Some(target) = aspect.ratio() else {
        return rect;
    };

    let (cx, cy) = rect.center();

    let (mut w, mut h) = if rect.width / rect.height > target {
        (rect.height * target, rect.height)
    } else {
        (rect.width, rect.width / target)
    };

    let max_w = viewport.width.min(MAX_CROP_SIZE);
    let max_h = viewport.height.min(MAX_CROP_SIZE);
    let (w0, h0) = (w, h);
    w = w.clamp(MIN_CROP_SIZE, max_w);
    h = h.clamp(MIN_CROP_SIZE, max_h);

    if (w - w0).abs() > SCALE_EPSILON {
        h = w / target;
    } else if (h - h0).abs() > SCALE_EPSILON {
        w = h * target;
    }

    let centered = CropRect::new(cx - w / 2.0, cy - h / 2.0, w, h);
    clamp_to_bounds(centered, viewport)
}

/// Constrain a corner-drag candidate to a locked ratio.
///
/// The dominant drag axis picks which dimension is primary for this update
/// tick (ties go to horizontal); deriving the secondary from a single
/// primary avoids the width/height feedback oscillation. The rectangle is
/// then repositioned from the fixed opposite corner's absolute pre-drag
/// position so that corner does not move regardless of which dimension was
/// primary.
pub fn constrain_drag(
    candidate: CropRect,
    corner: Corner,
    base: &CropRect,
    target: f32,
    dx: f32,
    dy: f32,
) -> CropRect {
    let (w, h) = if dx.abs() >= dy.abs() {
        let w = candidate.width.max(MIN_CROP_SIZE);
        (w, w / target)
    } else {
        let h = candidate.height.max(MIN_CROP_SIZE);
        (h * target, h)
    };

    let (fx, fy) = base.corner_position(corner.opposite());
    match corner {
        Corner::TopLeft => CropRect::new(fx - w, fy - h, w, h),
        Corner::TopRight => CropRect::new(fx, fy - h, w, h),
        Corner::BottomLeft => CropRect::new(fx - w, fy, w, h),
        Corner::BottomRight => CropRect::new(fx, fy, w, h),
    }
}

#[cfg(test)]
#[path = "aspect_test.rs"]
mod aspect_test;
