// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/geometry.rs
//
// Shared geometry value types.

use serde::{Deserialize, Serialize};

/// Editor viewport size in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Source image size in original pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Check that both dimensions are usable.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Crop region in original-image pixel coordinates.
///
/// Pure domain value - the final output of the coordinate mapper and the
/// only rectangle the export primitive ever sees. Always pre-validated:
/// in-bounds, integer, at least 1x1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn as_tuple(&self) -> (u32, u32, u32, u32) {
        (self.x, self.y, self.width, self.height)
    }

    /// Check if the region has valid dimensions.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Check if the region lies fully inside an image of the given size.
    pub fn fits(&self, image: ImageSize) -> bool {
        self.x + self.width <= image.width && self.y + self.height <= image.height
    }
}

/// Rotate `(x, y)` by `angle_degrees` about `(cx, cy)`.
pub fn rotate_point(x: f32, y: f32, cx: f32, cy: f32, angle_degrees: f32) -> (f32, f32) {
    let rad = angle_degrees.to_radians();
    let (sin, cos) = rad.sin_cos();
    let dx = x - cx;
    let dy = y - cy;
    (cx + dx * cos - dy * sin, cy + dx * sin + dy * cos)
}
