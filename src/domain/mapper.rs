// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mapper.rs
//
// Screen-space to image-space crop conversion.

use super::crop::CropRect;
use super::geometry::{rotate_point, ImageSize, PixelRect, Viewport};
use super::transform::TransformState;
use crate::constant::SCALE_EPSILON;
use crate::error::EditorError;

/// Convert the on-screen crop rectangle into an axis-aligned rectangle in
/// original-image pixel coordinates.
///
/// The displayed image is the source scaled by `transform.scale`, rotated
/// by `transform.rotation_degrees`, centered in the viewport and shifted
/// by the pan offset. This walks that construction backwards:
///
/// 1. locate the displayed (rotated) bounding box on screen;
/// 2. un-scale the crop rectangle into unrotated image-local coordinates;
/// 3. under rotation, rotate the rectangle's corners back about the image
///    center and take their axis-aligned bounding box;
/// 4. clamp to the image bounds and round to integers.
///
/// The bounding box in step 3 is a deliberate simplification: a rotated
/// crop selection maps to an axis-aligned source region that fully
/// contains the intended area, not a tight inverse.
pub fn map_screen_to_image(
    screen: &CropRect,
    transform: &TransformState,
    image: ImageSize,
    viewport: Viewport,
) -> Result<PixelRect, EditorError> {
    if transform.scale <= 0.0 {
        return Err(EditorError::InvalidScale(transform.scale));
    }
    if !image.is_valid() {
        return Err(EditorError::MissingImageSize);
    }

    let img_w = image.width as f32;
    let img_h = image.height as f32;
    let scale = transform.scale;
    let rotation = transform.normalized_rotation();

    // Step 1: displayed bounding box of the transformed image.
    let scaled_w = img_w * scale;
    let scaled_h = img_h * scale;
    let rad = rotation.to_radians();
    let rotated_w = scaled_w * rad.cos().abs() + scaled_h * rad.sin().abs();
    let rotated_h = scaled_w * rad.sin().abs() + scaled_h * rad.cos().abs();
    let display_x = (viewport.width - rotated_w) / 2.0 + transform.translate_x;
    let display_y = (viewport.height - rotated_h) / 2.0 + transform.translate_y;

    // Step 2: crop rectangle in unrotated image-local coordinates.
    let mut x = (screen.x - display_x) / scale;
    let mut y = (screen.y - display_y) / scale;
    let mut w = screen.width / scale;
    let mut h = screen.height / scale;

    // Step 3: reverse the rotation corner-wise and bound the result.
    if rotation.abs() > SCALE_EPSILON {
        let cx = img_w / 2.0;
        let cy = img_h / 2.0;
        let corners = [
            rotate_point(x, y, cx, cy, -rotation),
            rotate_point(x + w, y, cx, cy, -rotation),
            rotate_point(x + w, y + h, cx, cy, -rotation),
            rotate_point(x, y + h, cx, cy, -rotation),
        ];
        let min_x = corners.iter().map(|c| c.0).fold(f32::INFINITY, f32::min);
        let max_x = corners.iter().map(|c| c.0).fold(f32::NEG_INFINITY, f32::max);
        let min_y = corners.iter().map(|c| c.1).fold(f32::INFINITY, f32::min);
        let max_y = corners.iter().map(|c| c.1).fold(f32::NEG_INFINITY, f32::max);
        x = min_x;
        y = min_y;
        w = max_x - min_x;
        h = max_y - min_y;
    }

    // Step 4: clamp to image bounds and round.
    let x = x.clamp(0.0, img_w - 1.0).round();
    let y = y.clamp(0.0, img_h - 1.0).round();
    let w = w.clamp(1.0, img_w - x).round().max(1.0);
    let h = h.clamp(1.0, img_h - y).round().max(1.0);

    let out = PixelRect::new(x as u32, y as u32, w as u32, h as u32);
    debug_assert!(out.fits(image));
    Ok(out)
}

#[cfg(test)]
#[path = "mapper_test.rs"]
mod mapper_test;
