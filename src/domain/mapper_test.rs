// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mapper_test.rs

use super::*;
use crate::constant::MAX_SCALE;

const VIEWPORT: Viewport = Viewport {
    width: 800.0,
    height: 600.0,
};

#[test]
fn full_displayed_image_maps_to_full_source_without_rotation() {
    let image = ImageSize::new(1600, 1200);
    let transform = TransformState::new(0.25);

    // Displayed box: 400x300 centered in the 800x600 viewport.
    let screen = CropRect::new(200.0, 150.0, 400.0, 300.0);
    let rect = map_screen_to_image(&screen, &transform, image, VIEWPORT).unwrap();
    assert_eq!(rect, PixelRect::new(0, 0, 1600, 1200));
}

#[test]
fn pan_offset_shifts_the_mapped_region() {
    let image = ImageSize::new(1600, 1200);
    let mut transform = TransformState::new(0.5);
    transform.begin_pan();
    transform.update_pan(-100.0, 40.0);
    transform.end_pan();

    // Displayed box: 800x600 at (-100, 40). A 200x200 screen crop at the
    // viewport origin lands 100 px into the image, 40 px above it.
    let screen = CropRect::new(0.0, 0.0, 200.0, 200.0);
    let rect = map_screen_to_image(&screen, &transform, image, VIEWPORT).unwrap();
    assert_eq!(rect.x, 200);
    // 40 screen px hang above the image; the origin clamps to the edge.
    assert_eq!(rect.y, 0);
    assert_eq!(rect.width, 400);
    assert_eq!(rect.height, 400);
}

#[test]
fn square_image_round_trips_under_90_degree_rotation() {
    // Square source: the bounding-box inverse is exact.
    let image = ImageSize::new(400, 400);
    let mut transform = TransformState::new(1.0);
    transform.rotate_cw();
    assert_eq!(transform.rotation_degrees, 90.0);

    let viewport = Viewport::new(500.0, 500.0);
    // Full rotated bounding box on screen: 400x400 centered.
    let screen = CropRect::new(50.0, 50.0, 400.0, 400.0);
    let rect = map_screen_to_image(&screen, &transform, image, viewport).unwrap();
    assert_eq!(rect, PixelRect::new(0, 0, 400, 400));
}

#[test]
fn rotated_mapping_swaps_extents_and_stays_in_bounds() {
    let image = ImageSize::new(400, 200);
    let mut transform = TransformState::new(1.0);
    transform.rotate_cw();

    let viewport = Viewport::new(500.0, 500.0);
    // The displayed bounding box is 200 wide, 400 tall (swapped).
    let screen = CropRect::new(150.0, 50.0, 200.0, 400.0);
    let rect = map_screen_to_image(&screen, &transform, image, viewport).unwrap();

    // The bounding-box inverse over-covers; the result must still be a
    // valid in-bounds region of the source.
    assert!(rect.is_valid());
    assert!(rect.fits(image));
    assert!(rect.width <= image.width);
    assert!(rect.height <= image.height);
}

#[test]
fn rotation_180_round_trips_exactly() {
    let image = ImageSize::new(600, 300);
    let mut transform = TransformState::new(1.0);
    transform.rotate_cw();
    transform.rotate_cw();

    let viewport = Viewport::new(800.0, 600.0);
    let screen = CropRect::new(100.0, 150.0, 600.0, 300.0);
    let rect = map_screen_to_image(&screen, &transform, image, viewport).unwrap();
    assert_eq!(rect, PixelRect::new(0, 0, 600, 300));
}

#[test]
fn zero_or_negative_scale_is_rejected() {
    let image = ImageSize::new(400, 400);
    let screen = CropRect::new(0.0, 0.0, 100.0, 100.0);

    let mut transform = TransformState::new(0.0);
    let err = map_screen_to_image(&screen, &transform, image, VIEWPORT).unwrap_err();
    assert!(matches!(err, EditorError::InvalidScale(_)));

    transform.scale = -1.0;
    let err = map_screen_to_image(&screen, &transform, image, VIEWPORT).unwrap_err();
    assert!(matches!(err, EditorError::InvalidScale(_)));
}

#[test]
fn missing_image_dimensions_are_rejected() {
    let screen = CropRect::new(0.0, 0.0, 100.0, 100.0);
    let transform = TransformState::new(1.0);
    let err =
        map_screen_to_image(&screen, &transform, ImageSize::new(0, 100), VIEWPORT).unwrap_err();
    assert!(matches!(err, EditorError::MissingImageSize));
}

#[test]
fn pinch_then_pan_then_commit_scenario() {
    let image = ImageSize::new(1000, 500);
    let crop = CropRect::new(200.0, 150.0, 400.0, 200.0);
    let min = TransformState::min_scale(&crop, image);
    let mut transform = TransformState::new(min);
    assert!((transform.scale - 0.4).abs() < 1e-6);

    transform.begin_pinch();
    transform.update_pinch(2.0, min, MAX_SCALE);
    transform.end_pinch();
    assert!((transform.scale - 0.8).abs() < 1e-6);

    transform.begin_pan();
    transform.update_pan(50.0, -30.0);
    transform.end_pan();
    assert_eq!(transform.translate_x, 50.0);
    assert_eq!(transform.translate_y, -30.0);

    // Commit with a crop covering the whole viewport.
    let screen = CropRect::new(0.0, 0.0, VIEWPORT.width, VIEWPORT.height);
    let rect = map_screen_to_image(&screen, &transform, image, VIEWPORT).unwrap();
    assert!(rect.is_valid());
    assert!(rect.fits(image));
    assert!(rect.width <= image.width);
    assert!(rect.height <= image.height);
}
