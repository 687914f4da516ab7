// SPDX-License-Identifier: GPL-3.0-or-later
// src/session/mod_test.rs

use super::*;
use crate::domain::Corner;
use crate::session::snapshot::{DrawingPath, TextSticker};

fn descriptor() -> ImageDescriptor {
    ImageDescriptor::new("mem://photo", 1000, 500)
}

fn viewport() -> Viewport {
    Viewport::new(800.0, 600.0)
}

fn session() -> EditorSession {
    EditorSession::new(descriptor(), viewport(), EditorConfig::default())
}

use crate::config::EditorConfig;
use crate::domain::Viewport;

struct FailingLoader;

impl ImageLoader for FailingLoader {
    async fn probe(&self, uri: &str) -> anyhow::Result<ImageDescriptor> {
        anyhow::bail!("no such image: {uri}")
    }
}

struct FixedLoader;

impl ImageLoader for FixedLoader {
    async fn probe(&self, uri: &str) -> anyhow::Result<ImageDescriptor> {
        Ok(ImageDescriptor::new(uri, 1000, 500))
    }
}

#[tokio::test]
async fn open_probes_the_loader() {
    let session = EditorSession::open(&FixedLoader, "mem://photo", viewport(), EditorConfig::default())
        .await
        .unwrap();
    assert_eq!(session.image().width, 1000);
    assert_eq!(session.image().height, 500);
}

#[tokio::test]
async fn loader_failure_aborts_session_initialization() {
    let err = EditorSession::open(&FailingLoader, "mem://gone", viewport(), EditorConfig::default())
        .await
        .unwrap_err();
    assert!(matches!(err, EditorError::ImageRead(_)));
}

#[test]
fn initial_scale_fits_the_crop() {
    let s = session();
    let min = TransformState::min_scale(&s.crop.rect, s.image().size());
    assert!((s.transform.scale - min).abs() < 1e-6);
    assert!(s.transform.is_committed());
}

#[test]
fn gesture_events_drive_the_transform() {
    let mut s = session();
    s.apply_gesture(GestureEvent::PanStart);
    s.apply_gesture(GestureEvent::PanMove { dx: 50.0, dy: -30.0 });
    assert_eq!(s.transform.translate_x, 50.0);
    assert_eq!(s.transform.translate_y, -30.0);

    s.apply_gesture(GestureEvent::PinchStart);
    s.apply_gesture(GestureEvent::PinchMove { factor: 1.5 });
    assert!(s.transform.scale <= crate::constant::MAX_SCALE);
}

#[test]
fn crop_drag_events_resize_the_rect() {
    let mut s = session();
    let before = s.crop.rect;
    s.apply_gesture(GestureEvent::CropDragStart { corner: Corner::BottomRight });
    s.apply_gesture(GestureEvent::CropDragMove { dx: -60.0, dy: -60.0 });
    assert!((before.width - s.crop.rect.width - 60.0).abs() < 0.5);
    assert!((before.height - s.crop.rect.height - 60.0).abs() < 0.5);
}

#[test]
fn rotate_saves_state_before_mutating() {
    let mut s = session();
    assert_eq!(s.transform.rotation_degrees, 0.0);

    s.rotate_cw();
    assert_eq!(s.transform.rotation_degrees, 90.0);

    // The saved snapshot is the pre-action state.
    assert!(s.undo());
    assert_eq!(s.transform.rotation_degrees, 0.0);
    assert!(s.redo());
    assert_eq!(s.transform.rotation_degrees, 90.0);
}

#[test]
fn undo_with_empty_history_reports_nothing_to_undo() {
    let mut s = session();
    assert!(!s.undo());
    assert!(!s.redo());
}

#[test]
fn aspect_selection_is_undoable_and_constrains_the_rect() {
    let mut s = session();
    let before = s.crop.rect;

    s.set_aspect_ratio(AspectRatio::Landscape16x9);
    let ratio = s.crop.rect.width / s.crop.rect.height;
    assert!((ratio - 16.0 / 9.0).abs() < 0.01);

    assert!(s.undo());
    assert_eq!(s.crop.rect, before);
    assert_eq!(s.crop.aspect, AspectRatio::Free);
}

#[test]
fn stroke_and_sticker_actions_are_undoable() {
    let mut s = session();
    s.finish_stroke(DrawingPath {
        points: vec![(1.0, 2.0), (3.0, 4.0)],
        color: [0, 0, 0, 255],
        stroke_width: 3.0,
    });
    s.add_sticker(TextSticker {
        text: "hello".to_owned(),
        x: 10.0,
        y: 20.0,
        font_size: 24.0,
        color: [255, 255, 255, 255],
        rotation_degrees: 0.0,
        scale: 1.0,
    });
    assert_eq!(s.drawings().len(), 1);
    assert_eq!(s.stickers().len(), 1);

    assert!(s.remove_sticker(0).is_some());
    assert!(s.stickers().is_empty());

    assert!(s.undo());
    assert_eq!(s.stickers().len(), 1);
    assert!(s.undo());
    assert!(s.stickers().is_empty());
    assert!(s.undo());
    assert!(s.drawings().is_empty());
}

#[test]
fn sticker_edit_out_of_range_saves_nothing() {
    let mut s = session();
    assert!(s.begin_sticker_edit(3).is_none());
    assert!(s.remove_sticker(0).is_none());
    assert!(!s.can_undo());
}

#[test]
fn reset_restores_initial_pose_but_keeps_annotations() {
    let mut s = session();
    let initial_crop = s.crop.rect;
    s.finish_stroke(DrawingPath {
        points: vec![(0.0, 0.0)],
        color: [0, 0, 0, 255],
        stroke_width: 1.0,
    });
    s.apply_gesture(GestureEvent::PanStart);
    s.apply_gesture(GestureEvent::PanMove { dx: 40.0, dy: 40.0 });
    s.apply_gesture(GestureEvent::PanEnd);
    s.rotate_cw();

    s.reset();
    assert_eq!(s.transform.translate_x, 0.0);
    assert_eq!(s.transform.rotation_degrees, 0.0);
    assert_eq!(s.crop.rect, initial_crop);
    assert_eq!(s.drawings().len(), 1);
}

#[test]
fn exif_orientation_seeds_rotation() {
    let mut s = session();
    s.set_exif_orientation(6);
    assert_eq!(s.transform.rotation_degrees, 90.0);
    assert_eq!(s.metadata().exif_orientation, Some(6));

    s.set_exif_orientation(42);
    assert_eq!(s.transform.rotation_degrees, 0.0);
}

#[tokio::test]
async fn commit_produces_validated_export_request() {
    let mut s = session();
    s.apply_gesture(GestureEvent::PinchStart);
    s.apply_gesture(GestureEvent::PinchMove { factor: 2.0 });
    s.apply_gesture(GestureEvent::PinchEnd);
    s.apply_gesture(GestureEvent::PanStart);
    s.apply_gesture(GestureEvent::PanMove { dx: 50.0, dy: -30.0 });
    s.apply_gesture(GestureEvent::PanEnd);
    s.rotate_cw();

    let output = s.commit().await.unwrap();
    let crop = output.export.crop;
    assert!(crop.is_valid());
    assert!(crop.fits(s.image().size()));
    assert_eq!(output.export.rotation_degrees, 90.0);
    assert_eq!(output.export.source, "mem://photo");
    assert_eq!(output.metadata.rotation, 90.0);
    assert_eq!(output.metadata.translate_x, 50.0);
}

#[tokio::test]
async fn failed_commit_leaves_state_and_history_intact() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut s = session();
    s.rotate_cw();
    s.transform.scale = 0.0;

    let err = s.commit().await.unwrap_err();
    assert!(matches!(err, EditorError::InvalidScale(_)));

    // The session survives for a retry, history included.
    assert!(s.can_undo());
    assert_eq!(s.transform.rotation_degrees, 90.0);
}

struct RecordingExporter;

impl ImageExporter for RecordingExporter {
    fn export(&self, request: &ExportRequest) -> anyhow::Result<ExportedImage> {
        Ok(ExportedImage {
            uri: format!("{}-edited", request.source),
            width: request.crop.width,
            height: request.crop.height,
        })
    }
}

struct BrokenExporter;

impl ImageExporter for BrokenExporter {
    fn export(&self, _request: &ExportRequest) -> anyhow::Result<ExportedImage> {
        anyhow::bail!("disk full")
    }
}

#[tokio::test]
async fn commit_and_export_runs_the_primitive() {
    let mut s = session();
    s.rotate_cw();

    let (exported, metadata) = s.commit_and_export(&RecordingExporter).await.unwrap();
    assert_eq!(exported.uri, "mem://photo-edited");
    assert!(exported.width > 0 && exported.height > 0);
    assert_eq!(metadata.rotation, 90.0);
}

#[tokio::test]
async fn export_failure_is_retryable() {
    let mut s = session();
    s.rotate_cw();

    let err = s.commit_and_export(&BrokenExporter).await.unwrap_err();
    assert!(matches!(err, EditorError::Export(_)));

    // Nothing was consumed; a retry with a working primitive succeeds.
    assert!(s.can_undo());
    assert!(s.commit_and_export(&RecordingExporter).await.is_ok());
}

#[tokio::test]
async fn commit_waits_for_settle_completion() {
    let mut s = session();
    s.apply_gesture(GestureEvent::PanStart);
    s.apply_gesture(GestureEvent::PanMove { dx: 10.0, dy: 10.0 });
    s.apply_gesture(GestureEvent::PanEnd);
    assert!(s.settle_displacement().is_some());

    let output = s.commit().await.unwrap();
    // The settle spring is visual only; committed values are unchanged.
    assert_eq!(output.metadata.translate_x, 10.0);
    assert_eq!(output.metadata.translate_y, 10.0);
    assert!(s.settle_displacement().is_none());
}
