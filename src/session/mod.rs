// SPDX-License-Identifier: GPL-3.0-or-later
// src/session/mod.rs
//
// One editing session: gesture routing, undoable actions and commit.

pub mod event;
pub mod history;
pub mod settle;
pub mod snapshot;

use event::GestureEvent;
use history::EditHistory;
use settle::SettleAnimation;
use snapshot::{DrawingPath, EditorSnapshot, TextSticker};

use crate::config::EditorConfig;
use crate::domain::{mapper, AspectRatio, CropModel, TransformState, Viewport};
use crate::error::EditorError;
use crate::host::exif::Orientation;
use crate::host::{
    EditMetadata, ExportRequest, ExportedImage, ImageDescriptor, ImageExporter, ImageLoader,
};

/// Result of a successful commit: the validated parameters for the export
/// primitive plus the persistable edit record.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitOutput {
    pub export: ExportRequest,
    pub metadata: EditMetadata,
}

/// One editor session over one image.
///
/// Exclusively owns the transform, crop rectangle and undo stacks; the
/// host delivers gesture callbacks on a single logical timeline, so there
/// is exactly one writer and no locking. Concurrent sessions over the same
/// image are not supported.
#[derive(Debug)]
pub struct EditorSession {
    config: EditorConfig,
    image: ImageDescriptor,
    viewport: Viewport,
    pub transform: TransformState,
    pub crop: CropModel,
    pub brightness: f32,
    pub contrast: f32,
    pub saturation: f32,
    drawings: Vec<DrawingPath>,
    stickers: Vec<TextSticker>,
    history: EditHistory,
    settle: Option<SettleAnimation>,
    exif_orientation: Option<u16>,
}

impl EditorSession {
    /// Probe the source through the host loader and open a session.
    ///
    /// A loader failure aborts session initialization; the host surfaces
    /// the error to the user and nothing else is touched.
    pub async fn open<L: ImageLoader>(
        loader: &L,
        uri: &str,
        viewport: Viewport,
        config: EditorConfig,
    ) -> Result<Self, EditorError> {
        let image = loader.probe(uri).await.map_err(|e| {
            log::error!("session initialization failed for {uri}: {e:#}");
            EditorError::ImageRead(e)
        })?;
        Ok(Self::new(image, viewport, config))
    }

    /// Open a session over an already-probed image.
    pub fn new(image: ImageDescriptor, viewport: Viewport, config: EditorConfig) -> Self {
        let crop = CropModel::centered_default(viewport);
        let fit = TransformState::fit_scale(&crop.rect, image.size());
        Self {
            transform: TransformState::new(fit),
            crop,
            brightness: 1.0,
            contrast: 1.0,
            saturation: 1.0,
            drawings: Vec::new(),
            stickers: Vec::new(),
            history: EditHistory::new(config.history_depth),
            settle: None,
            exif_orientation: None,
            image,
            viewport,
            config,
        }
    }

    /// Seed the initial rotation from an EXIF orientation code.
    /// Best-effort: unknown codes map to the identity.
    pub fn set_exif_orientation(&mut self, code: u16) {
        self.exif_orientation = Some(code);
        self.transform.rotation_degrees = Orientation::from_code(code).rotation_degrees;
    }

    pub fn image(&self) -> &ImageDescriptor {
        &self.image
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn drawings(&self) -> &[DrawingPath] {
        &self.drawings
    }

    pub fn stickers(&self) -> &[TextSticker] {
        &self.stickers
    }

    /// Displacement of the in-flight settle spring, if any (rendering
    /// only; logical values are already committed).
    pub fn settle_displacement(&self) -> Option<f32> {
        self.settle.as_ref().map(SettleAnimation::displacement)
    }

    // -------------------------------------------------------------------------
    // Gestures
    // -------------------------------------------------------------------------

    /// Route one gesture event. Out-of-range input is clamped, never an
    /// error; every end event commits and starts a visual settle spring.
    pub fn apply_gesture(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::PanStart => self.transform.begin_pan(),
            GestureEvent::PanMove { dx, dy } => self.transform.update_pan(dx, dy),
            GestureEvent::PanEnd => {
                self.transform.end_pan();
                self.begin_settle();
            }

            GestureEvent::PinchStart => self.transform.begin_pinch(),
            GestureEvent::PinchMove { factor } => {
                let min = TransformState::min_scale(&self.crop.rect, self.image.size());
                self.transform.update_pinch(factor, min, self.config.max_scale);
            }
            GestureEvent::PinchEnd => {
                self.transform.end_pinch();
                self.begin_settle();
            }

            GestureEvent::CropDragStart { corner } => self.crop.begin_drag(corner),
            GestureEvent::CropDragMove { dx, dy } => {
                self.crop.update_drag(dx, dy, self.viewport);
            }
            GestureEvent::CropDragEnd => {
                self.crop.end_drag();
                self.begin_settle();
            }
        }
    }

    fn begin_settle(&mut self) {
        self.settle = SettleAnimation::spawn(self.config.settle_duration);
    }

    // -------------------------------------------------------------------------
    // Discrete actions (save-before-mutate)
    // -------------------------------------------------------------------------

    /// Rotate the image a quarter turn clockwise.
    pub fn rotate_cw(&mut self) {
        self.save_state();
        self.transform.rotate_cw();
    }

    /// Apply an aspect-ratio selection, springing the rectangle into its
    /// recomputed, recentered place.
    pub fn set_aspect_ratio(&mut self, aspect: AspectRatio) {
        self.save_state();
        self.crop.set_aspect(aspect, self.viewport);
        self.begin_settle();
    }

    /// Back to the initial pose: fit scale, no pan, no rotation, default
    /// centered crop. Tone adjustments and annotations are kept.
    pub fn reset(&mut self) {
        self.save_state();
        self.crop = CropModel::centered_default(self.viewport);
        let fit = TransformState::fit_scale(&self.crop.rect, self.image.size());
        self.transform = TransformState::new(fit);
    }

    /// Record a completed freehand stroke.
    pub fn finish_stroke(&mut self, path: DrawingPath) {
        self.save_state();
        self.drawings.push(path);
    }

    /// Add a text sticker.
    pub fn add_sticker(&mut self, sticker: TextSticker) {
        self.save_state();
        self.stickers.push(sticker);
    }

    /// Start dragging/editing an existing sticker. The pre-edit state is
    /// saved up front so the whole drag is one undo step.
    pub fn begin_sticker_edit(&mut self, index: usize) -> Option<&mut TextSticker> {
        if index >= self.stickers.len() {
            return None;
        }
        self.save_state();
        self.stickers.get_mut(index)
    }

    /// Delete a sticker.
    pub fn remove_sticker(&mut self, index: usize) -> Option<TextSticker> {
        if index >= self.stickers.len() {
            return None;
        }
        self.save_state();
        Some(self.stickers.remove(index))
    }

    // -------------------------------------------------------------------------
    // Undo / redo
    // -------------------------------------------------------------------------

    /// Undo the last discrete action. Returns `false` when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        let current = self.snapshot();
        match self.history.undo(current) {
            Some(restored) => {
                self.restore(restored);
                true
            }
            None => false,
        }
    }

    /// Redo a previously undone action. Returns `false` when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        let current = self.snapshot();
        match self.history.redo(current) {
            Some(restored) => {
                self.restore(restored);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Full value copy of the editable state.
    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            transform: self.transform,
            crop: self.crop.rect,
            aspect: self.crop.aspect,
            brightness: self.brightness,
            contrast: self.contrast,
            saturation: self.saturation,
            drawings: self.drawings.clone(),
            stickers: self.stickers.clone(),
        }
    }

    fn restore(&mut self, snapshot: EditorSnapshot) {
        self.transform = snapshot.transform;
        self.crop.set_rect(snapshot.crop);
        self.crop.aspect = snapshot.aspect;
        self.brightness = snapshot.brightness;
        self.contrast = snapshot.contrast;
        self.saturation = snapshot.saturation;
        self.drawings = snapshot.drawings;
        self.stickers = snapshot.stickers;
    }

    fn save_state(&mut self) {
        let snapshot = self.snapshot();
        self.history.save(snapshot);
    }

    // -------------------------------------------------------------------------
    // Commit
    // -------------------------------------------------------------------------

    /// Resolve the final edit: wait for any in-flight settle spring (with
    /// a bounded timeout), map the screen crop into source pixels and
    /// assemble the export request plus the persistable metadata.
    ///
    /// Precondition violations abort this commit attempt only; editor
    /// state and undo history are untouched, so the user can retry.
    pub async fn commit(&mut self) -> Result<CommitOutput, EditorError> {
        settle::wait_settled(self.settle.as_mut(), self.config.settle_timeout).await;
        self.settle = None;

        let crop = mapper::map_screen_to_image(
            &self.crop.rect,
            &self.transform,
            self.image.size(),
            self.viewport,
        )
        .inspect_err(|e| log::error!("commit rejected: {e}"))?;

        let metadata = self.metadata();
        let export = ExportRequest {
            source: self.image.uri.clone(),
            crop,
            rotation_degrees: self.transform.normalized_rotation(),
            brightness: self.brightness,
            contrast: self.contrast,
            saturation: self.saturation,
            output_hint: None,
        };
        Ok(CommitOutput { export, metadata })
    }

    /// Commit and run the export primitive in one step.
    ///
    /// An export failure is retryable: the session, its history and the
    /// already-resolved commit parameters are all untouched.
    pub async fn commit_and_export<E: ImageExporter>(
        &mut self,
        exporter: &E,
    ) -> Result<(ExportedImage, EditMetadata), EditorError> {
        let output = self.commit().await?;
        let exported = exporter.export(&output.export).map_err(|e| {
            log::error!("export failed for {}: {e:#}", output.export.source);
            EditorError::Export(e)
        })?;
        Ok((exported, output.metadata))
    }

    /// The persistable edit record; other parts of the system must
    /// round-trip it losslessly.
    pub fn metadata(&self) -> EditMetadata {
        EditMetadata {
            rotation: self.transform.normalized_rotation(),
            scale: self.transform.scale,
            translate_x: self.transform.translate_x,
            translate_y: self.transform.translate_y,
            crop: self.crop.rect,
            aspect_ratio: self.crop.aspect,
            brightness: self.brightness,
            contrast: self.contrast,
            saturation: self.saturation,
            drawings: (!self.drawings.is_empty()).then(|| self.drawings.clone()),
            text_stickers: (!self.stickers.is_empty()).then(|| self.stickers.clone()),
            exif_orientation: self.exif_orientation,
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
