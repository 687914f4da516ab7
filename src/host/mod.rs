// SPDX-License-Identifier: GPL-3.0-or-later
// src/host/mod.rs
//
// Narrow contracts to external collaborators: image loading, the opaque
// export/crop primitive, and the serialized edit-metadata record.

pub mod exif;
#[cfg(feature = "image")]
pub mod raster;

use serde::{Deserialize, Serialize};

use crate::domain::{AspectRatio, CropRect, ImageSize, PixelRect};
use crate::session::snapshot::{DrawingPath, TextSticker};

/// Original image descriptor: source pixel dimensions plus an opaque
/// handle to the pixel data. The pixel data is owned by the host media
/// layer and never copied by the core. Immutable for one editing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDescriptor {
    pub uri: String,
    pub width: u32,
    pub height: u32,
}

impl ImageDescriptor {
    pub fn new(uri: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            uri: uri.into(),
            width,
            height,
        }
    }

    pub fn size(&self) -> ImageSize {
        ImageSize::new(self.width, self.height)
    }
}

/// Resolves a source handle to the original pixel dimensions.
///
/// A failure here is fatal to session initialization but not to the host
/// application: the session is simply not opened.
pub trait ImageLoader {
    fn probe(&self, uri: &str) -> impl Future<Output = anyhow::Result<ImageDescriptor>> + Send;
}

/// Everything the export primitive needs, pre-validated by the core:
/// in-bounds integer pixel coordinates and a rotation already normalized
/// to `[0, 360)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    pub source: String,
    pub crop: PixelRect,
    pub rotation_degrees: f32,
    pub brightness: f32,
    pub contrast: f32,
    pub saturation: f32,
    /// Preferred output handle; the primitive may derive its own.
    pub output_hint: Option<String>,
}

/// Handle to the exported pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedImage {
    pub uri: String,
    pub width: u32,
    pub height: u32,
}

/// The opaque crop/export primitive. The core performs no pixel
/// resampling itself; it only hands over validated parameters.
pub trait ImageExporter {
    fn export(&self, request: &ExportRequest) -> anyhow::Result<ExportedImage>;
}

/// The final edit record other parts of the system persist and must
/// round-trip losslessly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditMetadata {
    pub rotation: f32,
    pub scale: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    pub crop: CropRect,
    pub aspect_ratio: AspectRatio,
    pub brightness: f32,
    pub contrast: f32,
    pub saturation: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drawings: Option<Vec<DrawingPath>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_stickers: Option<Vec<TextSticker>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exif_orientation: Option<u16>,
}
