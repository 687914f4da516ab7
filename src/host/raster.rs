// SPDX-License-Identifier: GPL-3.0-or-later
// src/host/raster.rs
//
// Reference implementation of the loader and export primitive backed by
// the `image` codec. Hosts with a platform codec supply their own.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use image::{DynamicImage, ImageReader};

use super::{ExportRequest, ExportedImage, ImageDescriptor, ImageLoader};

/// Loader that treats the source handle as a filesystem path and reads
/// only the image header for dimensions.
#[derive(Debug, Default)]
pub struct RasterLoader;

impl ImageLoader for RasterLoader {
    async fn probe(&self, uri: &str) -> anyhow::Result<ImageDescriptor> {
        let path = uri.to_owned();
        let (width, height) = tokio::task::spawn_blocking(move || {
            image::image_dimensions(Path::new(&path))
                .with_context(|| format!("cannot read image: {path}"))
        })
        .await??;
        Ok(ImageDescriptor::new(uri, width, height))
    }
}

/// Export primitive backed by the `image` codec: decode, crop the
/// pre-validated pixel rectangle, apply the quarter-turn rotation and tone
/// adjustments, encode.
///
/// Saturation has no direct codec operation and is carried in the edit
/// metadata only.
#[derive(Debug, Default)]
pub struct RasterExporter;

impl super::ImageExporter for RasterExporter {
    fn export(&self, request: &ExportRequest) -> anyhow::Result<ExportedImage> {
        let source = Path::new(&request.source);
        let image = ImageReader::open(source)
            .with_context(|| format!("cannot open {}", source.display()))?
            .decode()
            .with_context(|| format!("cannot decode {}", source.display()))?;

        let (x, y, w, h) = request.crop.as_tuple();
        if !request.crop.is_valid()
            || x + w > image.width()
            || y + h > image.height()
        {
            bail!(
                "crop {:?} out of bounds for {}x{}",
                request.crop,
                image.width(),
                image.height()
            );
        }

        let cropped = image.crop_imm(x, y, w, h);
        let rotated = apply_rotation(cropped, request.rotation_degrees)?;
        let adjusted = apply_tone(rotated, request.brightness, request.contrast);

        let output = output_path(source, request.output_hint.as_deref());
        adjusted
            .save(&output)
            .with_context(|| format!("cannot write {}", output.display()))?;

        log::debug!(
            "exported {}x{} crop of {} to {}",
            adjusted.width(),
            adjusted.height(),
            source.display(),
            output.display()
        );

        Ok(ExportedImage {
            uri: output.to_string_lossy().into_owned(),
            width: adjusted.width(),
            height: adjusted.height(),
        })
    }
}

/// Quarter-turn rotation. The request contract guarantees a normalized
/// 90-degree step.
fn apply_rotation(image: DynamicImage, rotation_degrees: f32) -> anyhow::Result<DynamicImage> {
    match rotation_degrees.round() as i32 {
        0 => Ok(image),
        90 => Ok(image.rotate90()),
        180 => Ok(image.rotate180()),
        270 => Ok(image.rotate270()),
        other => bail!("unsupported rotation: {other} degrees"),
    }
}

/// Brightness/contrast scalars are neutral at 1.0; map them onto the
/// codec's additive brighten and percentage contrast operations.
fn apply_tone(image: DynamicImage, brightness: f32, contrast: f32) -> DynamicImage {
    let mut out = image;
    let brighten = ((brightness - 1.0) * 255.0).round() as i32;
    if brighten != 0 {
        out = out.brighten(brighten);
    }
    let contrast = (contrast - 1.0) * 100.0;
    if contrast.abs() > f32::EPSILON {
        out = out.adjust_contrast(contrast);
    }
    out
}

fn output_path(source: &Path, hint: Option<&str>) -> PathBuf {
    if let Some(hint) = hint {
        return PathBuf::from(hint);
    }
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_owned());
    let ext = source
        .extension()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "png".to_owned());
    source.with_file_name(format!("{stem}-edited.{ext}"))
}

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;
