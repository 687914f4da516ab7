// SPDX-License-Identifier: GPL-3.0-or-later
// src/lib.rs
//
// Library root for the Reframe edit engine.

//! Gesture-to-pixel coordinate transform engine for a touch photo editor.
//!
//! The engine accumulates continuous multi-touch gesture deltas into
//! persistent transform state (scale, translation, quarter-turn rotation),
//! resizes a corner-constrained crop rectangle with optional aspect-ratio
//! locking, and at commit time converts the on-screen crop rectangle back
//! into exact source-image pixel coordinates - rotation included.
//!
//! Pixel work stays outside: image loading and the crop/export primitive
//! are host collaborators behind the narrow traits in [`host`]. The engine
//! only ever hands them pre-validated, in-bounds integer coordinates.

pub mod config;
pub mod constant;
pub mod domain;
pub mod error;
pub mod host;
pub mod session;

pub use config::EditorConfig;
pub use domain::{AspectRatio, Corner, CropModel, CropRect, ImageSize, PixelRect, TransformState, Viewport};
pub use error::EditorError;
pub use host::{EditMetadata, ExportRequest, ExportedImage, ImageDescriptor, ImageExporter, ImageLoader};
pub use session::event::GestureEvent;
pub use session::snapshot::{DrawingPath, EditorSnapshot, TextSticker};
pub use session::{CommitOutput, EditorSession};
