// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Pure geometry and gesture-state domain models. No I/O, no host concerns.

pub mod aspect;
pub mod crop;
pub mod geometry;
pub mod mapper;
pub mod transform;

pub use aspect::AspectRatio;
pub use crop::{clamp_to_bounds, Corner, CropModel, CropRect};
pub use geometry::{ImageSize, PixelRect, Viewport};
pub use transform::TransformState;
