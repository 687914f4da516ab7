// SPDX-License-Identifier: GPL-3.0-or-later
// src/session/event.rs
//
// Gesture events delivered by the host input layer.

use crate::domain::Corner;

/// One step of a continuous gesture session.
///
/// The host delivers these on a single logical timeline. Every gesture is
/// a start → update* → end sequence; update deltas are cumulative from the
/// session start, not frame increments. Lifting all touch points always
/// produces the matching end event; there is no separate abort path.
/// Pan and pinch may interleave (two-finger drag); each accumulates
/// against its own base snapshot taken at its start event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    PanStart,
    PanMove { dx: f32, dy: f32 },
    PanEnd,

    PinchStart,
    /// `factor` is the ratio of the current finger distance to the
    /// distance at `PinchStart`.
    PinchMove { factor: f32 },
    PinchEnd,

    CropDragStart { corner: Corner },
    CropDragMove { dx: f32, dy: f32 },
    CropDragEnd,
}
