// SPDX-License-Identifier: GPL-3.0-or-later
// src/error.rs
//
// Error taxonomy for the edit engine.

/// Errors surfaced by the edit engine.
///
/// Geometry and gesture input never error: out-of-range values are clamped
/// and clamping is the defined recovery. What remains is commit-time
/// precondition violations (fatal to that commit attempt only) and boundary
/// I/O failures (retryable; in-memory editor state stays intact).
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// The transform scale was zero or negative at commit time. Should be
    /// unreachable given clamping; rejected rather than dividing by zero.
    #[error("invalid scale at commit: {0}")]
    InvalidScale(f32),

    /// Source image dimensions were unavailable at commit time.
    #[error("image dimensions unavailable")]
    MissingImageSize,

    /// The image loader could not read the source. Fatal to session
    /// initialization, not to the host application.
    #[error("cannot read image: {0}")]
    ImageRead(#[source] anyhow::Error),

    /// The export primitive failed. The editor state is untouched so the
    /// user can retry without redoing edits.
    #[error("failed to save edited image: {0}")]
    Export(#[source] anyhow::Error),
}
