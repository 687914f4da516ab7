// SPDX-License-Identifier: GPL-3.0-or-later
// src/host/exif.rs
//
// EXIF orientation handling (best-effort).

/// Initial presentation derived from an EXIF orientation code. Flips are
/// represented separately from rotation; the transform engine only
/// consumes the rotation part.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    pub rotation_degrees: f32,
    pub flip_horizontal: bool,
    pub flip_vertical: bool,
}

impl Orientation {
    /// Map an EXIF orientation code (1-8) to rotation and flips.
    ///
    /// Out-of-range codes fall back to the identity; orientation input is
    /// best-effort and never fails a session.
    pub fn from_code(code: u16) -> Self {
        match code {
            2 => Self {
                flip_horizontal: true,
                ..Self::default()
            },
            3 => Self {
                rotation_degrees: 180.0,
                ..Self::default()
            },
            4 => Self {
                flip_vertical: true,
                ..Self::default()
            },
            5 => Self {
                rotation_degrees: 90.0,
                flip_horizontal: true,
                flip_vertical: false,
            },
            6 => Self {
                rotation_degrees: 90.0,
                ..Self::default()
            },
            7 => Self {
                rotation_degrees: 90.0,
                flip_horizontal: false,
                flip_vertical: true,
            },
            8 => Self {
                rotation_degrees: 270.0,
                ..Self::default()
            },
            _ => Self::default(),
        }
    }
}

/// Read the EXIF orientation code from an image file, defaulting to 1
/// (normal) when the file has no usable EXIF data.
#[cfg(feature = "image")]
pub fn read_orientation(path: &std::path::Path) -> u16 {
    fn read(path: &std::path::Path) -> anyhow::Result<u16> {
        use anyhow::Context;

        let file = std::fs::File::open(path)?;
        let mut reader = std::io::BufReader::new(file);
        let data = exif::Reader::new().read_from_container(&mut reader)?;
        let field = data
            .get_field(exif::Tag::Orientation, exif::In::PRIMARY)
            .context("no orientation tag")?;
        let code = field.value.get_uint(0).context("empty orientation value")?;
        Ok(code as u16)
    }

    match read(path) {
        Ok(code) => code,
        Err(e) => {
            log::debug!("no EXIF orientation for {}: {e}", path.display());
            1
        }
    }
}

#[cfg(test)]
#[path = "exif_test.rs"]
mod exif_test;
