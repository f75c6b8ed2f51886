//! Orientation correction from the EXIF `Orientation` tag.

use exif::{In, Reader, Tag};
use image::DynamicImage;
use std::io::Cursor;

/// Rotation implied by the EXIF orientation tag.
///
/// Angles are counter-clockwise: a camera held on its side (tag 6) needs the
/// picture turned 270° counter-clockwise, which is 90° clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Upright, or no usable tag
    #[default]
    None,
    /// Tag 3
    Rotate180,
    /// Tag 8
    Rotate90,
    /// Tag 6
    Rotate270,
    /// Any other tag value (mirrored variants included); left untouched
    Unknown(u32),
}

impl Orientation {
    /// Map a raw EXIF orientation value.
    pub fn from_exif_value(value: u32) -> Self {
        match value {
            1 => Self::None,
            3 => Self::Rotate180,
            6 => Self::Rotate270,
            8 => Self::Rotate90,
            other => Self::Unknown(other),
        }
    }

    /// Read the orientation from the encoded image bytes.
    ///
    /// Missing or malformed metadata is not an error: it reads as `None`.
    pub fn read(bytes: &[u8]) -> Self {
        let mut cursor = Cursor::new(bytes);
        let exif = match Reader::new().read_from_container(&mut cursor) {
            Ok(exif) => exif,
            Err(e) => {
                tracing::trace!("No readable EXIF: {e}");
                return Self::None;
            }
        };

        exif.get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|f| f.value.get_uint(0))
            .map(Self::from_exif_value)
            .unwrap_or_default()
    }

    /// Rotate `image` upright. The canvas grows to fit; nothing is cropped.
    pub fn apply(self, image: DynamicImage) -> DynamicImage {
        match self {
            Self::Rotate180 => image.rotate180(),
            // image's rotations are clockwise
            Self::Rotate90 => image.rotate270(),
            Self::Rotate270 => image.rotate90(),
            Self::None | Self::Unknown(_) => image,
        }
    }

    /// Whether applying this orientation changes the image.
    pub fn is_rotation(self) -> bool {
        matches!(self, Self::Rotate90 | Self::Rotate180 | Self::Rotate270)
    }
}
