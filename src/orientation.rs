//! EXIF orientation and displayed image dimensions.
//!
//! Cameras often store pixels sideways and record the intended rotation in
//! the EXIF orientation tag. Layout must use the size the viewer will see,
//! so orientations that rotate by 90° or 270° swap width and height.

use crate::geometry::ImageSize;

/// The eight EXIF orientation values.
///
/// ```text
///     1: Identity    2: FlipH       3: Rotate180   4: FlipV
///     5: Transpose   6: Rotate90    7: Transverse  8: Rotate270
/// ```
///
/// Values 5–8 swap axes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExifOrientation {
    #[default]
    Identity,
    FlipH,
    Rotate180,
    FlipV,
    Transpose,
    Rotate90,
    Transverse,
    Rotate270,
}

impl ExifOrientation {
    const ALL: [Self; 8] = [
        Self::Identity,
        Self::FlipH,
        Self::Rotate180,
        Self::FlipV,
        Self::Transpose,
        Self::Rotate90,
        Self::Transverse,
        Self::Rotate270,
    ];

    /// Create from an EXIF orientation tag (1-8). Returns `None` for invalid values.
    pub fn from_exif(value: u8) -> Option<Self> {
        match value {
            1..=8 => Some(Self::ALL[(value - 1) as usize]),
            _ => None,
        }
    }

    /// EXIF orientation tag (1-8).
    pub fn to_exif(self) -> u8 {
        self as u8 + 1
    }

    /// Whether displaying the image swaps its width and height.
    pub fn swaps_axes(self) -> bool {
        matches!(
            self,
            Self::Transpose | Self::Rotate90 | Self::Transverse | Self::Rotate270
        )
    }

    /// Size as displayed, given the stored pixel size.
    pub fn display_size(self, stored: ImageSize) -> ImageSize {
        if self.swaps_axes() {
            ImageSize::new(stored.height, stored.width)
        } else {
            stored
        }
    }
}
