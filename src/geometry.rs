//! Aspect-preserving fit and centering for a single image.
//!
//! Computes where one image lands inside a rectangular canvas: scaled to the
//! largest size that fits, aspect ratio preserved, centered on both axes.
//! Pure geometry on `f64` slide units, no allocations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use slidelayout::{Canvas, ImageSize, layout_single};
//!
//! let p = layout_single(ImageSize::new(2000.0, 900.0), Canvas::new(10.5, 5.7)).unwrap();
//!
//! // 20:9 is wider than 10.5:5.7, so width fills the canvas
//! assert_eq!(p.width, 10.5);
//! assert_eq!(p.x, 0.0);
//! assert!(p.y > 0.0);
//! ```

use core::fmt;

use num_traits::Float;

/// Relative tolerance used by the containment and aspect checks.
pub const TOLERANCE: f64 = 1e-9;

/// Natural dimensions of one image (pixels or any consistent unit).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageSize {
    pub width: f64,
    pub height: f64,
}

impl ImageSize {
    /// Create a new image size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    pub(crate) fn validate(&self) -> Result<(), LayoutError> {
        check_extent(self.width, self.height)?;
        check_ratio(self.aspect_ratio())
    }
}

/// Region of a slide available for image placement.
///
/// Placements are reported relative to the canvas's top-left corner; callers
/// translate them by wherever the canvas sits on the slide.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    /// Create a new canvas.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    pub(crate) fn validate(&self) -> Result<(), LayoutError> {
        check_extent(self.width, self.height)?;
        check_ratio(self.aspect_ratio())
    }
}

/// Axis-aligned rectangle assigned to one image or slide element.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Placement {
    /// Create a new placement.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (`x + width`).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Shift by `(dx, dy)`, e.g. from canvas space into slide space.
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Whether this rectangle lies inside `(0, 0, canvas.width, canvas.height)`,
    /// allowing [`TOLERANCE`] relative slack on the far edges.
    pub fn fits_within(&self, canvas: Canvas) -> bool {
        let slack_w = canvas.width * TOLERANCE;
        let slack_h = canvas.height * TOLERANCE;
        self.x >= -slack_w
            && self.y >= -slack_h
            && self.right() <= canvas.width + slack_w
            && self.bottom() <= canvas.height + slack_h
    }

    /// Whether the interiors of two rectangles overlap.
    ///
    /// Rectangles that merely share an edge do not overlap.
    pub fn overlaps(&self, other: &Placement) -> bool {
        let eps = TOLERANCE * self.width.max(self.height).max(other.width).max(other.height);
        self.x < other.right() - eps
            && other.x < self.right() - eps
            && self.y < other.bottom() - eps
            && other.y < self.bottom() - eps
    }
}

/// Layout computation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LayoutError {
    /// A width, height, or padding is non-positive or not finite.
    InvalidDimension,
    /// Grid layout was asked to place zero images.
    EmptyInput,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension => f.write_str("width and height must be positive and finite"),
            Self::EmptyInput => f.write_str("no images to lay out"),
        }
    }
}

impl core::error::Error for LayoutError {}

/// Scale an image into `canvas`, preserving aspect ratio, and center it.
///
/// The result touches the canvas on at least one axis and never exceeds it.
pub fn layout_single(image: ImageSize, canvas: Canvas) -> Result<Placement, LayoutError> {
    image.validate()?;
    canvas.validate()?;

    let (width, height) = fit_inside(image, canvas);
    Ok(Placement {
        x: (canvas.width - width) / 2.0,
        y: (canvas.height - height) / 2.0,
        width,
        height,
    })
}

/// Whether `placement` has the aspect ratio of `image`, within `rel_tol`.
pub fn preserves_aspect(placement: &Placement, image: ImageSize, rel_tol: f64) -> bool {
    let expected = image.aspect_ratio();
    Float::abs(placement.aspect_ratio() - expected) <= rel_tol * expected
}

// ============================================================================
// Internal geometry
// ============================================================================

/// Largest `(width, height)` with the image's aspect ratio that fits the box.
/// One axis is set to the box extent exactly; the other is derived.
fn fit_inside(image: ImageSize, canvas: Canvas) -> (f64, f64) {
    let aspect = image.aspect_ratio();
    if aspect > canvas.aspect_ratio() {
        // Wider than the box: width constrains.
        let width = canvas.width;
        (width, width / aspect)
    } else {
        let height = canvas.height;
        (height * aspect, height)
    }
}

fn check_extent(width: f64, height: f64) -> Result<(), LayoutError> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidDimension)
    }
}

/// Width/height must itself be representable; `1e300 / 1e-10` overflows to ∞.
fn check_ratio(ratio: f64) -> Result<(), LayoutError> {
    if ratio.is_finite() && ratio > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidDimension)
    }
}
