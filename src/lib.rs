//! Slide image layout: aspect-preserving fit, grid placement, and deck planning.
//!
//! Pure geometry — no image decoding, no file output, `no_std` compatible.
//!
//! # Modules
//!
//! - [`geometry`] — Sizes, placements, and the single-image fit-and-center rule
//! - [`grid`] — Row-major grid placement of several images on one canvas
//! - [`deck`] — Deck sequencing and per-slide element placement
//! - [`orientation`] — EXIF orientation and displayed image dimensions
//! - `svg` — SVG preview of planned slides (requires the `svg` feature)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod geometry;
pub mod orientation;

#[cfg(feature = "alloc")]
pub mod deck;
#[cfg(feature = "alloc")]
pub mod grid;

#[cfg(feature = "svg")]
pub mod svg;

// Re-exports: core types from geometry module
pub use geometry::{Canvas, ImageSize, LayoutError, Placement, layout_single};
pub use orientation::ExifOrientation;

#[cfg(feature = "alloc")]
pub use deck::{
    Deck, DeckError, DeckPlan, DeckStyle, Element, ProductSlide, Rgb, SlideKind, SlidePlan,
    TextStyle, clean_text,
};
#[cfg(feature = "alloc")]
pub use grid::{Grid, GridLayout, layout_grid};
