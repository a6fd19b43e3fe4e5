//! Grid placement of several images on one canvas.
//!
//! Images fill a row-major grid of at most `max_columns` columns. Each cell
//! gets the single-image fit from [`layout_single`], offset to the cell's
//! top-left corner. Padding separates columns and also insets the outer
//! left and right edges; rows are separated by padding but the grid is
//! flush with the canvas top and bottom.
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │p┌───────┐p┌───────┐p┌───────┐p          │
//!   │ │   0   │ │   1   │ │   2   │           │
//!   │ └───────┘ └───────┘ └───────┘           │
//!   │                p                        │
//!   │ ┌───────┐                               │
//!   │ │   3   │                               │
//!   │ └───────┘                               │
//!   └─────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use slidelayout::{Canvas, GridLayout, ImageSize};
//!
//! let images = [ImageSize::new(800.0, 600.0); 4];
//! let placements = GridLayout::new(Canvas::new(13.33, 5.7))
//!     .max_columns(3)
//!     .padding(0.2)
//!     .compute(&images)
//!     .unwrap();
//!
//! assert_eq!(placements.len(), 4);
//! // Fourth image wraps to the second row, first column
//! assert!(placements[3].y > placements[0].y);
//! assert!(placements[3].x < placements[1].x);
//! ```

use alloc::vec::Vec;

use crate::geometry::{Canvas, ImageSize, LayoutError, Placement, layout_single};

/// Default column cap.
pub const DEFAULT_MAX_COLUMNS: usize = 3;

/// Default gap between cells, in canvas units.
pub const DEFAULT_PADDING: f64 = 0.2;

/// Column and row counts for a given number of images.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    pub columns: usize,
    pub rows: usize,
}

impl Grid {
    /// Grid shape for `count` images with at most `max_columns` per row.
    ///
    /// A `max_columns` of zero is treated as one.
    pub fn for_count(count: usize, max_columns: usize) -> Result<Self, LayoutError> {
        if count == 0 {
            return Err(LayoutError::EmptyInput);
        }
        let columns = count.min(max_columns.max(1));
        Ok(Self {
            columns,
            rows: count.div_ceil(columns),
        })
    }

    /// `(row, column)` of the image at `index`, row-major.
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }
}

/// Grid layout specification.
///
/// # Example
///
/// ```
/// use slidelayout::{Canvas, Grid, GridLayout};
///
/// let layout = GridLayout::new(Canvas::new(13.33, 5.7));
/// let (cell_w, cell_h) = layout.cell_size(Grid::for_count(6, 3).unwrap()).unwrap();
///
/// assert!((cell_w - (13.33 - 0.8) / 3.0).abs() < 1e-12);
/// assert!((cell_h - (5.7 - 0.2) / 2.0).abs() < 1e-12);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLayout {
    pub canvas: Canvas,
    pub max_columns: usize,
    pub padding: f64,
}

impl GridLayout {
    /// Grid over `canvas` with the default column cap and padding.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            max_columns: DEFAULT_MAX_COLUMNS,
            padding: DEFAULT_PADDING,
        }
    }

    /// Set the column cap.
    pub fn max_columns(mut self, max_columns: usize) -> Self {
        self.max_columns = max_columns;
        self
    }

    /// Set the gap between cells.
    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Cell dimensions for `grid` after subtracting padding.
    ///
    /// Fails with [`LayoutError::InvalidDimension`] when the canvas or padding
    /// is invalid, or when padding leaves no room for the cells.
    pub fn cell_size(&self, grid: Grid) -> Result<(f64, f64), LayoutError> {
        self.canvas.validate()?;
        check_padding(self.padding)?;
        let columns = grid.columns as f64;
        let rows = grid.rows as f64;
        let available_w = self.canvas.width - self.padding * (columns + 1.0);
        let available_h = self.canvas.height - self.padding * (rows - 1.0);
        let cell = Canvas::new(available_w / columns, available_h / rows);
        cell.validate()?;
        Ok((cell.width, cell.height))
    }

    /// Place `images` in order. One image uses the whole canvas, unpadded,
    /// though the padding must still be valid.
    pub fn compute(&self, images: &[ImageSize]) -> Result<Vec<Placement>, LayoutError> {
        let grid = Grid::for_count(images.len(), self.max_columns)?;
        check_padding(self.padding)?;

        if let [image] = images {
            return layout_single(*image, self.canvas).map(|p| alloc::vec![p]);
        }

        let (cell_w, cell_h) = self.cell_size(grid)?;
        let cell = Canvas::new(cell_w, cell_h);
        log::trace!(
            "grid {}x{} for {} images, cell {cell_w:.3}x{cell_h:.3}",
            grid.columns,
            grid.rows,
            images.len()
        );

        images
            .iter()
            .enumerate()
            .map(|(i, &image)| {
                let (row, col) = grid.position(i);
                let cell_x = self.padding + col as f64 * (cell_w + self.padding);
                let cell_y = row as f64 * (cell_h + self.padding);
                layout_single(image, cell).map(|p| p.translate(cell_x, cell_y))
            })
            .collect()
    }
}

/// Place `images` on `canvas` in a row-major grid.
///
/// Shorthand for `GridLayout::new(canvas).max_columns(max_columns).padding(padding).compute(images)`.
pub fn layout_grid(
    images: &[ImageSize],
    canvas: Canvas,
    max_columns: usize,
    padding: f64,
) -> Result<Vec<Placement>, LayoutError> {
    GridLayout::new(canvas)
        .max_columns(max_columns)
        .padding(padding)
        .compute(images)
}

/// Padding must be finite and non-negative, whether or not it is used.
pub(crate) fn check_padding(padding: f64) -> Result<(), LayoutError> {
    if padding.is_finite() && padding >= 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidDimension)
    }
}
