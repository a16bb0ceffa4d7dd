//! Window grids for block-wise raster processing
//!
//! A [`WindowGrid`] covers a raster with non-overlapping square windows.
//! Windows in the last row and column are clipped to the raster extent, so
//! iterating a window never yields a pixel outside the raster.

use ndarray::{ArrayViewMut2, Axis};
use rastermask_core::{Error, Result};

/// One window of a [`WindowGrid`], already clipped to the raster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Row of this window in the grid
    pub grid_row: usize,
    /// Column of this window in the grid
    pub grid_col: usize,
    /// First raster row covered
    pub row_offset: usize,
    /// First raster column covered
    pub col_offset: usize,
    /// Number of raster rows covered
    pub rows: usize,
    /// Number of raster columns covered
    pub cols: usize,
}

impl Window {
    /// Number of pixels in the window
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether the window covers no pixels
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert window-local coordinates to raster (row, col)
    pub fn to_source_coords(&self, local_row: usize, local_col: usize) -> (usize, usize) {
        (self.row_offset + local_row, self.col_offset + local_col)
    }

    /// Raster (row, col) of every pixel in the window, row by row
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows)
            .flat_map(move |r| (0..self.cols).map(move |c| self.to_source_coords(r, c)))
    }
}

/// Partition of a `width` x `height` raster into windows of side `size`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGrid {
    width: usize,
    height: usize,
    size: usize,
}

impl WindowGrid {
    /// Create a grid; `size` must be positive
    pub fn new(width: usize, height: usize, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::invalid_parameter(
                "window_size",
                size,
                "window size must be > 0",
            ));
        }
        Ok(Self { width, height, size })
    }

    /// Window side length
    pub fn window_size(&self) -> usize {
        self.size
    }

    /// Number of window columns, `ceil(width / size)`
    pub fn grid_cols(&self) -> usize {
        self.width.div_ceil(self.size)
    }

    /// Number of window rows, `ceil(height / size)`
    pub fn grid_rows(&self) -> usize {
        self.height.div_ceil(self.size)
    }

    /// Total number of windows
    pub fn len(&self) -> usize {
        self.grid_rows() * self.grid_cols()
    }

    /// Whether the grid holds no windows (empty raster)
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Window at grid position, clipped to the raster
    pub fn window(&self, grid_row: usize, grid_col: usize) -> Option<Window> {
        if grid_row >= self.grid_rows() || grid_col >= self.grid_cols() {
            return None;
        }
        let row_offset = grid_row * self.size;
        let col_offset = grid_col * self.size;
        Some(Window {
            grid_row,
            grid_col,
            row_offset,
            col_offset,
            rows: self.size.min(self.height - row_offset),
            cols: self.size.min(self.width - col_offset),
        })
    }

    /// Iterate windows in row-major order
    pub fn iter(&self) -> WindowIterator {
        WindowIterator {
            grid: *self,
            current_row: 0,
            current_col: 0,
        }
    }

    /// Split a raster-shaped buffer into one exclusive sub-view per window.
    ///
    /// The views are disjoint, so they can be handed to different threads.
    /// Returned in the same order as [`WindowGrid::iter`].
    pub fn split_mut<'a, T>(
        &self,
        view: ArrayViewMut2<'a, T>,
    ) -> Result<Vec<(Window, ArrayViewMut2<'a, T>)>> {
        let (rows, cols) = view.dim();
        if (rows, cols) != (self.height, self.width) {
            return Err(Error::SizeMismatch {
                er: self.height,
                ec: self.width,
                ar: rows,
                ac: cols,
            });
        }

        let mut parts = Vec::with_capacity(self.len());
        let mut remaining_rows = view;
        for window_row in self.iter().collect::<Vec<_>>().chunks(self.grid_cols().max(1)) {
            let Some(first) = window_row.first() else {
                continue;
            };
            let (band, rest) = remaining_rows.split_at(Axis(0), first.rows);
            remaining_rows = rest;

            let mut remaining_cols = band;
            for window in window_row {
                let (part, rest) = remaining_cols.split_at(Axis(1), window.cols);
                remaining_cols = rest;
                parts.push((*window, part));
            }
        }

        Ok(parts)
    }
}

impl IntoIterator for &WindowGrid {
    type Item = Window;
    type IntoIter = WindowIterator;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Row-major iterator over the windows of a grid
#[derive(Debug, Clone)]
pub struct WindowIterator {
    grid: WindowGrid,
    current_row: usize,
    current_col: usize,
}

impl Iterator for WindowIterator {
    type Item = Window;

    fn next(&mut self) -> Option<Self::Item> {
        if self.grid.grid_cols() == 0 {
            return None;
        }
        let window = self.grid.window(self.current_row, self.current_col)?;

        self.current_col += 1;
        if self.current_col >= self.grid.grid_cols() {
            self.current_col = 0;
            self.current_row += 1;
        }

        Some(window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn test_grid_dimensions_round_up() {
        let grid = WindowGrid::new(550, 500, 500).unwrap();
        assert_eq!(grid.grid_cols(), 2);
        assert_eq!(grid.grid_rows(), 1);
        assert_eq!(grid.len(), 2);

        let windows: Vec<_> = grid.iter().collect();
        assert_eq!(windows[0].cols, 500);
        assert_eq!(windows[1].col_offset, 500);
        assert_eq!(windows[1].cols, 50);
        assert_eq!(windows[1].rows, 500);
    }

    #[test]
    fn test_zero_window_size_rejected() {
        assert!(matches!(
            WindowGrid::new(10, 10, 0),
            Err(Error::InvalidParameter { name: "window_size", .. })
        ));
    }

    #[test]
    fn test_empty_raster_has_no_windows() {
        let grid = WindowGrid::new(0, 7, 4).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.iter().count(), 0);
    }

    #[test]
    fn test_window_coverage() {
        let (rows, cols) = (23, 17);
        let mut covered = vec![vec![0u8; cols]; rows];

        for window in &WindowGrid::new(cols, rows, 5).unwrap() {
            for (r, c) in window.cells() {
                covered[r][c] += 1;
            }
        }

        // Every cell covered exactly once
        for (r, row) in covered.iter().enumerate() {
            for (c, &n) in row.iter().enumerate() {
                assert_eq!(n, 1, "Cell ({}, {}) covered {} times", r, c, n);
            }
        }
    }

    #[test]
    fn test_split_mut_views_match_windows() {
        let grid = WindowGrid::new(7, 5, 3).unwrap();
        let mut buffer = Array2::<usize>::zeros((5, 7));

        let parts = grid.split_mut(buffer.view_mut()).unwrap();
        assert_eq!(parts.len(), 6);
        for (index, (window, mut view)) in parts.into_iter().enumerate() {
            assert_eq!(view.dim(), (window.rows, window.cols));
            view.fill(index + 1);
        }

        for (index, window) in grid.iter().enumerate() {
            for (r, c) in window.cells() {
                assert_eq!(buffer[(r, c)], index + 1);
            }
        }
    }

    #[test]
    fn test_split_mut_rejects_wrong_shape() {
        let grid = WindowGrid::new(7, 5, 3).unwrap();
        let mut buffer = Array2::<u8>::zeros((5, 6));
        assert!(grid.split_mut(buffer.view_mut()).is_err());
    }
}
