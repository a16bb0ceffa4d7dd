//! Read-only raster access used by the masking engine

use crate::crs::CRS;
use crate::error::{Error, Result};
use crate::raster::{GeoTransform, Raster, RasterElement};

/// Read-only, band-addressable view over a raster image.
///
/// Pixel coordinates are absolute image coordinates: valid `x` values run
/// from `min_x()` to `min_x() + width() - 1`, and likewise for `y`. Sources
/// backed by paged storage own their own caching and locking; the accessor
/// may fail, and callers propagate that failure unchanged.
pub trait RasterView: Sync {
    /// Number of pixel columns
    fn width(&self) -> usize;

    /// Number of pixel rows
    fn height(&self) -> usize;

    /// X coordinate of the first column
    fn min_x(&self) -> i64 {
        0
    }

    /// Y coordinate of the first row
    fn min_y(&self) -> i64 {
        0
    }

    /// Number of bands
    fn band_count(&self) -> usize;

    /// Sample of `band` at absolute pixel `(x, y)`
    fn sample(&self, x: i64, y: i64, band: usize) -> Result<f64>;

    /// Georeferencing of the pixel grid
    fn transform(&self) -> GeoTransform;

    /// Coordinate reference system, if known
    fn crs(&self) -> Option<&CRS>;

    /// Translate absolute pixel coordinates into (row, col) grid indices.
    fn locate(&self, x: i64, y: i64) -> Result<(usize, usize)> {
        let col = x - self.min_x();
        let row = y - self.min_y();
        if col < 0 || row < 0 || col as usize >= self.width() || row as usize >= self.height() {
            return Err(Error::PixelOutOfBounds { x, y });
        }
        Ok((row as usize, col as usize))
    }
}

impl<T: RasterElement> RasterView for Raster<T> {
    fn width(&self) -> usize {
        self.cols()
    }

    fn height(&self) -> usize {
        self.rows()
    }

    fn band_count(&self) -> usize {
        1
    }

    fn sample(&self, x: i64, y: i64, band: usize) -> Result<f64> {
        if band != 0 {
            return Err(Error::BandOutOfRange { band, count: 1 });
        }
        let (row, col) = self.locate(x, y)?;
        Ok(self.get(row, col)?.as_f64())
    }

    fn transform(&self) -> GeoTransform {
        *Raster::transform(self)
    }

    fn crs(&self) -> Option<&CRS> {
        Raster::crs(self)
    }
}
