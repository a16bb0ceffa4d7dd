//! Main Raster type

use crate::crs::CRS;
use crate::error::{Error, Result};
use crate::raster::{GeoTransform, RasterElement};
use ndarray::{Array2, ArrayViewMut2};

/// A georeferenced single-band 2D raster grid.
///
/// `Raster<T>` stores values of type `T` in row-major order together with
/// its geotransform and CRS.
///
/// # Example
///
/// ```
/// use rastermask_core::Raster;
///
/// let mut raster: Raster<f32> = Raster::new(100, 100);
/// raster.set(10, 20, 42.0).unwrap();
/// assert_eq!(raster.get(10, 20).unwrap(), 42.0);
/// ```
#[derive(Debug, Clone)]
pub struct Raster<T: RasterElement> {
    /// Raster data stored in row-major order (row, col)
    data: Array2<T>,
    /// Affine transformation
    transform: GeoTransform,
    /// Coordinate reference system
    crs: Option<CRS>,
}

impl<T: RasterElement> Raster<T> {
    /// Create a new raster filled with zeros
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::from_array(Array2::zeros((rows, cols)))
    }

    /// Create a new raster filled with a specific value
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self::from_array(Array2::from_elem((rows, cols), value))
    }

    /// Create a raster from row-major data
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::InvalidDimensions {
                width: cols,
                height: rows,
            });
        }

        let array = Array2::from_shape_vec((rows, cols), data)
            .map_err(|e| Error::Other(e.to_string()))?;

        Ok(Self::from_array(array))
    }

    /// Create a raster from an ndarray
    pub fn from_array(data: Array2<T>) -> Self {
        Self {
            data,
            transform: GeoTransform::default(),
            crs: None,
        }
    }

    /// Create a zero-filled raster of another element type with the same
    /// georeferencing
    pub fn with_same_meta<U: RasterElement>(&self, rows: usize, cols: usize) -> Raster<U> {
        Raster {
            data: Array2::zeros((rows, cols)),
            transform: self.transform,
            crs: self.crs.clone(),
        }
    }

    // Dimensions

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the raster is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // Data access

    /// Get value at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.data
            .get((row, col))
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    /// Set value at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let (rows, cols) = self.shape();
        let cell = self
            .data
            .get_mut((row, col))
            .ok_or(Error::IndexOutOfBounds { row, col, rows, cols })?;
        *cell = value;
        Ok(())
    }

    /// Get a mutable view of the underlying data
    pub fn view_mut(&mut self) -> ArrayViewMut2<'_, T> {
        self.data.view_mut()
    }

    /// Get a reference to the underlying array
    pub fn data(&self) -> &Array2<T> {
        &self.data
    }

    // Metadata

    /// Get the geotransform
    pub fn transform(&self) -> &GeoTransform {
        &self.transform
    }

    /// Set the geotransform
    pub fn set_transform(&mut self, transform: GeoTransform) {
        self.transform = transform;
    }

    /// Get the CRS
    pub fn crs(&self) -> Option<&CRS> {
        self.crs.as_ref()
    }

    /// Set the CRS
    pub fn set_crs(&mut self, crs: Option<CRS>) {
        self.crs = crs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_creation() {
        let raster: Raster<f32> = Raster::new(100, 200);
        assert_eq!(raster.rows(), 100);
        assert_eq!(raster.cols(), 200);
        assert_eq!(raster.shape(), (100, 200));
    }

    #[test]
    fn test_raster_access() {
        let mut raster: Raster<u8> = Raster::new(10, 10);
        raster.set(5, 5, 0xFF).unwrap();
        assert_eq!(raster.get(5, 5).unwrap(), 0xFF);
        assert!(raster.set(10, 0, 1).is_err());
        assert!(matches!(
            raster.get(0, 10),
            Err(Error::IndexOutOfBounds { row: 0, col: 10, .. })
        ));
    }

    #[test]
    fn test_from_vec_rejects_bad_length() {
        let result = Raster::from_vec(vec![1.0f64; 5], 2, 3);
        assert!(matches!(
            result,
            Err(Error::InvalidDimensions { width: 3, height: 2 })
        ));
    }

    #[test]
    fn test_with_same_meta_keeps_georeferencing() {
        let mut src: Raster<f64> = Raster::new(4, 6);
        src.set_transform(GeoTransform::new(10.0, 20.0, 0.5, -0.5));
        src.set_crs(Some(CRS::from_epsg(3857)));

        let derived: Raster<u8> = src.with_same_meta(4, 6);
        assert_eq!(derived.transform(), src.transform());
        assert_eq!(derived.crs(), Some(&CRS::from_epsg(3857)));
        assert!(derived.data().iter().all(|&v| v == 0));
    }
}
