//! Multi-band raster stack

use crate::crs::CRS;
use crate::error::{Error, Result};
use crate::raster::{GeoTransform, Raster, RasterView};

/// A stack of equally sized `f64` bands sharing one georeferencing and an
/// integer pixel origin.
#[derive(Debug, Clone)]
pub struct MultiBandRaster {
    bands: Vec<Raster<f64>>,
    min_x: i64,
    min_y: i64,
}

impl MultiBandRaster {
    /// Stack bands into one raster.
    ///
    /// The geotransform and CRS of the first band apply to the whole stack.
    pub fn from_bands(bands: Vec<Raster<f64>>) -> Result<Self> {
        let Some(first) = bands.first() else {
            return Err(Error::invalid_parameter(
                "bands",
                0,
                "at least one band is required",
            ));
        };

        let (er, ec) = first.shape();
        if let Some(other) = bands.iter().find(|b| b.shape() != (er, ec)) {
            let (ar, ac) = other.shape();
            return Err(Error::SizeMismatch { er, ec, ar, ac });
        }

        Ok(Self {
            bands,
            min_x: 0,
            min_y: 0,
        })
    }

    /// Place the first pixel at `(min_x, min_y)` in image coordinates
    pub fn with_origin(mut self, min_x: i64, min_y: i64) -> Self {
        self.min_x = min_x;
        self.min_y = min_y;
        self
    }
}

impl RasterView for MultiBandRaster {
    fn width(&self) -> usize {
        self.bands[0].cols()
    }

    fn height(&self) -> usize {
        self.bands[0].rows()
    }

    fn min_x(&self) -> i64 {
        self.min_x
    }

    fn min_y(&self) -> i64 {
        self.min_y
    }

    fn band_count(&self) -> usize {
        self.bands.len()
    }

    fn sample(&self, x: i64, y: i64, band: usize) -> Result<f64> {
        let raster = self.bands.get(band).ok_or(Error::BandOutOfRange {
            band,
            count: self.bands.len(),
        })?;
        let (row, col) = self.locate(x, y)?;
        raster.get(row, col)
    }

    fn transform(&self) -> GeoTransform {
        *self.bands[0].transform()
    }

    fn crs(&self) -> Option<&CRS> {
        self.bands[0].crs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack() -> MultiBandRaster {
        let a = Raster::from_vec(vec![0.0, 1.0, 2.0, 3.0], 2, 2).unwrap();
        let b = Raster::from_vec(vec![10.0, 11.0, 12.0, 13.0], 2, 2).unwrap();
        MultiBandRaster::from_bands(vec![a, b]).unwrap()
    }

    #[test]
    fn test_origin_offsets_sampling() {
        let raster = stack().with_origin(100, -5);
        assert_eq!(raster.band_count(), 2);
        assert_eq!(raster.sample(101, -4, 1).unwrap(), 13.0);
        assert_eq!(raster.sample(100, -5, 0).unwrap(), 0.0);
        assert!(raster.sample(0, 0, 0).is_err());
    }

    #[test]
    fn test_band_out_of_range() {
        assert!(matches!(
            stack().sample(0, 0, 2),
            Err(Error::BandOutOfRange { band: 2, count: 2 })
        ));
    }

    #[test]
    fn test_rejects_mismatched_bands() {
        let a: Raster<f64> = Raster::new(2, 2);
        let b: Raster<f64> = Raster::new(2, 3);
        assert!(matches!(
            MultiBandRaster::from_bands(vec![a, b]),
            Err(Error::SizeMismatch { er: 2, ec: 2, ar: 2, ac: 3 })
        ));
        assert!(MultiBandRaster::from_bands(Vec::new()).is_err());
    }
}
