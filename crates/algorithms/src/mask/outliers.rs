//! Windowed outlier masking
//!
//! Splits the raster into square windows and, per window, derives inlier
//! bounds for one band from a histogram of the window's values. Pixels
//! inside the bounds are kept (`0xFF`), all others masked out (`0x00`).
//!
//! Every pixel's classification depends only on its own value and on the
//! statistics of its window, so windows are processed independently and the
//! result does not depend on the [`ProcessingMode`].

use ndarray::{Array2, ArrayViewMut2};
use rastermask_core::{
    Algorithm, Error, GeoTransform, MultiBandRaster, ParallelAlgorithm, Raster, RasterView,
    Result, CRS,
};
use rastermask_parallel::{ParallelStrategy, ProcessingMode, Window, WindowGrid};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::method::StatisticMethod;
use crate::statistics::Histogram;

/// Mask value for pixels that are kept
pub const KEEP: u8 = 0xFF;
/// Mask value for outliers
pub const MASK_OUT: u8 = 0x00;

/// Parameters for outlier masking
///
/// Serialized field names follow the process descriptor of the masking
/// service (`windowsize`, `alpha`, `statisticMethod`); the Rust field names
/// are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlierMaskConfig {
    /// Band to analyze
    pub band: usize,
    /// Spread multiplier; larger values keep more pixels
    pub factor: f64,
    /// Side length of the square analysis windows, in pixels
    #[serde(rename = "windowsize", alias = "window_size")]
    pub window_size: usize,
    /// Values below are ignored by the statistics and never kept
    pub low: Option<f64>,
    /// Values above are ignored by the statistics and never kept
    pub high: Option<f64>,
    /// Copy the band and carry the classification as its alpha channel
    #[serde(rename = "alpha", alias = "as_alpha")]
    pub as_alpha: bool,
    /// Statistic used to derive inlier bounds
    #[serde(rename = "statisticMethod", alias = "statistic_method")]
    pub statistic_method: StatisticMethod,
}

impl Default for OutlierMaskConfig {
    fn default() -> Self {
        Self {
            band: 0,
            factor: 1.5,
            window_size: 500,
            low: None,
            high: None,
            as_alpha: false,
            statistic_method: StatisticMethod::default(),
        }
    }
}

impl OutlierMaskConfig {
    /// Lower clamp, −∞ when unset
    pub fn low_bound(&self) -> f64 {
        self.low.unwrap_or(f64::NEG_INFINITY)
    }

    /// Upper clamp, +∞ when unset
    pub fn high_bound(&self) -> f64 {
        self.high.unwrap_or(f64::INFINITY)
    }

    /// Check the parameters against a source with `band_count` bands
    pub fn validate(&self, band_count: usize) -> Result<()> {
        if self.band >= band_count {
            return Err(Error::invalid_parameter(
                "band",
                self.band,
                format!("raster has {} band(s)", band_count),
            ));
        }
        if self.window_size == 0 {
            return Err(Error::invalid_parameter(
                "window_size",
                self.window_size,
                "window size must be > 0",
            ));
        }
        if !(self.factor.is_finite() && self.factor >= 0.0) {
            return Err(Error::invalid_parameter(
                "factor",
                self.factor,
                "factor must be finite and >= 0",
            ));
        }
        for (name, value) in [("low", self.low), ("high", self.high)] {
            if value.is_some_and(f64::is_nan) {
                return Err(Error::invalid_parameter(name, f64::NAN, "must be a number"));
            }
        }
        if self.low_bound() > self.high_bound() {
            return Err(Error::invalid_parameter(
                "low",
                self.low_bound(),
                format!("must not exceed high ({})", self.high_bound()),
            ));
        }
        Ok(())
    }
}

/// Result of outlier masking
///
/// Has the same size, pixel origin and georeferencing as the source. In
/// alpha mode `values` holds a copy of the analyzed band and `mask` is its
/// alpha channel.
#[derive(Debug, Clone)]
pub struct OutlierMaskOutput {
    mask: Raster<u8>,
    values: Option<Raster<f64>>,
    min_x: i64,
    min_y: i64,
}

impl OutlierMaskOutput {
    /// Name given to the produced coverage
    pub const NAME: &'static str = "mask";

    /// Name given to the produced coverage
    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Keep/mask-out classification (the alpha channel in alpha mode)
    pub fn mask(&self) -> &Raster<u8> {
        &self.mask
    }

    /// Copied band values, present in alpha mode
    pub fn values(&self) -> Option<&Raster<f64>> {
        self.values.as_ref()
    }

    /// Whether the output carries band values plus alpha
    pub fn is_alpha(&self) -> bool {
        self.values.is_some()
    }

    /// Pixel origin `(min_x, min_y)` copied from the source
    pub fn origin(&self) -> (i64, i64) {
        (self.min_x, self.min_y)
    }

    /// Geotransform copied from the source
    pub fn transform(&self) -> &GeoTransform {
        self.mask.transform()
    }

    /// CRS copied from the source
    pub fn crs(&self) -> Option<&CRS> {
        self.mask.crs()
    }

    /// Number of pixels classified as kept
    pub fn kept_count(&self) -> usize {
        self.mask.data().iter().filter(|&&v| v == KEEP).count()
    }

    /// Split into the mask and the optional copied band
    pub fn into_parts(self) -> (Raster<u8>, Option<Raster<f64>>) {
        (self.mask, self.values)
    }
}

/// Outlier masking algorithm
#[derive(Debug, Clone, Default)]
pub struct OutliersMask;

impl Algorithm for OutliersMask {
    type Input = MultiBandRaster;
    type Output = OutlierMaskOutput;
    type Params = OutlierMaskConfig;
    type Error = Error;

    fn name(&self) -> &'static str {
        "OutliersMask"
    }

    fn description(&self) -> &'static str {
        "Create a mask to exclude outliers from a coverage using the Interquartile Range or Standard Deviation algorithm"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        outliers_mask(&input, &params)
    }
}

impl ParallelAlgorithm for OutliersMask {
    fn execute_parallel(
        &self,
        input: Self::Input,
        params: Self::Params,
        threads: usize,
    ) -> Result<Self::Output> {
        outliers_mask_with_mode(&input, &params, ProcessingMode::ParallelWith(threads))
    }
}

/// Compute an outlier mask using the default [`ProcessingMode`]
///
/// # Arguments
/// * `raster` - Source image
/// * `config` - Band, window size, statistic and clamps
///
/// # Errors
/// `InvalidParameter` for a bad configuration (checked before any sample is
/// read); sample accessor errors are returned unchanged.
pub fn outliers_mask<R>(raster: &R, config: &OutlierMaskConfig) -> Result<OutlierMaskOutput>
where
    R: RasterView + ?Sized,
{
    outliers_mask_with_mode(raster, config, ProcessingMode::default())
}

/// Compute an outlier mask, scheduling windows with `mode`
pub fn outliers_mask_with_mode<R>(
    raster: &R,
    config: &OutlierMaskConfig,
    mode: ProcessingMode,
) -> Result<OutlierMaskOutput>
where
    R: RasterView + ?Sized,
{
    config.validate(raster.band_count())?;

    let (width, height) = (raster.width(), raster.height());
    let grid = WindowGrid::new(width, height, config.window_size)?;
    debug!(
        width,
        height,
        grid_cols = grid.grid_cols(),
        grid_rows = grid.grid_rows(),
        band = config.band,
        method = %config.statistic_method,
        as_alpha = config.as_alpha,
        "computing outliers mask"
    );

    let mut mask: Raster<u8> = Raster::new(height, width);
    mask.set_transform(raster.transform());
    mask.set_crs(raster.crs().cloned());
    let mut values = config
        .as_alpha
        .then(|| mask.with_same_meta::<f64>(height, width));

    let mask_parts = grid.split_mut(mask.view_mut())?;
    let value_parts: Vec<Option<ArrayViewMut2<'_, f64>>> = match values.as_mut() {
        Some(values) => grid
            .split_mut(values.view_mut())?
            .into_iter()
            .map(|(_, view)| Some(view))
            .collect(),
        None => std::iter::repeat_with(|| None).take(mask_parts.len()).collect(),
    };

    let tasks: Vec<WindowTask<'_>> = mask_parts
        .into_iter()
        .zip(value_parts)
        .map(|((window, mask), values)| WindowTask { window, mask, values })
        .collect();

    let clamp = (config.low_bound(), config.high_bound());
    mode.try_for_each(tasks, |task| process_window(raster, config, clamp, task))?;

    Ok(OutlierMaskOutput {
        mask,
        values,
        min_x: raster.min_x(),
        min_y: raster.min_y(),
    })
}

/// Output regions owned by one window
struct WindowTask<'a> {
    window: Window,
    mask: ArrayViewMut2<'a, u8>,
    values: Option<ArrayViewMut2<'a, f64>>,
}

/// How the pixels of one window are classified
#[derive(Debug, Clone, Copy, PartialEq)]
enum Inliers {
    /// Every pixel gets the same verdict
    Uniform(bool),
    /// Pixels within `[lower, upper]` are kept
    Between(f64, f64),
}

impl Inliers {
    fn keeps(&self, value: f64) -> bool {
        match *self {
            Inliers::Uniform(keep) => keep && !value.is_nan(),
            Inliers::Between(lower, upper) => lower <= value && value <= upper,
        }
    }
}

fn process_window<R>(
    raster: &R,
    config: &OutlierMaskConfig,
    (low, high): (f64, f64),
    task: WindowTask<'_>,
) -> Result<()>
where
    R: RasterView + ?Sized,
{
    let WindowTask {
        window,
        mut mask,
        values,
    } = task;

    let samples = read_window(raster, config.band, &window)?;
    if let Some(mut values) = values {
        values.assign(&samples);
    }

    let inliers = match extrema(&samples) {
        None => {
            debug!(row = window.grid_row, col = window.grid_col, "window has no numeric samples");
            Inliers::Uniform(false)
        }
        Some((min, max)) if max <= min => {
            debug!(row = window.grid_row, col = window.grid_col, value = min, "constant window");
            Inliers::Uniform(min >= low && min <= high)
        }
        Some((min, max)) => {
            let histogram = Histogram::from_values(low.max(min), high.min(max), samples.iter().copied());
            match config.statistic_method.bounds(&histogram, config.factor) {
                Some((lower, upper)) => Inliers::Between(lower.max(low), upper.min(high)),
                None => {
                    debug!(
                        row = window.grid_row,
                        col = window.grid_col,
                        min,
                        max,
                        "no samples within clamp range"
                    );
                    Inliers::Uniform(false)
                }
            }
        }
    };
    trace!(row = window.grid_row, col = window.grid_col, ?inliers, "window classified");

    mask.zip_mut_with(&samples, |m, &v| {
        *m = if inliers.keeps(v) { KEEP } else { MASK_OUT };
    });
    Ok(())
}

/// Read `band` over the in-bounds pixels of `window`
fn read_window<R>(raster: &R, band: usize, window: &Window) -> Result<Array2<f64>>
where
    R: RasterView + ?Sized,
{
    let (min_x, min_y) = (raster.min_x(), raster.min_y());
    let mut samples = Array2::zeros((window.rows, window.cols));
    for (cell, (row, col)) in samples.iter_mut().zip(window.cells()) {
        *cell = raster.sample(min_x + col as i64, min_y + row as i64, band)?;
    }
    Ok(samples)
}

/// Minimum and maximum, ignoring NaN
fn extrema(samples: &Array2<f64>) -> Option<(f64, f64)> {
    samples
        .iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
}
