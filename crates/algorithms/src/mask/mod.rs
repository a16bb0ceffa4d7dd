//! Raster masking algorithms
//!
//! - **outliers**: Per-window statistical outlier masks (interquartile range
//!   or standard deviation), as a binary mask or an alpha channel

mod method;
mod outliers;

pub use method::{StatisticMethod, MIN_IQR};
pub use outliers::{
    outliers_mask, outliers_mask_with_mode, OutlierMaskConfig, OutlierMaskOutput, OutliersMask,
    KEEP, MASK_OUT,
};
