//! # rastermask algorithms
//!
//! Raster analysis algorithms built on `rastermask-core`.
//!
//! ## Available Algorithm Categories
//!
//! - **mask**: Windowed outlier masks
//! - **statistics**: Histograms and percentile thresholds

pub mod mask;
pub mod statistics;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::mask::{
        outliers_mask, outliers_mask_with_mode, OutlierMaskConfig, OutlierMaskOutput,
        OutliersMask, StatisticMethod,
    };
    pub use crate::statistics::Histogram;
    pub use rastermask_core::prelude::*;
    pub use rastermask_parallel::ProcessingMode;
}
