//! Statistical building blocks for raster analysis
//!
//! - **histogram**: Fixed-width histograms with percentile thresholds

pub mod histogram;

pub use histogram::{Histogram, DEFAULT_BINS};
