//! # rastermask core
//!
//! Core types and traits shared by the rastermask crates.
//!
//! This crate provides:
//! - `Raster<T>`: Generic single-band raster grid
//! - `RasterView`: Read-only, band-addressable access to a source image
//! - `MultiBandRaster`: Stack of bands with an integer pixel origin
//! - `GeoTransform` and `CRS`: Georeferencing carried through unchanged
//! - Algorithm traits for a consistent API

pub mod crs;
pub mod error;
pub mod raster;

pub use crs::CRS;
pub use error::{Error, Result};
pub use raster::{GeoTransform, MultiBandRaster, Raster, RasterElement, RasterView};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::crs::CRS;
    pub use crate::error::{Error, Result};
    pub use crate::raster::{GeoTransform, MultiBandRaster, Raster, RasterElement, RasterView};
    pub use crate::{Algorithm, ParallelAlgorithm};
}

/// Core trait for all algorithms in rastermask.
///
/// Algorithms are pure functions that transform input data according to parameters.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(&self, input: Self::Input, params: Self::Params) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}

/// Algorithms whose work can be spread over a worker pool
pub trait ParallelAlgorithm: Algorithm {
    /// Execute on a pool of `threads` workers
    fn execute_parallel(
        &self,
        input: Self::Input,
        params: Self::Params,
        threads: usize,
    ) -> std::result::Result<Self::Output, Self::Error>;
}
