//! Raster data structures and read access

mod element;
mod geotransform;
mod grid;
mod multiband;
mod view;

pub use element::RasterElement;
pub use geotransform::GeoTransform;
pub use grid::Raster;
pub use multiband::MultiBandRaster;
pub use view::RasterView;
