//! Error types for rastermask

use thiserror::Error;

/// Main error type for rastermask operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid raster dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Index out of bounds: ({row}, {col}) in raster of size ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Pixel ({x}, {y}) outside raster extent")]
    PixelOutOfBounds { x: i64, y: i64 },

    #[error("Band {band} not available (raster has {count} band(s))")]
    BandOutOfRange { band: usize, count: usize },

    #[error("Raster size mismatch: expected ({er}, {ec}), got ({ar}, {ac})")]
    SizeMismatch { er: usize, ec: usize, ar: usize, ac: usize },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Algorithm error: {0}")]
    Algorithm(String),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Shorthand for [`Error::InvalidParameter`]
    pub fn invalid_parameter(
        name: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Error::InvalidParameter {
            name,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for rastermask operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_message() {
        let err = Error::invalid_parameter("window_size", 0, "must be > 0");
        assert_eq!(
            err.to_string(),
            "Invalid parameter: window_size = 0 (must be > 0)"
        );
    }

    #[test]
    fn pixel_out_of_bounds_message() {
        let err = Error::PixelOutOfBounds { x: -1, y: 4 };
        assert_eq!(err.to_string(), "Pixel (-1, 4) outside raster extent");
    }
}
