//! Coordinate Reference System identifiers
//!
//! Rasters only carry their CRS along; nothing in rastermask reprojects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coordinate Reference System attached to a raster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CRS {
    /// EPSG registry code
    Epsg(u32),
    /// Well-known text definition
    Wkt(String),
}

impl CRS {
    /// Create a CRS from an EPSG code
    pub fn from_epsg(code: u32) -> Self {
        CRS::Epsg(code)
    }

    /// Create a CRS from a WKT string
    pub fn from_wkt(wkt: impl Into<String>) -> Self {
        CRS::Wkt(wkt.into())
    }

    /// EPSG code if known
    pub fn epsg(&self) -> Option<u32> {
        match self {
            CRS::Epsg(code) => Some(*code),
            CRS::Wkt(_) => None,
        }
    }

    /// WKT definition if known
    pub fn wkt(&self) -> Option<&str> {
        match self {
            CRS::Epsg(_) => None,
            CRS::Wkt(wkt) => Some(wkt),
        }
    }
}

impl fmt::Display for CRS {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CRS::Epsg(code) => write!(f, "EPSG:{}", code),
            // First 50 chars are enough to tell definitions apart in logs
            CRS::Wkt(wkt) => write!(f, "WKT:{}", wkt.chars().take(50).collect::<String>()),
        }
    }
}
