//! Raster element trait for generic cell values

use num_traits::{NumCast, Zero};
use std::fmt::Debug;

/// Trait for types that can be stored in a raster cell.
///
/// Every element converts losslessly enough to `f64` for statistics; the
/// masking engine reads all bands through that conversion.
pub trait RasterElement:
    Copy + Clone + Debug + PartialOrd + PartialEq + NumCast + Zero + Send + Sync + 'static
{
    /// Convert self to f64 (NaN if the value has no f64 representation)
    fn as_f64(self) -> f64 {
        <f64 as NumCast>::from(self).unwrap_or(f64::NAN)
    }
}

macro_rules! impl_raster_element {
    ($($t:ty),+) => {
        $(impl RasterElement for $t {})+
    };
}

impl_raster_element!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_f64() {
        assert_eq!(200u8.as_f64(), 200.0);
        assert_eq!((-3i16).as_f64(), -3.0);
        assert!(f32::NAN.as_f64().is_nan());
        assert_eq!(u64::MAX.as_f64(), u64::MAX as f64);
    }
}
