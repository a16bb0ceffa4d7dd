//! Statistics that turn a window histogram into inlier bounds

use crate::statistics::Histogram;
use rastermask_core::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Smallest quartile spread used by [`StatisticMethod::InterquartileRange`]
pub const MIN_IQR: f64 = 1.0;

/// Method used to derive inlier bounds from a window histogram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatisticMethod {
    /// Median ± factor × standard deviation
    StandardDeviation,
    /// [Q1 − factor × IQR, Q3 + factor × IQR], with IQR at least [`MIN_IQR`]
    #[default]
    InterquartileRange,
}

impl StatisticMethod {
    /// Inlier bounds `(lower, upper)` for `histogram`.
    ///
    /// Both thresholds come from [`Histogram::percentile_threshold`], so the
    /// two methods share a percentile convention. `None` when the histogram
    /// is empty.
    pub fn bounds(&self, histogram: &Histogram, factor: f64) -> Option<(f64, f64)> {
        match self {
            StatisticMethod::StandardDeviation => {
                let median = histogram.percentile_threshold(0.5)?;
                let margin = spread(factor, histogram.standard_deviation()?);
                Some((median - margin, median + margin))
            }
            StatisticMethod::InterquartileRange => {
                let q1 = histogram.percentile_threshold(0.25)?;
                let q3 = histogram.percentile_threshold(0.75)?;
                let margin = spread(factor, (q3 - q1).max(MIN_IQR));
                Some((q1 - margin, q3 + margin))
            }
        }
    }
}

/// `factor * width`, where a zero factor always gives zero
///
/// `q3 - q1` overflows to infinity when the quartiles sit near opposite
/// ends of the f64 range.
fn spread(factor: f64, width: f64) -> f64 {
    if factor == 0.0 { 0.0 } else { factor * width }
}

impl fmt::Display for StatisticMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatisticMethod::StandardDeviation => write!(f, "StandardDeviation"),
            StatisticMethod::InterquartileRange => write!(f, "InterquartileRange"),
        }
    }
}

impl FromStr for StatisticMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standarddeviation" | "stddev" | "std" => Ok(StatisticMethod::StandardDeviation),
            "interquartilerange" | "iqr" => Ok(StatisticMethod::InterquartileRange),
            _ => Err(Error::invalid_parameter(
                "statistic_method",
                s,
                "expected StandardDeviation or InterquartileRange",
            )),
        }
    }
}
