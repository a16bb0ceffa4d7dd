//! Fixed-width histograms over a bounded value domain
//!
//! Buckets are equal slices of the closed domain `[low, high]`: bucket `i`
//! covers `[low + i*w, low + (i+1)*w)` and the last bucket also holds
//! `high`. Values outside the domain and NaN are not counted.
//!
//! Percentiles follow the bucket threshold convention: the threshold for
//! fraction `p` is the low edge of the first non-empty bucket at which the
//! cumulative count reaches `p * total`. There is no interpolation inside a
//! bucket, so every statistic derived here shares the same resolution.

#[cfg(test)]
use rastermask_core::{Error, Result};

/// Number of buckets per histogram
pub const DEFAULT_BINS: usize = 256;

/// Histogram of values within `[low, high]`
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    low: f64,
    high: f64,
    bins: Vec<u64>,
    total: u64,
}

impl Histogram {
    /// Create an empty histogram with [`DEFAULT_BINS`] buckets.
    ///
    /// `low == high` is a one-point domain; `low > high` accepts nothing.
    pub fn new(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            bins: vec![0; DEFAULT_BINS],
            total: 0,
        }
    }

    /// Create an empty histogram with `num_bins` buckets
    #[cfg(test)]
    pub(crate) fn with_bins(low: f64, high: f64, num_bins: usize) -> Result<Self> {
        if num_bins == 0 {
            return Err(Error::invalid_parameter(
                "num_bins",
                num_bins,
                "histogram needs at least one bucket",
            ));
        }
        Ok(Self {
            low,
            high,
            bins: vec![0; num_bins],
            total: 0,
        })
    }

    /// Build a histogram from an iterator of values
    pub fn from_values<I>(low: f64, high: f64, values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut histogram = Self::new(low, high);
        histogram.extend(values);
        histogram
    }

    /// Count `value` if it lies in the domain; returns whether it was counted
    pub fn add(&mut self, value: f64) -> bool {
        if !(self.low <= value && value <= self.high) {
            return false;
        }
        let index = self.bin_index(value);
        self.bins[index] += 1;
        self.total += 1;
        true
    }

    // Bucket positions are computed on half-scaled values so that a domain
    // spanning more than f64::MAX still yields finite edges.
    fn half_bin_width(&self) -> f64 {
        if self.high > self.low {
            (self.high * 0.5 - self.low * 0.5) / self.bins.len() as f64
        } else {
            0.0
        }
    }

    fn bin_index(&self, value: f64) -> usize {
        let half_width = self.half_bin_width();
        if half_width > 0.0 {
            // `as usize` saturates, so float noise at `high` stays in range
            (((value * 0.5 - self.low * 0.5) / half_width) as usize).min(self.bins.len() - 1)
        } else {
            0
        }
    }

    /// Value at `position` buckets above `low`
    fn edge(&self, position: f64) -> f64 {
        (self.low * 0.5 + position * self.half_bin_width()) * 2.0
    }

    /// Lower edge of the domain
    pub fn low_value(&self) -> f64 {
        self.low
    }

    /// Upper edge of the domain (inclusive)
    pub fn high_value(&self) -> f64 {
        self.high
    }

    /// Bucket counts
    pub fn bins(&self) -> &[u64] {
        &self.bins
    }

    /// Number of counted values
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Whether no value has been counted
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Width of one bucket (0 for a one-point domain)
    ///
    /// Infinite only when a single bucket spans more than `f64::MAX`.
    pub fn bin_width(&self) -> f64 {
        self.half_bin_width() * 2.0
    }

    /// Lower edge of bucket `index`
    pub fn bin_low_value(&self, index: usize) -> f64 {
        self.edge(index as f64)
    }

    fn bin_center(&self, index: usize) -> f64 {
        self.edge(index as f64 + 0.5)
    }

    /// Power of two bringing every bucket center into `[-2, 2]`
    fn scale(&self) -> f64 {
        let magnitude = self.low.abs().max(self.high.abs());
        if magnitude > 0.0 && magnitude.is_finite() {
            2f64.powi((magnitude.log2().ceil() as i32).clamp(-1022, 1023))
        } else {
            1.0
        }
    }

    fn occupied(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.bins
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(i, &count)| (i, count))
    }

    /// Threshold below which the fraction `p` (clamped to `[0, 1]`) of the
    /// counted values falls. `None` for an empty histogram.
    pub fn percentile_threshold(&self, p: f64) -> Option<f64> {
        if self.is_empty() || p.is_nan() {
            return None;
        }
        let target = p.clamp(0.0, 1.0) * self.total as f64;

        let mut cumulative = 0u64;
        let mut last = None;
        for (index, count) in self.occupied() {
            cumulative += count;
            last = Some(index);
            if cumulative as f64 >= target {
                return Some(self.bin_low_value(index));
            }
        }
        last.map(|index| self.bin_low_value(index))
    }

    /// Mean of bucket centers weighted by their counts
    pub fn mean(&self) -> Option<f64> {
        let scale = self.scale();
        self.scaled_mean(scale).map(|mean| mean * scale)
    }

    fn scaled_mean(&self, scale: f64) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        let sum: f64 = self
            .occupied()
            .map(|(i, count)| self.bin_center(i) / scale * count as f64)
            .sum();
        Some(sum / self.total as f64)
    }

    /// Population standard deviation of bucket centers weighted by counts
    pub fn standard_deviation(&self) -> Option<f64> {
        let scale = self.scale();
        let mean = self.scaled_mean(scale)?;
        let var = self
            .occupied()
            .map(|(i, count)| {
                let d = self.bin_center(i) / scale - mean;
                d * d * count as f64
            })
            .sum::<f64>()
            / self.total as f64;
        Some(var.sqrt() * scale)
    }
}

impl Extend<f64> for Histogram {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, values: I) {
        for value in values {
            self.add(value);
        }
    }
}
