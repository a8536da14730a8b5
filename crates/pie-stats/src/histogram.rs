use std::ops::Range;

/// A histogram representation of a dataset's distribution.
///
/// The histogram divides a range into equally wide bins and counts the values
/// falling into each bin. Every bin is half-open except the last one, which
/// also includes the upper bound of the range so the maximum value is counted.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// The bins comprising the histogram, in ascending order.
    pub bins: Vec<HistogramBin>,
    /// Number of values that fell outside the histogram range (or were NaN).
    pub excluded: u64,
}

/// A single bin in a histogram.
#[derive(Debug, Clone)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive start, exclusive end).
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: u64,
}

impl Histogram {
    /// Creates a histogram with `num_bins` equally wide bins.
    ///
    /// # Arguments
    ///
    /// * `values` - The data points to create the histogram from.
    /// * `num_bins` - The number of bins to create.
    /// * `range` - If provided, the histogram bounds. Otherwise the bounds are
    ///   the minimum and maximum of the data. A degenerate range (all values
    ///   equal) is widened by 0.5 on each side.
    ///
    /// Returns a histogram without bins when `values` is empty or `num_bins`
    /// is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pie_stats::histogram::Histogram;
    /// let values = [0.0, 0.25, 0.5, 0.75, 1.0];
    /// let histogram = Histogram::new(values, 4, None);
    /// let counts = histogram.bins.iter().map(|b| b.count).collect::<Vec<_>>();
    /// assert_eq!(counts, [1, 1, 1, 2]);
    /// ```
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    #[must_use]
    pub fn new<I>(values: I, num_bins: usize, range: Option<Range<f64>>) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values.into_iter().collect::<Vec<_>>();
        if values.is_empty() || num_bins == 0 {
            return Self {
                bins: vec![],
                excluded: 0,
            };
        }

        let Range { start, end } = range.unwrap_or_else(|| {
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            min..max
        });
        let (start, end) = if end - start < f64::EPSILON {
            (start - 0.5, end + 0.5)
        } else {
            (start, end)
        };

        // Recompute bin boundaries from the index to avoid floating-point accumulation errors
        let width = (end - start) / num_bins as f64;
        let edge = |idx: usize| {
            if idx == num_bins {
                end
            } else {
                start + idx as f64 * width
            }
        };
        let mut bins = (0..num_bins)
            .map(|idx| HistogramBin {
                range: edge(idx)..edge(idx + 1),
                count: 0,
            })
            .collect::<Vec<_>>();

        let mut excluded = 0;
        for val in values {
            if !(start..=end).contains(&val) {
                excluded += 1;
                continue;
            }
            let idx = (((val - start) / width).floor() as usize).min(num_bins - 1);
            bins[idx].count += 1;
        }

        Self { bins, excluded }
    }

    /// Total number of values counted in the bins.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Largest bin count, or zero for an empty histogram.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values() {
        let histogram = Histogram::new(Vec::new(), 10, None);
        assert!(histogram.bins.is_empty());
        assert_eq!(histogram.max_count(), 0);
    }

    #[test]
    fn test_zero_bins() {
        let histogram = Histogram::new([1.0, 2.0], 0, None);
        assert!(histogram.bins.is_empty());
    }

    #[test]
    fn test_explicit_range_excludes_outliers() {
        let histogram = Histogram::new([-0.2, 0.1, 0.6, 0.95, 1.3], 2, Some(0.0..1.0));
        assert_eq!(histogram.bins[0].count, 1);
        assert_eq!(histogram.bins[1].count, 2);
        assert_eq!(histogram.excluded, 2);
        assert_eq!(histogram.total_count(), 3);
    }

    #[test]
    fn test_nan_is_excluded_from_data_range() {
        let histogram = Histogram::new([0.2, f64::NAN, 0.8], 2, None);
        assert_eq!(histogram.bins[0].range.start, 0.2);
        assert_eq!(histogram.bins[1].range.end, 0.8);
        assert_eq!(histogram.excluded, 1);
        assert_eq!(histogram.total_count(), 2);
    }

    #[test]
    fn test_degenerate_range_is_widened() {
        let histogram = Histogram::new([0.5, 0.5, 0.5], 5, None);
        assert_eq!(histogram.bins.first().unwrap().range.start, 0.0);
        assert_eq!(histogram.bins.last().unwrap().range.end, 1.0);
        assert_eq!(histogram.total_count(), 3);
        assert_eq!(histogram.max_count(), 3);
    }

    #[test]
    fn test_bins_are_contiguous() {
        let histogram = Histogram::new([0.0, 0.3, 0.9], 50, Some(0.0..1.0));
        assert_eq!(histogram.bins.len(), 50);
        for pair in histogram.bins.windows(2) {
            assert_eq!(pair[0].range.end, pair[1].range.start);
        }
        assert_eq!(histogram.bins.last().unwrap().range.end, 1.0);
    }
}
