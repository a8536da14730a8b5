/// Descriptive statistics summarizing a dataset.
///
/// Holds the size, mean and spread of a dataset of `f64` values. The standard
/// deviation is the population (`1/n`) form, matching the error bars drawn
/// for accuracy plots.
#[derive(Debug, Clone)]
pub struct DescriptiveStats {
    /// The number of values in the dataset.
    pub count: usize,
    /// The arithmetic mean (average) of the dataset.
    pub mean: f64,
    /// The population standard deviation of the dataset.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from values in any order.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use pie_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::new([1.0, 0.5, 1.0, 0.5]).unwrap();
    /// assert_eq!(stats.count, 4);
    /// assert_eq!(stats.mean, 0.75);
    /// assert_eq!(stats.std_dev, 0.25);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values.into_iter().collect::<Vec<_>>();
        if values.is_empty() {
            return None;
        }

        let count = values.len();
        let n = count as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

        Some(Self {
            count,
            mean,
            std_dev: variance.sqrt(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values() {
        assert!(DescriptiveStats::new(std::iter::empty()).is_none());
    }

    #[test]
    fn test_single_value_has_zero_spread() {
        let stats = DescriptiveStats::new([0.42]).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.mean, 0.42);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_population_std_dev() {
        let stats = DescriptiveStats::new([4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(stats.mean, 2.5);
        assert_eq!(stats.std_dev, 1.25_f64.sqrt());
    }
}
