//! Operator accuracy model
//!
//! Piecewise-linear estimate of how accurate a remote operator is when given
//! `t` seconds to answer a request: flat below `min_time`, rising linearly
//! with `slope`, and clamped at `max_acc`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatorModel {
    pub min_time: f64,
    pub min_acc: f64,
    pub max_acc: f64,
    pub slope: f64,
}

impl Default for OperatorModel {
    fn default() -> Self {
        Self {
            min_time: 1.0,
            min_acc: 0.65,
            max_acc: 0.8,
            slope: 0.03,
        }
    }
}

impl OperatorModel {
    /// Expected accuracy for a request time of `time` seconds.
    ///
    /// ```
    /// use pie_analysis::operator_model::OperatorModel;
    ///
    /// let model = OperatorModel::default();
    /// assert_eq!(model.accuracy(0.0), 0.65);
    /// assert_eq!(model.accuracy(20.0), 0.8);
    /// ```
    #[must_use]
    pub fn accuracy(&self, time: f64) -> f64 {
        if time < self.min_time {
            return self.min_acc;
        }
        let acc = (time - self.min_time) * self.slope + self.min_acc;
        acc.min(self.max_acc)
    }

    /// Samples the model at the integer times `0..end`.
    #[must_use]
    pub fn curve(&self, end: u32) -> Vec<(f64, f64)> {
        (0..end)
            .map(f64::from)
            .map(|time| (time, self.accuracy(time)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_flat_below_min_time() {
        let model = OperatorModel::default();
        assert_eq!(model.accuracy(0.0), 0.65);
        assert_eq!(model.accuracy(0.99), 0.65);
        assert_eq!(model.accuracy(1.0), 0.65);
    }

    #[test]
    fn test_linear_section() {
        let model = OperatorModel::default();
        assert!(approx_eq(model.accuracy(3.0), 0.71));
        assert!(approx_eq(model.accuracy(5.0), 0.77));
    }

    #[test]
    fn test_clamped_at_max() {
        let model = OperatorModel::default();
        assert!(approx_eq(model.accuracy(6.0), 0.8));
        for time in [7.0, 9.0, 100.0] {
            assert_eq!(model.accuracy(time), 0.8);
        }
    }

    #[test]
    fn test_curve_samples_integer_times() {
        let curve = OperatorModel::default().curve(10);
        assert_eq!(curve.len(), 10);
        assert_eq!(curve[0], (0.0, 0.65));
        assert_eq!(curve[9], (9.0, 0.8));
        assert!(curve.windows(2).all(|w| w[0].1 <= w[1].1));
    }
}
