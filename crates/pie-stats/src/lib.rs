//! Statistical helpers for the intervention study analysis.
//!
//! This crate provides the small numeric toolbox the analysis needs:
//!
//! - **Descriptive statistics**: count, mean, population standard deviation
//! - **Histogram generation**: fixed-width bins over an explicit or data-derived range
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`histogram`]: Fixed-width histograms for likelihood distributions
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use pie_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```
//!
//! ## Creating a histogram
//!
//! ```
//! use pie_stats::histogram::Histogram;
//!
//! let values = [0.1, 0.2, 0.2, 0.7, 0.9];
//! let histogram = Histogram::new(values, 5, Some(0.0..1.0));
//! assert_eq!(histogram.total_count(), 5);
//! ```

pub mod descriptive;
pub mod histogram;
