//! Statistical helpers for the dexlab workspace.
//!
//! This crate provides the small set of numeric tools the analysis pipeline needs:
//!
//! - **Descriptive statistics**: mean, median, sample variance and standard deviation
//! - **Min-max scaling**: rescale a column of values onto the `[0, 1]` interval
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`scaling`]: Min-max scaling fitted on a dataset
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use dexlab_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.median, 3.0);
//! ```
//!
//! ## Sample standard deviation
//!
//! ```
//! use dexlab_stats::descriptive::sample_std_dev;
//!
//! let std_dev = sample_std_dev(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! assert!((std_dev - 1.5811).abs() < 1e-4);
//! assert_eq!(sample_std_dev(&[42.0]), None);
//! ```
//!
//! ## Min-max scaling
//!
//! ```
//! use dexlab_stats::scaling::MinMaxScaler;
//!
//! let scaler = MinMaxScaler::fit([10.0, 20.0, 30.0]).unwrap();
//! assert_eq!(scaler.scale(20.0), 0.5);
//! ```

pub mod descriptive;
pub mod scaling;
