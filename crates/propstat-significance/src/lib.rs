//! Significance testing for differences between two proportions
//!
//! This crate decides whether two observed rates differ by more than chance:
//!
//! - **Pooled Z-test**: [`TwoProportionZTest`] computes the standard error,
//!   Z-score and two-tailed p-value of `test - control`
//! - **Intervals**: [`difference_interval`] gives a Wald interval for the
//!   difference, [`relative_lift`] the change relative to control
//!
//! # Example
//!
//! ```rust
//! use propstat_core::ConfidenceLevel;
//! use propstat_metrics::Proportion;
//! use propstat_significance::{SignificanceTest, TwoProportionZTest};
//!
//! let control = Proportion::from_counts(100, 1000).unwrap();
//! let test = Proportion::from_counts(130, 1000).unwrap();
//!
//! let stat = TwoProportionZTest::new().test(&control, &test);
//! assert!(stat.z_score > 0.0);
//! assert!(stat.is_significant(ConfidenceLevel::NinetyFive));
//! assert!(!stat.is_significant(ConfidenceLevel::NinetyNine));
//! ```

mod interval;
mod traits;
mod types;

// Re-exports
pub use interval::{difference_interval, relative_lift, unpooled_standard_error};
pub use traits::SignificanceTest;
pub use types::{ConfidenceInterval, TestStatistic};
pub use z_test::{two_tailed_p_value, TwoProportionZTest};
