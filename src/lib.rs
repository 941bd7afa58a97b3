//! Two-proportion significance testing for campaign comparisons
//!
//! This crate re-exports the workspace members:
//!
//! - [`core`]: errors, field identifiers, confidence levels and the normal distribution
//! - [`metrics`]: metric selection, input validation and proportions
//! - [`significance`]: the pooled two-proportion Z-test and difference intervals
//! - [`engine`]: the comparison entry point and its wire types
//!
//! # Example
//!
//! ```rust
//! use propstat::{evaluate, ConfidenceLevel, MetricKind, RawGroup};
//!
//! let result = evaluate(
//!     &RawGroup::new("12000", "340", "45"),
//!     &RawGroup::new("11800", "370", "52"),
//!     MetricKind::Ctr,
//!     ConfidenceLevel::NinetyFive,
//! ).unwrap();
//!
//! println!("z = {:.3}, p = {:.4}", result.z_score, result.p_value);
//! ```

pub use propstat_core as core;
pub use propstat_engine as engine;
pub use propstat_metrics as metrics;
pub use propstat_significance as significance;

pub use propstat_core::{
    ConfidenceLevel, CountField, Error, ErrorKind, ErrorReport, FieldRef, Group, Result,
};
pub use propstat_engine::{
    evaluate, ComparisonEngine, ComparisonRequest, ComparisonResult, EngineConfig,
};
pub use propstat_metrics::{GroupSample, MetricKind, Proportion, RawGroup, RawValue};
pub use propstat_significance::{SignificanceTest, TestStatistic, TwoProportionZTest};
