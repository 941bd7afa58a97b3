//! Campaign metrics and proportion extraction
//!
//! This crate turns raw per-group counters into the proportions a
//! significance test compares:
//!
//! - **Validation**: raw text or numbers become [`GroupSample`]s, or a field-level
//!   [`propstat_core::Error`]
//! - **Metrics**: [`MetricKind`] selects which counters form the ratio
//! - **Proportions**: [`Proportion`] holds the observed rate and its sample size
//!
//! # Example
//!
//! ```rust
//! use propstat_metrics::{validate_pair, MetricKind, Proportion, RawGroup};
//!
//! let (control, test) = validate_pair(
//!     &RawGroup::new("12000", "340", "45"),
//!     &RawGroup::new("11800", "370", "52"),
//!     MetricKind::Ctr,
//! ).unwrap();
//!
//! let (clicks, impressions) = MetricKind::Ctr.resolve(&control);
//! let ctr = Proportion::from_counts(clicks, impressions).unwrap();
//! assert!((ctr.value() - 0.02833).abs() < 1e-5);
//! # let _ = test;
//! ```

mod metric;
mod proportion;
mod sample;
mod validation;

// Re-exports
pub use metric::{resolve, MetricKind};
pub use proportion::{compute, Proportion};
pub use sample::{GroupSample, RawGroup, RawValue};
pub use validation::{parse_count, validate_group, validate_pair, validate_sample, MAX_EXACT_COUNT};
