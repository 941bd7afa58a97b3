//! Core types and functions for two-proportion comparisons
//!
//! This crate provides the foundation shared by the rest of the workspace:
//!
//! - **Errors**: a single [`Error`] enum covering every way an input can be
//!   rejected, tagged with the offending field
//! - **Types**: [`Group`], [`CountField`], [`FieldRef`] and the closed set of
//!   [`ConfidenceLevel`]s
//! - **Math**: the standard normal distribution used to turn a Z-statistic
//!   into a p-value
//!
//! # Example
//!
//! ```rust
//! use propstat_core::{math::distributions::normal, ConfidenceLevel};
//!
//! let level: ConfidenceLevel = "0.95".parse().unwrap();
//! let critical = normal::two_sided_critical_value(level.alpha());
//! assert!((critical - 1.96).abs() < 1e-3);
//! assert_eq!(normal::cdf(0.0), 0.5);
//! ```

pub mod error;
pub mod math;
pub mod types;

// Re-export core types
pub use error::{Error, ErrorKind, ErrorReport, Result};
pub use types::{ConfidenceLevel, CountField, FieldRef, Group};
