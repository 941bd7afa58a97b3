//! Comparison engine for campaign A/B tests
//!
//! The single entry point a presentation layer calls: raw counts for a
//! control and a test group go in, a [`ComparisonResult`] or a field-level
//! [`propstat_core::Error`] comes out. Each call validates, resolves the
//! metric, computes both proportions and runs the significance test.
//!
//! # Examples
//!
//! ```rust
//! use propstat_core::ConfidenceLevel;
//! use propstat_engine::{evaluate, MetricKind, RawGroup};
//!
//! let result = evaluate(
//!     &RawGroup::new("1000", "100", "10"),
//!     &RawGroup::new("1000", "130", "10"),
//!     MetricKind::Ctr,
//!     ConfidenceLevel::NinetyFive,
//! ).unwrap();
//!
//! assert!(result.significant);
//! println!("{result}");
//! ```
//!
//! Requests can also arrive as JSON from the form:
//!
//! ```rust
//! use propstat_engine::{ComparisonEngine, ComparisonRequest};
//!
//! let request = ComparisonRequest::from_json(r#"{
//!     "control": {"impressions": "12000", "clicks": "340", "conversions": "45"},
//!     "test": {"impressions": "11800", "clicks": "370", "conversions": "52"},
//!     "metric": "ctr",
//!     "confidence": "0.95"
//! }"#).unwrap();
//!
//! let result = ComparisonEngine::new().evaluate_request(&request).unwrap();
//! assert!(!result.significant);
//! ```

mod config;
mod engine;
mod request;

// Re-exports
pub use config::{EngineBuilder, EngineConfig};
pub use engine::{evaluate, ComparisonEngine, ComparisonResult};
pub use request::ComparisonRequest;

pub use propstat_metrics::{GroupSample, MetricKind, RawGroup, RawValue};
