//! Error types for proportion comparisons
//!
//! Provides a unified error type for all propstat crates. Every variant is an
//! ordinary, recoverable value: the caller is expected to render it next to
//! the offending input and let the user resubmit.

use crate::types::{CountField, FieldRef};
use serde::Serialize;
use thiserror::Error;

/// Core error type for comparison operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A raw input field did not parse as a finite number
    #[error("{field}: {input:?} is not a number")]
    NotANumber { field: FieldRef, input: String },

    /// A count was negative
    #[error("{field}: count must not be negative, got {value}")]
    Negative { field: FieldRef, value: f64 },

    /// A count had a fractional part
    #[error("{field}: count must be a whole number, got {value}")]
    NonInteger { field: FieldRef, value: f64 },

    /// A count exceeded the count it is a subset of
    #[error("{field}: {value} exceeds {bound_field} ({bound})")]
    InconsistentCounts {
        field: FieldRef,
        value: u64,
        bound_field: CountField,
        bound: u64,
    },

    /// The metric's denominator was zero
    #[error("{}", zero_denominator_message(.field))]
    ZeroDenominator { field: Option<FieldRef> },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

fn zero_denominator_message(field: &Option<FieldRef>) -> String {
    match field {
        Some(field) => format!("{field}: must be positive to compute a proportion"),
        None => "Proportion denominator is zero".to_string(),
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Tag identifying the kind of an [`Error`] without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    NotANumber,
    Negative,
    NonInteger,
    InconsistentCounts,
    ZeroDenominator,
    InvalidParameter,
}

impl Error {
    /// Create an error for a zero denominator with no field context
    pub fn zero_denominator() -> Self {
        Self::ZeroDenominator { field: None }
    }

    /// Create an error for an unrecognised metric name
    pub fn unknown_metric(name: &str) -> Self {
        Self::InvalidParameter(format!(
            "Unknown metric {name:?}, expected one of ctr, cvr, cr_impressions"
        ))
    }

    /// Create an error for a confidence level outside the supported set
    pub fn unsupported_confidence(level: &str) -> Self {
        Self::InvalidParameter(format!(
            "Unsupported confidence level {level:?}, expected one of 0.90, 0.95, 0.99"
        ))
    }

    /// The kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotANumber { .. } => ErrorKind::NotANumber,
            Self::Negative { .. } => ErrorKind::Negative,
            Self::NonInteger { .. } => ErrorKind::NonInteger,
            Self::InconsistentCounts { .. } => ErrorKind::InconsistentCounts,
            Self::ZeroDenominator { .. } => ErrorKind::ZeroDenominator,
            Self::InvalidParameter(_) => ErrorKind::InvalidParameter,
        }
    }

    /// The input field the error should be reported against, if any
    pub fn field(&self) -> Option<FieldRef> {
        match self {
            Self::NotANumber { field, .. }
            | Self::Negative { field, .. }
            | Self::NonInteger { field, .. }
            | Self::InconsistentCounts { field, .. } => Some(*field),
            Self::ZeroDenominator { field } => *field,
            Self::InvalidParameter(_) => None,
        }
    }

    /// Serializable summary for the presentation layer
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            kind: self.kind(),
            field: self.field(),
            message: self.to_string(),
        }
    }
}

/// Tagged error payload handed back to the caller
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub field: Option<FieldRef>,
    pub message: String,
}

impl From<&Error> for ErrorReport {
    fn from(error: &Error) -> Self {
        error.report()
    }
}
