//! Engagement metrics and their numerator/denominator extraction

use crate::sample::GroupSample;
use propstat_core::{CountField, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The ratio being compared between the two groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Click-through rate: clicks / impressions
    #[default]
    Ctr,
    /// Conversion rate per click: conversions / clicks
    Cvr,
    /// Conversion rate per impression: conversions / impressions
    #[serde(alias = "cr-impressions")]
    CrImpressions,
}

impl MetricKind {
    pub const ALL: [MetricKind; 3] = [Self::Ctr, Self::Cvr, Self::CrImpressions];

    /// Wire name of this metric
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ctr => "ctr",
            Self::Cvr => "cvr",
            Self::CrImpressions => "cr_impressions",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ctr => "CTR (clicks / impressions)",
            Self::Cvr => "CR (conversions / clicks)",
            Self::CrImpressions => "CR (conversions / impressions)",
        }
    }

    pub fn numerator_field(&self) -> CountField {
        match self {
            Self::Ctr => CountField::Clicks,
            Self::Cvr | Self::CrImpressions => CountField::Conversions,
        }
    }

    pub fn denominator_field(&self) -> CountField {
        match self {
            Self::Ctr | Self::CrImpressions => CountField::Impressions,
            Self::Cvr => CountField::Clicks,
        }
    }

    /// Extract `(numerator, denominator)` from a group's counts
    pub fn resolve(&self, sample: &GroupSample) -> (u64, u64) {
        (
            sample.get(self.numerator_field()),
            sample.get(self.denominator_field()),
        )
    }
}

/// Extract `(numerator, denominator)` for `metric` from `sample`
pub fn resolve(metric: MetricKind, sample: &GroupSample) -> (u64, u64) {
    metric.resolve(sample)
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MetricKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "ctr" => Ok(Self::Ctr),
            "cvr" => Ok(Self::Cvr),
            "cr_impressions" => Ok(Self::CrImpressions),
            _ => Err(Error::unknown_metric(s)),
        }
    }
}
