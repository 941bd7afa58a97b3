//! Input validation for raw group counts
//!
//! Raw values arrive as text or numbers. Each field is parsed into a
//! non-negative whole count, then the group as a whole is checked against the
//! subset relations the selected metric relies on. The first failure is
//! returned; control is checked before test, fields in input order.

use crate::metric::MetricKind;
use crate::sample::{GroupSample, RawGroup, RawValue};
use propstat_core::{CountField, Error, FieldRef, Group, Result};

/// Largest count accepted from a floating-point form: every integer up to
/// here has an exact, unambiguous `f64` representation
pub const MAX_EXACT_COUNT: f64 = 9_007_199_254_740_991.0;

/// Parse one raw field into a count
///
/// Plain integer text is read exactly as a `u64`. Everything else goes
/// through `f64` and must be a whole number no larger than
/// [`MAX_EXACT_COUNT`]; larger values are rejected as `NotANumber` rather
/// than rounded.
pub fn parse_count(field: FieldRef, raw: &RawValue) -> Result<u64> {
    let not_a_number = || Error::NotANumber {
        field,
        input: raw.to_string(),
    };

    let value = match raw {
        RawValue::Number(value) => *value,
        RawValue::Text(text) => {
            let text = text.trim();
            if let Ok(count) = text.parse::<u64>() {
                return Ok(count);
            }
            text.parse::<f64>().map_err(|_| not_a_number())?
        }
    };

    if !value.is_finite() {
        return Err(not_a_number());
    }
    if value < 0.0 {
        return Err(Error::Negative { field, value });
    }
    if value.fract() != 0.0 {
        return Err(Error::NonInteger { field, value });
    }
    if value > MAX_EXACT_COUNT {
        return Err(not_a_number());
    }

    Ok(value as u64)
}

/// Check a group's counts against the subset relations of `metric`
///
/// - clicks never exceed impressions
/// - conversions never exceed the metric's denominator when that is clicks,
///   otherwise never exceed impressions
/// - the metric's denominator is positive
pub fn validate_sample(group: Group, sample: GroupSample, metric: MetricKind) -> Result<GroupSample> {
    if sample.clicks > sample.impressions {
        return Err(Error::InconsistentCounts {
            field: FieldRef::new(group, CountField::Clicks),
            value: sample.clicks,
            bound_field: CountField::Impressions,
            bound: sample.impressions,
        });
    }

    let conversion_bound = match metric.denominator_field() {
        CountField::Clicks => CountField::Clicks,
        _ => CountField::Impressions,
    };
    if sample.conversions > sample.get(conversion_bound) {
        return Err(Error::InconsistentCounts {
            field: FieldRef::new(group, CountField::Conversions),
            value: sample.conversions,
            bound_field: conversion_bound,
            bound: sample.get(conversion_bound),
        });
    }

    let denominator = metric.denominator_field();
    if sample.get(denominator) == 0 {
        return Err(Error::ZeroDenominator {
            field: Some(FieldRef::new(group, denominator)),
        });
    }

    Ok(sample)
}

/// Parse and check one group's raw input
pub fn validate_group(group: Group, raw: &RawGroup, metric: MetricKind) -> Result<GroupSample> {
    let count = |field: CountField| parse_count(FieldRef::new(group, field), raw.get(field));

    let sample = GroupSample::new(
        count(CountField::Impressions)?,
        count(CountField::Clicks)?,
        count(CountField::Conversions)?,
    );
    validate_sample(group, sample, metric)
}

/// Validate both groups, control first
pub fn validate_pair(
    control: &RawGroup,
    test: &RawGroup,
    metric: MetricKind,
) -> Result<(GroupSample, GroupSample)> {
    let control = validate_group(Group::Control, control, metric)?;
    let test = validate_group(Group::Test, test, metric)?;
    Ok((control, test))
}
