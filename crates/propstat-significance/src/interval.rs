//! Interval estimates for the difference between two proportions

use crate::types::ConfidenceInterval;
use propstat_core::math::distributions::normal;
use propstat_core::ConfidenceLevel;
use propstat_metrics::Proportion;

/// Unpooled standard error `sqrt(p1(1-p1)/n1 + p2(1-p2)/n2)`
pub fn unpooled_standard_error(control: &Proportion, test: &Proportion) -> f64 {
    (control.variance() + test.variance()).sqrt()
}

/// Wald confidence interval for `test - control`
///
/// Uses the unpooled standard error, since the interval does not assume the
/// two rates are equal. Collapses to a point when both groups have zero
/// variance.
pub fn difference_interval(
    control: &Proportion,
    test: &Proportion,
    confidence: ConfidenceLevel,
) -> ConfidenceInterval {
    let estimate = test.value() - control.value();
    let critical = normal::two_sided_critical_value(confidence.alpha());
    let margin = critical * unpooled_standard_error(control, test);

    ConfidenceInterval::new(estimate - margin, estimate + margin, estimate, confidence)
}

/// Relative change of the test rate over the control rate
///
/// `None` when the control rate is zero.
pub fn relative_lift(control: &Proportion, test: &Proportion) -> Option<f64> {
    if control.value() == 0.0 {
        return None;
    }
    Some((test.value() - control.value()) / control.value())
}
