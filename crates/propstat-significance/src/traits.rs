//! Core traits for significance testing

use crate::types::TestStatistic;
use propstat_metrics::Proportion;

/// A hypothesis test comparing a control proportion with a test proportion
///
/// Implementations are stateless: the same inputs always produce the same
/// statistic, and the sign of `z_score` follows test minus control.
pub trait SignificanceTest {
    /// Short name of the test, used in logs
    fn name(&self) -> &'static str;

    /// Compute the standard error, Z-score and two-tailed p-value
    fn test(&self, control: &Proportion, test: &Proportion) -> TestStatistic;
}
