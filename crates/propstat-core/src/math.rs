//! Mathematical utilities for proportion testing
//!
//! This module provides the distribution functions needed to turn a test
//! statistic into a p-value and a confidence level into a critical value.

/// Distribution-related mathematical functions
pub mod distributions {
    /// Standard normal distribution utilities
    pub mod normal {
        use statrs::function::erf;
        use std::f64::consts::SQRT_2;

        /// Beyond this magnitude the tail mass is below `f64` resolution around 1.0
        pub const SATURATION_BOUND: f64 = 8.0;

        /// Switch point between the rational and continued-fraction tail forms
        const RATIONAL_LIMIT: f64 = 7.071_067_811_865_47;

        /// sqrt(2 * pi)
        const SQRT_TWO_PI: f64 = 2.506_628_274_631_000_5;

        const NUMERATOR: [f64; 7] = [
            3.526_249_659_989_11e-2,
            0.700_383_064_443_688,
            6.373_962_203_531_65,
            33.912_866_078_383,
            112.079_291_497_871,
            221.213_596_169_931,
            220.206_867_912_376,
        ];

        const DENOMINATOR: [f64; 8] = [
            8.838_834_764_831_84e-2,
            1.755_667_163_182_64,
            16.064_177_579_207,
            86.780_732_202_946_1,
            296.564_248_779_674,
            637.333_633_378_831,
            793.826_512_519_948,
            440.413_735_824_752,
        ];

        /// Evaluate a polynomial with coefficients ordered highest degree first
        #[inline]
        fn horner(coefficients: &[f64], x: f64) -> f64 {
            coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
        }

        /// Lower tail mass `P(Z <= -x)` for `x >= 0`
        ///
        /// Hart's double-precision rational approximation, with a continued
        /// fraction for the far tail.
        fn lower_tail(x: f64) -> f64 {
            if x > SATURATION_BOUND {
                return 0.0;
            }

            let exponential = (-0.5 * x * x).exp();
            if x < RATIONAL_LIMIT {
                exponential * horner(&NUMERATOR, x) / horner(&DENOMINATOR, x)
            } else {
                let mut fraction = x + 0.65;
                fraction = x + 4.0 / fraction;
                fraction = x + 3.0 / fraction;
                fraction = x + 2.0 / fraction;
                fraction = x + 1.0 / fraction;
                exponential / fraction / SQRT_TWO_PI
            }
        }

        /// Calculate the cumulative distribution function (CDF) of the standard normal distribution
        ///
        /// Accurate to well under 1e-7 absolute error on [-8, 8]; saturates to
        /// exactly 0 or 1 outside that range. `cdf(0.0)` is exactly 0.5.
        /// NaN propagates.
        pub fn cdf(z: f64) -> f64 {
            if z.is_nan() {
                return f64::NAN;
            }
            if z < -SATURATION_BOUND {
                return 0.0;
            }
            if z > SATURATION_BOUND {
                return 1.0;
            }

            let tail = lower_tail(z.abs());
            if z > 0.0 {
                1.0 - tail
            } else {
                tail
            }
        }

        /// Survival function `1 - cdf(z)`, evaluated without cancellation
        pub fn sf(z: f64) -> f64 {
            cdf(-z)
        }

        /// Probability density function of the standard normal distribution
        pub fn pdf(z: f64) -> f64 {
            (-0.5 * z * z).exp() / SQRT_TWO_PI
        }

        /// Calculate the inverse cumulative distribution function (quantile function)
        /// of the standard normal distribution
        pub fn ppf(p: f64) -> f64 {
            if p.is_nan() {
                return f64::NAN;
            }
            if p <= 0.0 {
                return f64::NEG_INFINITY;
            }
            if p >= 1.0 {
                return f64::INFINITY;
            }
            if p == 0.5 {
                return 0.0;
            }

            -SQRT_2 * erf::erfc_inv(2.0 * p)
        }

        /// Alias for ppf (percent point function) that matches common naming
        #[inline]
        pub fn quantile(p: f64) -> f64 {
            ppf(p)
        }

        /// Two-sided critical value `z` with `P(|Z| > z) = alpha`
        pub fn two_sided_critical_value(alpha: f64) -> f64 {
            ppf(1.0 - alpha / 2.0)
        }

        #[cfg(test)]
        mod tests {
            use super::*;
            use approx::assert_abs_diff_eq;
            use proptest::prelude::*;
            use statrs::distribution::{Continuous, ContinuousCDF, Normal};

            #[test]
            fn test_normal_cdf() {
                assert_eq!(cdf(0.0), 0.5);
                assert_eq!(cdf(-0.0), 0.5);
                assert_abs_diff_eq!(cdf(-1.96), 0.024_997_895_148_220_4, epsilon = 1e-12);
                assert_abs_diff_eq!(cdf(1.96), 0.975_002_104_851_779_6, epsilon = 1e-12);
                assert_abs_diff_eq!(cdf(1.0), 0.841_344_746_068_542_9, epsilon = 1e-12);
                assert_abs_diff_eq!(cdf(-3.0), 0.001_349_898_031_630_094_6, epsilon = 1e-12);
            }

            #[test]
            fn test_cdf_matches_statrs_reference() {
                let reference = Normal::new(0.0, 1.0).unwrap();
                let mut max_error: f64 = 0.0;
                for i in -8000..=8000 {
                    let z = i as f64 / 1000.0;
                    max_error = max_error.max((cdf(z) - reference.cdf(z)).abs());
                }
                assert!(max_error < 1e-7, "max absolute error {max_error:e}");
            }

            #[test]
            fn test_saturation() {
                assert_eq!(cdf(-8.5), 0.0);
                assert_eq!(cdf(8.5), 1.0);
                assert_eq!(cdf(f64::NEG_INFINITY), 0.0);
                assert_eq!(cdf(f64::INFINITY), 1.0);
                assert!(cdf(-8.0) > 0.0);
                assert!(cdf(8.0) <= 1.0);
                assert!(cdf(f64::NAN).is_nan());
            }

            #[test]
            fn test_far_tail_branch() {
                let reference = Normal::new(0.0, 1.0).unwrap();
                for &z in &[-7.0, -7.07, -7.08, -7.5, -7.99] {
                    let relative = (cdf(z) - reference.cdf(z)).abs() / reference.cdf(z);
                    assert!(relative < 1e-6, "relative error {relative:e} at z={z}");
                }
            }

            #[test]
            fn test_sf_is_complement() {
                for &z in &[-4.0, -1.5, 0.0, 0.3, 2.0, 5.0] {
                    assert_abs_diff_eq!(sf(z) + cdf(z), 1.0, epsilon = 1e-15);
                }
                assert_abs_diff_eq!(2.0 * sf(1.96), 0.05, epsilon = 1e-4);
            }

            #[test]
            fn test_pdf() {
                assert_abs_diff_eq!(pdf(0.0), 0.398_942_280_401_432_7, epsilon = 1e-15);
                assert_abs_diff_eq!(pdf(1.5), pdf(-1.5), epsilon = 0.0);
            }

            #[test]
            fn test_sqrt_two_pi_is_full_precision() {
                assert_eq!(SQRT_TWO_PI, (2.0 * std::f64::consts::PI).sqrt());
                assert_abs_diff_eq!(pdf(0.0) * SQRT_TWO_PI, 1.0, epsilon = 1e-15);

                let reference = Normal::new(0.0, 1.0).unwrap();
                for i in -80..=80 {
                    let z = i as f64 / 10.0;
                    assert_abs_diff_eq!(pdf(z), reference.pdf(z), epsilon = 1e-15);
                }
            }

            #[test]
            fn test_normal_ppf() {
                assert_eq!(ppf(0.5), 0.0);
                assert_abs_diff_eq!(ppf(0.025), -1.959_963_984_540_054, epsilon = 1e-9);
                assert_abs_diff_eq!(ppf(0.975), 1.959_963_984_540_054, epsilon = 1e-9);
                assert_eq!(ppf(0.0), f64::NEG_INFINITY);
                assert_eq!(ppf(1.0), f64::INFINITY);
                assert_eq!(quantile(0.5), 0.0);
            }

            #[test]
            fn test_two_sided_critical_values() {
                assert_abs_diff_eq!(two_sided_critical_value(0.10), 1.644_853_626_951_472, epsilon = 1e-9);
                assert_abs_diff_eq!(two_sided_critical_value(0.05), 1.959_963_984_540_054, epsilon = 1e-9);
                assert_abs_diff_eq!(two_sided_critical_value(0.01), 2.575_829_303_548_900_4, epsilon = 1e-9);
            }

            #[test]
            fn test_cdf_ppf_inverse() {
                for &p in &[0.001, 0.01, 0.05, 0.1, 0.25, 0.5, 0.75, 0.9, 0.95, 0.99, 0.999] {
                    let x = ppf(p);
                    let p_recovered = cdf(x);
                    assert!(
                        (p - p_recovered).abs() < 1e-9,
                        "Failed for p={p}: ppf({p})={x}, cdf({x})={p_recovered}"
                    );
                }
            }

            proptest! {
                #[test]
                fn prop_cdf_monotone(a in -12.0f64..12.0, b in -12.0f64..12.0) {
                    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                    prop_assert!(cdf(lo) <= cdf(hi), "cdf({lo}) > cdf({hi})");
                }

                #[test]
                fn prop_cdf_in_unit_interval(z in proptest::num::f64::ANY) {
                    let value = cdf(z);
                    prop_assert!(value.is_nan() || (0.0..=1.0).contains(&value));
                }

                #[test]
                fn prop_cdf_symmetry(z in -8.0f64..8.0) {
                    prop_assert!((cdf(z) + cdf(-z) - 1.0).abs() < 1e-15);
                }
            }
        }
    }
}
