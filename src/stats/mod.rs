// The normal CDF below follows the formulation of
// the [statrs](https://github.com/statrs-dev/statrs?tab=MIT-1-ov-file) package,
// Copyright (c) 2016 Michael Ma, MIT License.

use anyhow::{ensure, Result};
use std::f64::consts::{PI, SQRT_2};

/// A normal distribution with validated parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normal {
    mean: f64,
    std_dev: f64,
}

impl Default for Normal {
    fn default() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }
}

impl Normal {
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        ensure!(mean.is_finite(), "the mean must be finite, got {}", mean);
        ensure!(
            std_dev.is_finite() && std_dev > 0.0,
            "the standard deviation must be positive and finite, got {}",
            std_dev
        );
        Ok(Self { mean, std_dev })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    pub fn cdf(&self, x: f64) -> f64 {
        cumulative_probability(x, self.mean, self.std_dev)
    }

    pub fn pdf(&self, x: f64) -> f64 {
        density(x, self.mean, self.std_dev)
    }

    /// Probability mass of the given interval, always in `[0, 1]`.
    pub fn probability(&self, interval: &Interval) -> f64 {
        let p = interval_probability(self.mean, self.std_dev, interval.lower, interval.upper);
        // rounding in erfc can push a tiny interval just below zero
        p.clamp(0.0, 1.0)
    }

    /// The range `[mean - k*sd, mean + k*sd]`.
    pub fn span(&self, k: f64) -> (f64, f64) {
        (self.mean - k * self.std_dev, self.mean + k * self.std_dev)
    }
}

/// A closed interval `[lower, upper]`. Bounds may be infinite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    lower: f64,
    upper: f64,
}

impl Interval {
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        ensure!(
            !lower.is_nan() && !upper.is_nan(),
            "interval bounds must be numbers, got [{}, {}]",
            lower,
            upper
        );
        ensure!(
            lower <= upper,
            "the lower bound {} is greater than the upper bound {}",
            lower,
            upper
        );
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// The normal CDF at `x`. `std_dev` is assumed to be positive.
pub fn cumulative_probability(x: f64, mean: f64, std_dev: f64) -> f64 {
    0.5 * libm::erfc((mean - x) / (std_dev * SQRT_2))
}

/// The normal PDF at `x`. `std_dev` is assumed to be positive.
pub fn density(x: f64, mean: f64, std_dev: f64) -> f64 {
    let z = (x - mean) / std_dev;
    (-0.5 * z * z).exp() / (std_dev * (2.0 * PI).sqrt())
}

/// `P(lower <= X <= upper)` for `X ~ N(mean, std_dev)`.
///
/// Bounds are not checked: swapping them yields the negated probability.
pub fn interval_probability(mean: f64, std_dev: f64, lower: f64, upper: f64) -> f64 {
    let upper_cdf = cumulative_probability(upper, mean, std_dev);
    let lower_cdf = cumulative_probability(lower, mean, std_dev);
    log::debug!("cdf({}) = {}, cdf({}) = {}", upper, upper_cdf, lower, lower_cdf);
    upper_cdf - lower_cdf
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::prelude::*;
    use rand_distr::Uniform;
    use rand_xoshiro::Xoroshiro128Plus;

    /// Seeded (mean, std_dev) pairs covering a few orders of magnitude.
    fn random_params(n: usize, seed: u64) -> Vec<(f64, f64)> {
        let mut rng = Xoroshiro128Plus::seed_from_u64(seed);
        let means = Uniform::new(-1000.0f64, 1000.0);
        let exps = Uniform::new(-3.0f64, 3.0);
        (0..n)
            .map(|_| {
                let mean: f64 = rng.sample(&means);
                let e: f64 = rng.sample(&exps);
                (mean, 10f64.powf(e))
            })
            .collect()
    }

    #[test]
    fn test_server_response_time() {
        let p = interval_probability(2.5, 0.5, 2.0, 3.0);
        assert!((p - 0.6827).abs() < 1e-4, "got {}", p);
    }

    #[test]
    fn test_standard_normal_cdf() {
        let n = Normal::default();
        assert!((n.cdf(0.0) - 0.5).abs() < 1e-15);
        assert!((n.cdf(1.96) - 0.9750021048517795).abs() < 1e-12);
        assert!((n.cdf(-1.0) - 0.15865525393145707).abs() < 1e-12);
        assert_eq!(n.cdf(f64::INFINITY), 1.0);
        assert_eq!(n.cdf(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_density_peak() {
        let n = Normal::new(2.5, 0.5).unwrap();
        assert!((n.pdf(2.5) - 0.7978845608028654).abs() < 1e-12);
        assert!((n.pdf(2.0) - n.pdf(3.0)).abs() < 1e-15);
    }

    #[test]
    fn test_wide_interval_captures_everything() {
        for (mean, sd) in random_params(200, 1245) {
            let p = interval_probability(mean, sd, mean - 4.0 * sd, mean + 4.0 * sd);
            assert!((p - 1.0).abs() < 1e-3, "mean={} sd={} p={}", mean, sd, p);
        }
    }

    #[test]
    fn test_zero_width_interval() {
        for (mean, sd) in random_params(100, 42) {
            for x in [mean, mean - sd, mean + 3.0 * sd, 0.0] {
                assert_eq!(interval_probability(mean, sd, x, x), 0.0);
            }
        }
    }

    #[test]
    fn test_monotone_in_upper_bound() {
        for (mean, sd) in random_params(50, 7) {
            let lower = mean - 2.0 * sd;
            let mut last = interval_probability(mean, sd, lower, lower);
            for i in 1..=100 {
                let upper = lower + i as f64 * 0.1 * sd;
                let p = interval_probability(mean, sd, lower, upper);
                assert!(p >= last, "p={} < last={} at upper={}", p, last, upper);
                last = p;
            }
        }
    }

    #[test]
    fn test_symmetric_interval() {
        for (mean, sd) in random_params(50, 99) {
            for d in [0.1 * sd, sd, 2.5 * sd] {
                let pos = interval_probability(mean, sd, mean - d, mean + d);
                let neg = interval_probability(mean, sd, mean + d, mean - d);
                assert!((pos.abs() - neg.abs()).abs() < 1e-12);
                assert!((pos + neg).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_swapped_bounds_are_negative() {
        let p = interval_probability(2.5, 0.5, 3.0, 2.0);
        assert!((p + 0.6827).abs() < 1e-4);
    }

    #[test]
    fn test_checked_constructors() {
        assert!(Normal::new(0.0, 0.0).is_err());
        assert!(Normal::new(0.0, -1.0).is_err());
        assert!(Normal::new(f64::NAN, 1.0).is_err());
        assert!(Normal::new(0.0, f64::INFINITY).is_err());
        assert!(Interval::new(3.0, 2.0).is_err());
        assert!(Interval::new(f64::NAN, 2.0).is_err());
        assert!(Interval::new(f64::NEG_INFINITY, f64::INFINITY).is_ok());
        assert_eq!(Interval::new(2.0, 3.0).unwrap().width(), 1.0);
    }

    #[test]
    fn test_probability_of_tails() {
        let n = Normal::default();
        let all = Interval::new(f64::NEG_INFINITY, f64::INFINITY).unwrap();
        assert_eq!(n.probability(&all), 1.0);
        let left = Interval::new(f64::NEG_INFINITY, 0.0).unwrap();
        assert!((n.probability(&left) - 0.5).abs() < 1e-15);
    }
}
