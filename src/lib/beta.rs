use crate::confidence::ConfidenceLevel;
use crate::error::{EstimateError, Result};
use log::warn;
use statrs::distribution::{Beta, Continuous, ContinuousCDF};

/// Largest shape parameter accepted. Past this the log-gamma terms in the
/// CDF lose too much precision to place a bound.
pub const MAX_SHAPE: f64 = 1e9;

/// Cap on bisection steps for `quantile`.
const QUANTILE_MAX_ITER: usize = 200;

/// Beta distribution over the probability of winning a single game.
#[derive(Clone, Debug)]
pub struct WinRateBeta {
    pub alpha: f64,
    pub beta: f64,
    dist: Beta,
}

impl WinRateBeta {
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        let invalid = EstimateError::InvalidDistribution {
            wins: alpha,
            losses: beta,
        };
        if !(alpha > 0.0 && beta > 0.0 && alpha.is_finite() && beta.is_finite()) {
            return Err(invalid);
        }
        if alpha > MAX_SHAPE || beta > MAX_SHAPE {
            return Err(EstimateError::InputValidation(format!(
                "Beta({}, {}) exceeds the supported maximum of {} wins or losses",
                alpha, beta, MAX_SHAPE
            )));
        }
        let dist = Beta::new(alpha, beta).map_err(|e| {
            warn!("Beta({}, {}) rejected: {:?}", alpha, beta, e);
            invalid
        })?;
        Ok(Self { alpha, beta, dist })
    }

    pub fn mean(&self) -> f64 {
        self.alpha / (self.alpha + self.beta)
    }

    pub fn variance(&self) -> f64 {
        let numerator = self.alpha * self.beta;
        let denominator = (self.alpha + self.beta).powf(2.0) * (self.alpha + self.beta + 1.0);
        numerator / denominator
    }

    pub fn standard_deviation(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Most likely win probability. `None` when the density is flat.
    pub fn mode(&self) -> Option<f64> {
        match (self.alpha > 1.0, self.beta > 1.0) {
            (true, true) => Some((self.alpha - 1.0) / (self.alpha + self.beta - 2.0)),
            (true, false) => Some(1.0),
            (false, true) => Some(0.0),
            // Flat, or U-shaped with peaks at both edges
            (false, false) => None,
        }
    }

    pub fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 || x > 1.0 {
            return 0.0;
        }
        self.dist.pdf(x)
    }

    pub fn cdf(&self, x: f64) -> f64 {
        self.dist.cdf(x)
    }

    /// Inverse CDF by bisection on `cdf`. `p` outside (0, 1) maps to the
    /// support edges.
    pub fn quantile(&self, p: f64) -> f64 {
        if p <= 0.0 {
            return 0.0;
        }
        if p >= 1.0 {
            return 1.0;
        }
        let mut low = 0.0_f64;
        let mut high = 1.0_f64;
        for _ in 0..QUANTILE_MAX_ITER {
            let mid = low + (high - low) / 2.0;
            // Interval no longer representable
            if mid <= low || mid >= high {
                break;
            }
            if self.cdf(mid) < p {
                low = mid;
            } else {
                high = mid;
            }
        }
        low + (high - low) / 2.0
    }

    /// Interval with `level.tail_mass()` excluded on each side.
    pub fn equal_tailed_interval(&self, level: ConfidenceLevel) -> (f64, f64) {
        let tail = level.tail_mass();
        (self.quantile(tail), self.quantile(1.0 - tail))
    }
}
