use crate::beta::WinRateBeta;
use crate::confidence::ConfidenceLevel;
use crate::error::Result;
use log::debug;
use ordered_float::OrderedFloat;
use serde::Serialize;

/// Number of points the density curve is evaluated at.
pub const GRID_POINTS: usize = 200;

/// Shape parameters of the posterior: α = total wins, β = total losses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BetaParams {
    pub wins: u64,
    pub losses: u64,
}

impl BetaParams {
    pub fn new(wins: u64, losses: u64) -> Self {
        Self { wins, losses }
    }

    pub fn combined(prior_wins: u64, prior_losses: u64, observed_wins: u64, observed_losses: u64) -> Self {
        Self::new(
            prior_wins.saturating_add(observed_wins),
            prior_losses.saturating_add(observed_losses),
        )
    }

    pub fn distribution(&self) -> Result<WinRateBeta> {
        WinRateBeta::new(self.wins as f64, self.losses as f64)
    }
}

/// Evenly spaced probabilities covering [0, 1], both ends included.
pub fn probability_grid() -> Vec<f64> {
    let step_count = (GRID_POINTS - 1) as f64;
    (0..GRID_POINTS).map(|i| i as f64 / step_count).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PosteriorResult {
    pub params: BetaParams,
    pub confidence: ConfidenceLevel,
    pub x_grid: Vec<f64>,
    pub densities: Vec<f64>,
    pub lower_bound: f64,
    pub upper_bound: f64,
    /// Tallest density on the grid; the bound markers are drawn up to it.
    pub curve_height: f64,
    pub mean: f64,
    pub standard_deviation: f64,
    /// Most likely win probability; `None` for a flat or U-shaped posterior.
    pub mode: Option<f64>,
}

impl PosteriorResult {
    pub fn interval_width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x_grid.iter().copied().zip(self.densities.iter().copied())
    }
}

/// Posterior win-probability curve and equal-tailed interval for the
/// combined prior and observed counts.
pub fn compute_posterior(
    prior_wins: u64,
    prior_losses: u64,
    observed_wins: u64,
    observed_losses: u64,
    confidence: ConfidenceLevel,
) -> Result<PosteriorResult> {
    let params = BetaParams::combined(prior_wins, prior_losses, observed_wins, observed_losses);
    let dist = params.distribution()?;
    debug!("Posterior: α = {}, β = {}", params.wins, params.losses);

    let x_grid = probability_grid();
    let densities: Vec<f64> = x_grid.iter().map(|&x| dist.pdf(x)).collect();
    let (lower_bound, upper_bound) = dist.equal_tailed_interval(confidence);
    let curve_height = densities
        .iter()
        .copied()
        .map(OrderedFloat)
        .max()
        .map(OrderedFloat::into_inner)
        .unwrap_or(0.0);
    debug!(
        "{} interval: [{:.4}, {:.4}], curve height: {:.4}",
        confidence, lower_bound, upper_bound, curve_height
    );

    Ok(PosteriorResult {
        params,
        confidence,
        x_grid,
        densities,
        lower_bound,
        upper_bound,
        curve_height,
        mean: dist.mean(),
        standard_deviation: dist.standard_deviation(),
        mode: dist.mode(),
    })
}
