use crate::confidence::ConfidenceLevel;
use crate::error::Result;
use crate::posterior::{compute_posterior, BetaParams, PosteriorResult};
use log::debug;
use serde::{Deserialize, Serialize};

/// The four counts currently shown to the user.
///
/// Nothing holds on to this between calls: the caller passes the current
/// state in and rebinds its fields to whatever comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriorState {
    pub prior_wins: u64,
    pub prior_losses: u64,
    pub observed_wins: u64,
    pub observed_losses: u64,
}

impl Default for PriorState {
    fn default() -> Self {
        Self {
            prior_wins: 5,
            prior_losses: 5,
            observed_wins: 0,
            observed_losses: 0,
        }
    }
}

impl PriorState {
    pub fn new(prior_wins: u64, prior_losses: u64, observed_wins: u64, observed_losses: u64) -> Self {
        Self {
            prior_wins,
            prior_losses,
            observed_wins,
            observed_losses,
        }
    }

    /// Lock the observed games in as history and start a fresh batch.
    pub fn updated(self) -> Self {
        update_priors(
            self.prior_wins,
            self.prior_losses,
            self.observed_wins,
            self.observed_losses,
        )
    }

    pub fn posterior_params(&self) -> BetaParams {
        BetaParams::combined(
            self.prior_wins,
            self.prior_losses,
            self.observed_wins,
            self.observed_losses,
        )
    }

    pub fn analyze(&self, confidence: ConfidenceLevel) -> Result<PosteriorResult> {
        compute_posterior(
            self.prior_wins,
            self.prior_losses,
            self.observed_wins,
            self.observed_losses,
            confidence,
        )
    }
}

/// Fold observed counts into the priors and reset the observed counts.
pub fn update_priors(prior_wins: u64, prior_losses: u64, observed_wins: u64, observed_losses: u64) -> PriorState {
    let state = PriorState {
        prior_wins: prior_wins.saturating_add(observed_wins),
        prior_losses: prior_losses.saturating_add(observed_losses),
        observed_wins: 0,
        observed_losses: 0,
    };
    debug!(
        "Updated priors: {} wins, {} losses",
        state.prior_wins, state.prior_losses
    );
    state
}
