//! Validation of raw win/loss counts handed over by an outer surface.
//!
//! Input widgets and JSON bodies deliver numbers that may be negative,
//! fractional or not finite. Everything past this module works with `u64`.

use crate::confidence::ConfidenceLevel;
use crate::error::{EstimateError, Result};
use crate::prior::PriorState;
use serde::Deserialize;

/// Largest float that still converts to `u64` without loss.
const MAX_EXACT_COUNT: f64 = 9_007_199_254_740_992.0;

pub fn count_from_f64(name: &str, value: f64) -> Result<u64> {
    if !value.is_finite() {
        return Err(EstimateError::InputValidation(format!(
            "{} must be a finite number, got {}",
            name, value
        )));
    }
    if value < 0.0 {
        return Err(EstimateError::InputValidation(format!(
            "{} must not be negative, got {}",
            name, value
        )));
    }
    if value.fract() != 0.0 {
        return Err(EstimateError::InputValidation(format!(
            "{} must be a whole number, got {}",
            name, value
        )));
    }
    if value > MAX_EXACT_COUNT {
        return Err(EstimateError::InputValidation(format!(
            "{} is too large, got {}",
            name, value
        )));
    }
    Ok(value as u64)
}

/// Parse a count typed as text. Accepts "7" and "7.0".
pub fn parse_count(s: &str) -> Result<u64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(EstimateError::InputValidation("count must not be empty".to_string()));
    }
    if let Ok(count) = trimmed.parse::<u64>() {
        return Ok(count);
    }
    let value: f64 = trimmed.parse().map_err(|_| {
        EstimateError::InputValidation(format!("count must be a whole number, got '{}'", trimmed))
    })?;
    count_from_f64("count", value)
}

/// The five scalar fields exactly as an outer surface submits them.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RawInputs {
    pub prior_wins: f64,
    pub prior_losses: f64,
    pub observed_wins: f64,
    pub observed_losses: f64,
    pub confidence: f64,
}

impl RawInputs {
    pub fn validate(&self) -> Result<(PriorState, ConfidenceLevel)> {
        let state = PriorState::new(
            count_from_f64("prior wins", self.prior_wins)?,
            count_from_f64("prior losses", self.prior_losses)?,
            count_from_f64("observed wins", self.observed_wins)?,
            count_from_f64("observed losses", self.observed_losses)?,
        );
        let confidence = ConfidenceLevel::try_from(self.confidence)?;
        Ok((state, confidence))
    }
}
