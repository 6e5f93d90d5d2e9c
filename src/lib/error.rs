//! Error types for the estimation core.

use thiserror::Error;

/// Result type alias for estimation operations.
pub type Result<T> = std::result::Result<T, EstimateError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    /// Beta(α, β) is undefined unless both shapes are strictly positive.
    #[error("Invalid distribution: Beta({wins}, {losses}) needs at least one win and one loss")]
    InvalidDistribution { wins: f64, losses: f64 },

    /// Count or confidence level rejected before any computation.
    #[error("Invalid input: {0}")]
    InputValidation(String),
}

impl EstimateError {
    /// Text for the hosting layer to show instead of a broken graph.
    pub fn user_message(&self) -> String {
        match self {
            EstimateError::InvalidDistribution { .. } => {
                "at least one win and one loss are required to form an estimate".to_string()
            }
            EstimateError::InputValidation(msg) => msg.clone(),
        }
    }
}
