pub mod beta;
pub mod confidence;
pub mod count;
pub mod error;
pub mod plot;
pub mod posterior;
pub mod prior;

pub use confidence::ConfidenceLevel;
pub use error::{EstimateError, Result};
pub use posterior::{compute_posterior, BetaParams, PosteriorResult};
pub use prior::{update_priors, PriorState};
