//! Render-agnostic description of the posterior figure.
//!
//! A line chart of the density curve with one vertical marker per
//! confidence bound. The hosting layer decides how to draw it.

use crate::posterior::PosteriorResult;
use serde::Serialize;

pub const FIGURE_TITLE: &str = "Winning Probability Distribution";
pub const POSTERIOR_TRACE: &str = "Posterior";
pub const LOWER_BOUND_TRACE: &str = "Lower Confidence Bound";
pub const UPPER_BOUND_TRACE: &str = "Upper Confidence Bound";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_values: Option<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Trace {
    /// Vertical line at `x` from the axis up to `height`.
    fn marker(name: &str, x: f64, height: f64) -> Self {
        Self {
            name: name.to_string(),
            x: vec![x, x],
            y: vec![0.0, height],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub traces: Vec<Trace>,
}

impl Figure {
    pub fn from_posterior(result: &PosteriorResult) -> Self {
        let ticks = (0..=10).map(|i| i as f64 / 10.0).collect();
        Self {
            title: FIGURE_TITLE.to_string(),
            x_axis: Axis {
                title: "Probability of Winning".to_string(),
                tick_values: Some(ticks),
            },
            y_axis: Axis {
                title: "Likelihood".to_string(),
                tick_values: None,
            },
            traces: vec![
                Trace {
                    name: POSTERIOR_TRACE.to_string(),
                    x: result.x_grid.clone(),
                    y: result.densities.clone(),
                },
                Trace::marker(LOWER_BOUND_TRACE, result.lower_bound, result.curve_height),
                Trace::marker(UPPER_BOUND_TRACE, result.upper_bound, result.curve_height),
            ],
        }
    }

    pub fn trace(&self, name: &str) -> Option<&Trace> {
        self.traces.iter().find(|t| t.name == name)
    }
}
