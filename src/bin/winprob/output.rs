use std::fs;
use std::path::Path;

use anyhow::Result;
use csv::WriterBuilder;
use itertools::Itertools;
use log::info;
use serde::Serialize;
use winprob_utils::plot::Figure;
use winprob_utils::posterior::PosteriorResult;
use winprob_utils::prior::PriorState;

#[derive(Debug, Serialize)]
struct CurvePoint {
    x: f64,
    density: f64,
}

/// Tab-separated `x`/`density` rows, one per grid point.
pub fn curve_tsv(result: &PosteriorResult) -> Result<Vec<u8>> {
    let mut curve_writer = WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_writer(Vec::new());
    for (x, density) in result.points() {
        curve_writer.serialize(CurvePoint { x, density })?;
    }
    Ok(curve_writer.into_inner().map_err(|e| e.into_error())?)
}

/// The file is only created once the whole curve has been serialized.
pub fn write_curve_file(path: &Path, result: &PosteriorResult) -> Result<()> {
    let curve = curve_tsv(result)?;
    fs::write(path, curve)?;
    info!("Wrote {} curve points to {}", result.x_grid.len(), path.display());
    Ok(())
}

pub fn analysis_table(result: &PosteriorResult) -> String {
    let rows = [
        ("alpha", result.params.wins.to_string()),
        ("beta", result.params.losses.to_string()),
        ("confidence", result.confidence.to_string()),
        ("mean", format!("{:.4}", result.mean)),
        ("standard_deviation", format!("{:.4}", result.standard_deviation)),
        ("mode", result.mode.map_or("NA".to_string(), |mode| format!("{:.4}", mode))),
        ("lower_bound", format!("{:.4}", result.lower_bound)),
        ("upper_bound", format!("{:.4}", result.upper_bound)),
        ("curve_height", format!("{:.4}", result.curve_height)),
    ];
    rows.iter()
        .map(|(key, value)| format!("{}\t{}", key, value))
        .join("\n")
}

#[derive(Debug, Serialize)]
struct AnalysisReport<'a> {
    alpha: u64,
    beta: u64,
    confidence: f64,
    mean: f64,
    standard_deviation: f64,
    mode: Option<f64>,
    lower_bound: f64,
    upper_bound: f64,
    curve_height: f64,
    figure: &'a Figure,
}

pub fn analysis_json(result: &PosteriorResult) -> Result<String> {
    let figure = Figure::from_posterior(result);
    let report = AnalysisReport {
        alpha: result.params.wins,
        beta: result.params.losses,
        confidence: result.confidence.value(),
        mean: result.mean,
        standard_deviation: result.standard_deviation,
        mode: result.mode,
        lower_bound: result.lower_bound,
        upper_bound: result.upper_bound,
        curve_height: result.curve_height,
        figure: &figure,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn state_table(state: &PriorState) -> String {
    format!(
        "prior_wins\t{}\nprior_losses\t{}\nobserved_wins\t{}\nobserved_losses\t{}",
        state.prior_wins, state.prior_losses, state.observed_wins, state.observed_losses
    )
}

pub fn state_json(state: &PriorState) -> Result<String> {
    Ok(serde_json::to_string_pretty(state)?)
}
