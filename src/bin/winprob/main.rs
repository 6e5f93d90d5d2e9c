use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use itertools::Itertools;
use log::{debug, info};
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use winprob_utils::confidence::ConfidenceLevel;
use winprob_utils::count::RawInputs;
use winprob_utils::error::EstimateError;

mod cli;
mod output;

fn main() {
    let args = cli::Cli::parse();
    // Set up logging level
    match args.verbosity {
        cli::LogLevel::Silent => {
            env_logger::Builder::from_env(Env::default().default_filter_or("off")).init();
        }
        cli::LogLevel::Normal => {
            env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
        }
        cli::LogLevel::Verbose => {
            env_logger::Builder::from_env(Env::default().default_filter_or("debug")).init();
        }
    }

    match run(&args) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", error_message(&e));
            std::process::exit(1);
        }
    }
}

/// Text shown to the user for a failed action.
fn error_message(e: &anyhow::Error) -> String {
    match e.downcast_ref::<EstimateError>() {
        Some(err) => err.user_message(),
        None => e.to_string(),
    }
}

/// Run one action and return what goes to stdout. Nothing is printed or
/// written when the action fails.
fn run(args: &cli::Cli) -> Result<String> {
    match &args.command {
        cli::Command::Analyze(analyze) => {
            let (state, confidence) = match &analyze.request {
                Some(path) => {
                    let raw: RawInputs = serde_json::from_str(&fs::read_to_string(path)?)?;
                    raw.validate()?
                }
                None => (analyze.counts.state(), analyze.confidence),
            };
            info!(
                "Analyzing {} prior and {} observed games at {} confidence",
                state.prior_wins.saturating_add(state.prior_losses),
                state.observed_wins.saturating_add(state.observed_losses),
                confidence
            );
            let result = state.analyze(confidence)?;
            if let Some(out) = &analyze.out {
                output::write_curve_file(Path::new(out), &result)?;
            }
            match analyze.format {
                cli::OutputFormat::Table => Ok(output::analysis_table(&result)),
                cli::OutputFormat::Json => output::analysis_json(&result),
            }
        }
        cli::Command::UpdatePriors(update) => {
            let state = update.counts.state().updated();
            debug!("New baseline: {:?}", state);
            match update.format {
                cli::OutputFormat::Table => Ok(output::state_table(&state)),
                cli::OutputFormat::Json => output::state_json(&state),
            }
        }
        cli::Command::Levels => Ok(ConfidenceLevel::iter().map(|level| level.to_string()).join("\n")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    fn parse(args: &[&str]) -> cli::Cli {
        cli::Cli::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn test_analyze_without_wins_fails_cleanly() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("curve.tsv");
        let args = parse(&[
            "winprob",
            "analyze",
            "--prior-wins",
            "0",
            "--observed-wins",
            "0",
            "--out",
            out.to_str().unwrap(),
        ]);
        let err = run(&args).unwrap_err();
        assert_eq!(
            error_message(&err),
            "at least one win and one loss are required to form an estimate"
        );
        assert!(!out.exists());
    }

    #[test]
    fn test_analyze_oversized_counts_fails() {
        let args = parse(&["winprob", "analyze", "--prior-losses", "5000000000"]);
        let err = run(&args).unwrap_err();
        assert!(error_message(&err).contains("supported maximum"));
    }

    #[test]
    fn test_analyze_writes_curve() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("curve.tsv");
        let args = parse(&["winprob", "analyze", "--observed-wins", "3", "--out", out.to_str().unwrap()]);
        let text = run(&args).unwrap();
        assert!(text.contains("alpha\t8"));
        assert!(fs::read_to_string(&out).unwrap().starts_with("x\tdensity\n"));
    }

    #[test]
    fn test_analyze_from_request_file() {
        let mut request = NamedTempFile::new().unwrap();
        write!(
            request,
            r#"{{"prior_wins": 5, "prior_losses": 5, "observed_wins": 3, "observed_losses": 2, "confidence": 0.8}}"#
        )
        .unwrap();
        let args = parse(&[
            "winprob",
            "analyze",
            "--request",
            request.path().to_str().unwrap(),
        ]);
        let text = run(&args).unwrap();
        assert!(text.contains("alpha\t8"));
        assert!(text.contains("beta\t7"));
        assert!(text.contains("confidence\t0.80"));
    }

    #[test]
    fn test_analyze_rejects_negative_request() {
        let mut request = NamedTempFile::new().unwrap();
        write!(
            request,
            r#"{{"prior_wins": -1, "prior_losses": 5, "observed_wins": 0, "observed_losses": 0, "confidence": 0.95}}"#
        )
        .unwrap();
        let args = parse(&["winprob", "analyze", "--request", request.path().to_str().unwrap()]);
        let err = run(&args).unwrap_err();
        assert_eq!(error_message(&err), "prior wins must not be negative, got -1");
    }

    #[test]
    fn test_update_priors_and_levels() {
        let args = parse(&["winprob", "update-priors", "--observed-wins", "3", "--observed-losses", "2"]);
        assert_eq!(
            run(&args).unwrap(),
            "prior_wins\t8\nprior_losses\t7\nobserved_wins\t0\nobserved_losses\t0"
        );
        let args = parse(&["winprob", "levels"]);
        assert_eq!(run(&args).unwrap(), "0.80\n0.90\n0.95\n0.99");
    }
}
