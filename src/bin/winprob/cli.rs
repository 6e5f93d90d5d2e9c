// src/cli.rs
use clap::{Args, Parser, Subcommand, ValueEnum};
use winprob_utils::confidence::ConfidenceLevel;
use winprob_utils::count::parse_count;
use winprob_utils::prior::PriorState;

/// Estimate the probability of winning a two-player game from win/loss history.
#[derive(Parser, Debug)]
#[command(name = "winprob", version, about = "Beta-binomial winning probability")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(
        value_enum,
        long,
        global = true,
        default_value = "normal",
        value_name = "VERBOSITY",
        help = "Verbosity level"
    )]
    pub verbosity: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Posterior curve and confidence bounds for the current counts
    Analyze(AnalyzeArgs),
    /// Fold observed counts into the priors and reset the observed counts
    UpdatePriors(UpdateArgs),
    /// List the selectable confidence levels
    Levels,
}

#[derive(Args, Debug)]
pub struct CountArgs {
    #[arg(long, default_value = "5", value_parser = parse_count, help = "Wins before the current batch")]
    pub prior_wins: u64,

    #[arg(long, default_value = "5", value_parser = parse_count, help = "Losses before the current batch")]
    pub prior_losses: u64,

    #[arg(long, default_value = "0", value_parser = parse_count, help = "Wins in the current batch")]
    pub observed_wins: u64,

    #[arg(long, default_value = "0", value_parser = parse_count, help = "Losses in the current batch")]
    pub observed_losses: u64,
}

impl CountArgs {
    pub fn state(&self) -> PriorState {
        PriorState::new(
            self.prior_wins,
            self.prior_losses,
            self.observed_wins,
            self.observed_losses,
        )
    }
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub counts: CountArgs,

    #[arg(
        long,
        short,
        default_value = "0.95",
        value_name = "LEVEL",
        help = "Confidence level: 0.80, 0.90, 0.95 or 0.99"
    )]
    pub confidence: ConfidenceLevel,

    #[arg(value_enum, long, short, default_value = "table", help = "Output format")]
    pub format: OutputFormat,

    #[arg(
        long,
        short,
        value_name = "OUT",
        help = "Write the density curve as a tab-separated file"
    )]
    pub out: Option<String>,

    #[arg(
        long,
        value_name = "REQUEST",
        help = "JSON file with the four counts and the confidence level; replaces the count flags"
    )]
    pub request: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    #[command(flatten)]
    pub counts: CountArgs,

    #[arg(value_enum, long, short, default_value = "table", help = "Output format")]
    pub format: OutputFormat,
}

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Verbose,
    Normal,
    Silent,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Verbose => write!(f, "verbose"),
            LogLevel::Normal => write!(f, "normal"),
            LogLevel::Silent => write!(f, "silent"),
        }
    }
}
