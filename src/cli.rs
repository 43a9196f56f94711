use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "civiscore",
    version,
    about = "Transparent, auditable scoring of political candidate records"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Score(ScoreCommand),
    Batch(BatchCommand),
    Presets(PresetsCommand),
}

/// Score a single candidate record file.
#[derive(Args)]
pub struct ScoreCommand {
    /// Path to a candidate record (JSON)
    pub record: PathBuf,

    /// Target office code; codes without a dedicated relevance table use the
    /// generic one
    #[arg(short, long, default_value = "generic")]
    pub office: String,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,

    /// Preset composite(s) to compute; defaults to every configured preset
    #[arg(short, long = "preset")]
    pub presets: Vec<String>,

    /// Custom weight vector as "wC,wI,wT"; computed alongside any presets
    #[arg(long)]
    pub weights: Option<String>,
}

/// Score every *.json record under a directory and rank the candidates.
/// Ranking uses the first requested composite.
#[derive(Args)]
pub struct BatchCommand {
    /// Directory containing candidate record files
    pub dir: PathBuf,

    #[arg(short, long, default_value = "generic")]
    pub office: String,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,

    /// Preset composite(s) to compute; defaults to every configured preset
    #[arg(short, long = "preset")]
    pub presets: Vec<String>,

    /// Custom weight vector as "wC,wI,wT"; when given, ranking uses it
    #[arg(long)]
    pub weights: Option<String>,
}

/// List the active preset table (builtin plus config overlays).
#[derive(Args)]
pub struct PresetsCommand {}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
