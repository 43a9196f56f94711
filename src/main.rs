mod cli;
mod config;
mod error;
mod load;
mod report;
mod score;
mod types;

use crate::error::ScoreError;
use crate::score::ScoreOptions;
use crate::types::config::{builtin_presets, CiviscoreConfig, WeightSpec, WeightVector};
use crate::types::record::TargetOffice;
use crate::types::report::{RankingEntry, RankingReport};
use chrono::{Datelike, Utc};
use clap::Parser;
use std::collections::BTreeMap;
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, ScoreError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let loaded = config::load_config(Path::new("."))?;
    if loaded.is_some() {
        tracing::info!("configuration loaded from {}", config::DEFAULT_CONFIG_FILE);
    }
    let presets = loaded
        .as_ref()
        .map(CiviscoreConfig::preset_table)
        .unwrap_or_else(builtin_presets);
    let reference_year = loaded
        .as_ref()
        .and_then(|cfg| cfg.scoring.as_ref())
        .and_then(|scoring| scoring.reference_year)
        .unwrap_or_else(|| Utc::now().year());

    match cli.command {
        cli::Commands::Score(cmd) => {
            let options =
                score_options(presets, &cmd.presets, cmd.weights.as_deref(), reference_year)?;
            let office = TargetOffice::from_code(&cmd.office);

            let loaded_record = load::load_record(&cmd.record)?;
            let mut score_report = score::compute(&loaded_record.record, office, &options)?;
            score_report.record_sha256 = Some(loaded_record.sha256);

            let rendered = report::render(&score_report, output_format(cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Batch(cmd) => {
            if !cmd.dir.exists() {
                return Err(ScoreError::RecordNotFound(cmd.dir.display().to_string()));
            }
            let options =
                score_options(presets, &cmd.presets, cmd.weights.as_deref(), reference_year)?;
            let ranked_by = match options.requested.first() {
                Some(WeightSpec::Named(name)) => name.clone(),
                _ => "custom".to_string(),
            };
            let office = TargetOffice::from_code(&cmd.office);

            let paths = load::discover_records(&cmd.dir);
            if paths.is_empty() {
                println!("batch: no records found under {}", cmd.dir.display());
                return Ok(exit_code::SUCCESS);
            }

            let mut scored = Vec::new();
            let mut failures = 0usize;
            for path in &paths {
                let result = load::load_record(path)
                    .and_then(|loaded| {
                        score::compute(&loaded.record, office, &options)
                            .map(|mut report| {
                                report.record_sha256 = Some(loaded.sha256);
                                report
                            })
                    });
                match result {
                    Ok(score_report) => scored.push(score_report),
                    // Weight errors are caller bugs and abort the batch;
                    // unreadable records only cost a warning.
                    Err(error @ ScoreError::InvalidWeights(_))
                    | Err(error @ ScoreError::UnknownPreset(_)) => return Err(error),
                    Err(error) => {
                        tracing::warn!(path = %path.display(), "skipping record: {error}");
                        eprintln!("warning: skipping {}: {}", path.display(), error);
                        failures += 1;
                    }
                }
            }

            scored.sort_by(|a, b| {
                let left = a.composite(&ranked_by).map(|c| c.score).unwrap_or(0.0);
                let right = b.composite(&ranked_by).map(|c| c.score).unwrap_or(0.0);
                right
                    .partial_cmp(&left)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| a.candidate.cmp(&b.candidate))
            });

            let entries = scored
                .iter()
                .enumerate()
                .map(|(index, score_report)| RankingEntry {
                    rank: index + 1,
                    candidate: score_report.candidate.clone(),
                    score: score_report
                        .composite(&ranked_by)
                        .map(|c| c.score)
                        .unwrap_or(0.0),
                    competence: score_report.competence.total,
                    integrity: score_report.integrity.total,
                    transparency: score_report.transparency.total,
                    confidence: score_report.confidence.total,
                    record_sha256: score_report.record_sha256.clone(),
                })
                .collect();
            let ranking = RankingReport {
                office: office.label().to_string(),
                ranked_by,
                entries,
            };

            let rendered = report::render_ranking(&ranking, output_format(cmd.format))?;
            println!("{rendered}");

            if failures > 0 {
                eprintln!("warning: {failures} record(s) skipped");
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Presets(_) => {
            println!("presets:");
            for (name, weights) in &presets {
                println!(
                    "- {}: competence {:.2}, integrity {:.2}, transparency {:.2}",
                    name, weights.competence, weights.integrity, weights.transparency
                );
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

/// The composites to compute: an optional custom vector first (batch ranks by
/// it), then any named presets; with nothing requested, every preset in the
/// table.
fn score_options(
    presets: BTreeMap<String, WeightVector>,
    preset_names: &[String],
    weights: Option<&str>,
    reference_year: i32,
) -> Result<ScoreOptions, ScoreError> {
    if preset_names.is_empty() && weights.is_none() {
        return Ok(ScoreOptions::all_presets(presets, reference_year));
    }
    let mut requested = Vec::new();
    if let Some(raw) = weights {
        requested.push(WeightSpec::Custom(WeightVector::from_csv(raw)?));
    }
    requested.extend(preset_names.iter().cloned().map(WeightSpec::Named));
    Ok(ScoreOptions {
        presets,
        requested,
        reference_year,
    })
}

fn output_format(format: cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
