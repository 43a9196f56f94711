use crate::error::ScoreError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Weight sum must land within this distance of 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

/// Documented bounds for each component of a weight vector.
pub const COMPETENCE_WEIGHT_RANGE: (f64, f64) = (0.20, 0.75);
pub const INTEGRITY_WEIGHT_RANGE: (f64, f64) = (0.20, 0.75);
pub const TRANSPARENCY_WEIGHT_RANGE: (f64, f64) = (0.05, 0.20);

/// A {competence, integrity, transparency} weight vector. Confidence is
/// informational metadata and deliberately has no weight here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightVector {
    pub competence: f64,
    pub integrity: f64,
    pub transparency: f64,
}

impl WeightVector {
    pub fn new(competence: f64, integrity: f64, transparency: f64) -> Self {
        Self {
            competence,
            integrity,
            transparency,
        }
    }

    pub fn sum(&self) -> f64 {
        self.competence + self.integrity + self.transparency
    }

    /// Rejects vectors that would silently miscompute a ranking: wrong sum or
    /// components outside the documented bounds. `origin` names the vector in
    /// the error message (a preset name or "custom").
    pub fn validate(&self, origin: &str) -> Result<(), ScoreError> {
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ScoreError::InvalidWeights(format!(
                "{origin}: weights must sum to 1.0 (found {sum:.3})"
            )));
        }
        for (label, value, (low, high)) in [
            ("competence", self.competence, COMPETENCE_WEIGHT_RANGE),
            ("integrity", self.integrity, INTEGRITY_WEIGHT_RANGE),
            ("transparency", self.transparency, TRANSPARENCY_WEIGHT_RANGE),
        ] {
            if !(low..=high).contains(&value) {
                return Err(ScoreError::InvalidWeights(format!(
                    "{origin}: {label} weight {value:.3} outside [{low:.2}, {high:.2}]"
                )));
            }
        }
        Ok(())
    }

    /// Parses a `"wC,wI,wT"` triple as supplied on the command line.
    pub fn from_csv(raw: &str) -> Result<Self, ScoreError> {
        let parts = raw.split(',').map(str::trim).collect::<Vec<_>>();
        if parts.len() != 3 {
            return Err(ScoreError::InvalidWeights(format!(
                "expected three comma-separated weights, found {}",
                parts.len()
            )));
        }
        let mut values = [0.0_f64; 3];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| {
                ScoreError::InvalidWeights(format!("'{part}' is not a number"))
            })?;
        }
        Ok(Self::new(values[0], values[1], values[2]))
    }
}

/// A requested composite: either a named preset or a caller-supplied vector.
#[derive(Debug, Clone, PartialEq)]
pub enum WeightSpec {
    Named(String),
    Custom(WeightVector),
}

pub const PRESET_BALANCED: &str = "balanced";
pub const PRESET_MERIT_FIRST: &str = "merit-first";
pub const PRESET_INTEGRITY_FIRST: &str = "integrity-first";

/// The three named presets. Returned as owned data so a config overlay (or a
/// test) can extend or replace entries without touching global state.
pub fn builtin_presets() -> BTreeMap<String, WeightVector> {
    BTreeMap::from([
        (
            PRESET_BALANCED.to_string(),
            WeightVector::new(0.45, 0.45, 0.10),
        ),
        (
            PRESET_MERIT_FIRST.to_string(),
            WeightVector::new(0.60, 0.30, 0.10),
        ),
        (
            PRESET_INTEGRITY_FIRST.to_string(),
            WeightVector::new(0.30, 0.60, 0.10),
        ),
    ])
}

#[derive(Debug, Clone, Deserialize)]
pub struct CiviscoreConfig {
    pub scoring: Option<ScoringConfig>,
    pub presets: Option<BTreeMap<String, WeightVector>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Pins the year used to close ongoing roles. Defaults to the current
    /// calendar year at the CLI boundary when absent.
    pub reference_year: Option<i32>,
}

impl CiviscoreConfig {
    pub fn validate(&self) -> Result<(), ScoreError> {
        if let Some(presets) = &self.presets {
            for (name, vector) in presets {
                if name.trim().is_empty() {
                    return Err(ScoreError::ConfigParse(
                        "presets keys must be non-empty names".to_string(),
                    ));
                }
                vector
                    .validate(&format!("presets.{name}"))
                    .map_err(|e| ScoreError::ConfigParse(e.to_string()))?;
            }
        }
        if let Some(year) = self.scoring.as_ref().and_then(|s| s.reference_year) {
            if !(1900..=2200).contains(&year) {
                return Err(ScoreError::ConfigParse(format!(
                    "scoring.reference_year out of range: {year}"
                )));
            }
        }
        Ok(())
    }

    /// Builtin presets overlaid with any config-defined ones. A config entry
    /// reusing a builtin name replaces it.
    pub fn preset_table(&self) -> BTreeMap<String, WeightVector> {
        let mut table = builtin_presets();
        if let Some(presets) = &self.presets {
            for (name, vector) in presets {
                table.insert(name.clone(), *vector);
            }
        }
        table
    }
}
