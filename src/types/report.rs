use crate::types::config::WeightVector;
use crate::types::record::CivilSentenceKind;
use serde::Serialize;

/// Full audit trail for one candidate: every intermediate number the engine
/// used, the four sub-scores, and the requested composites.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub candidate: String,
    pub office: String,
    pub engine_version: String,
    /// SHA-256 of the raw record bytes when the record came from a file.
    pub record_sha256: Option<String>,
    pub competence: CompetenceBreakdown,
    pub integrity: IntegrityBreakdown,
    pub transparency: TransparencyBreakdown,
    pub confidence: ConfidenceBreakdown,
    pub composites: Vec<CompositeScore>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompetenceBreakdown {
    pub education: EducationBreakdown,
    pub experience: ExperienceBreakdown,
    pub leadership: LeadershipBreakdown,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationBreakdown {
    pub level: f64,
    pub depth: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceBreakdown {
    /// Distinct calendar years covered by any role; overlaps count once.
    pub tenure_years: u32,
    pub total: f64,
    /// Relevance-weighted points before the cap, kept for the audit trail.
    pub raw_relevant: f64,
    pub relevant: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeadershipBreakdown {
    pub seniority: f64,
    pub leadership_years: u32,
    pub stability: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct IntegrityBreakdown {
    pub base: f64,
    pub firm_penalty: f64,
    /// Pending or appealed sentences; tracked apart from the firm penalty.
    pub non_firm_penalty: f64,
    pub penal_penalty: f64,
    pub civil_penalties: Vec<CivilPenalty>,
    pub resignation_penalty: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CivilPenalty {
    pub kind: CivilSentenceKind,
    pub penalty: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransparencyBreakdown {
    pub completeness: f64,
    pub consistency: f64,
    pub assets: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfidenceBreakdown {
    pub verification: f64,
    pub coverage: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompositeScore {
    pub name: String,
    pub weights: WeightVector,
    pub score: f64,
}

impl ScoreReport {
    /// Composite looked up by name; `batch` ranks on the first requested one.
    pub fn composite(&self, name: &str) -> Option<&CompositeScore> {
        self.composites.iter().find(|c| c.name == name)
    }
}

/// Ranked output of a `batch` run.
#[derive(Debug, Clone, Serialize)]
pub struct RankingReport {
    pub office: String,
    pub ranked_by: String,
    pub entries: Vec<RankingEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankingEntry {
    pub rank: usize,
    pub candidate: String,
    pub score: f64,
    pub competence: f64,
    pub integrity: f64,
    pub transparency: f64,
    pub confidence: f64,
    pub record_sha256: Option<String>,
}
