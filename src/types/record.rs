use serde::{Deserialize, Serialize};

/// Highest-first would be convenient for display, but the enum is declared
/// lowest-first so the derived `Ord` agrees with the point table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(from = "String", into = "String")]
pub enum EducationLevel {
    #[default]
    NoInformation,
    CompletedPrimary,
    IncompleteSecondary,
    CompletedSecondary,
    IncompleteTechnical,
    CompletedTechnical,
    IncompleteUniversity,
    CompletedUniversity,
    ProfessionalDegree,
    Masters,
    Doctorate,
}

impl EducationLevel {
    /// Maps a raw label to a level. Unrecognized labels resolve to
    /// `NoInformation` so that dirty upstream data never aborts a scoring run.
    pub fn from_label(raw: &str) -> Self {
        match normalize_label(raw).as_str() {
            "doctorate" => Self::Doctorate,
            "masters" => Self::Masters,
            "professional-degree" => Self::ProfessionalDegree,
            "completed-university" => Self::CompletedUniversity,
            "incomplete-university" => Self::IncompleteUniversity,
            "completed-technical" => Self::CompletedTechnical,
            "incomplete-technical" => Self::IncompleteTechnical,
            "completed-secondary" => Self::CompletedSecondary,
            "incomplete-secondary" => Self::IncompleteSecondary,
            "completed-primary" => Self::CompletedPrimary,
            _ => Self::NoInformation,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Doctorate => "doctorate",
            Self::Masters => "masters",
            Self::ProfessionalDegree => "professional-degree",
            Self::CompletedUniversity => "completed-university",
            Self::IncompleteUniversity => "incomplete-university",
            Self::CompletedTechnical => "completed-technical",
            Self::IncompleteTechnical => "incomplete-technical",
            Self::CompletedSecondary => "completed-secondary",
            Self::IncompleteSecondary => "incomplete-secondary",
            Self::CompletedPrimary => "completed-primary",
            Self::NoInformation => "no-information",
        }
    }
}

impl From<String> for EducationLevel {
    fn from(raw: String) -> Self {
        Self::from_label(&raw)
    }
}

impl From<EducationLevel> for String {
    fn from(level: EducationLevel) -> Self {
        level.label().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoleType {
    ElectedHigh,
    ElectedMedium,
    PublicExecutiveHigh,
    PublicExecutiveMedium,
    PrivateExecutiveHigh,
    PrivateExecutiveMedium,
    /// Lowest-relevance tier; doubles as the fallback for unknown labels.
    #[default]
    TechnicalProfessional,
    Academic,
    International,
    PartyOfficial,
}

impl RoleType {
    pub fn from_label(raw: &str) -> Self {
        match normalize_label(raw).as_str() {
            "elected-high" => Self::ElectedHigh,
            "elected-medium" => Self::ElectedMedium,
            "public-executive-high" => Self::PublicExecutiveHigh,
            "public-executive-medium" => Self::PublicExecutiveMedium,
            "private-executive-high" => Self::PrivateExecutiveHigh,
            "private-executive-medium" => Self::PrivateExecutiveMedium,
            "academic" => Self::Academic,
            "international" => Self::International,
            "party-official" => Self::PartyOfficial,
            _ => Self::TechnicalProfessional,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ElectedHigh => "elected-high",
            Self::ElectedMedium => "elected-medium",
            Self::PublicExecutiveHigh => "public-executive-high",
            Self::PublicExecutiveMedium => "public-executive-medium",
            Self::PrivateExecutiveHigh => "private-executive-high",
            Self::PrivateExecutiveMedium => "private-executive-medium",
            Self::TechnicalProfessional => "technical-professional",
            Self::Academic => "academic",
            Self::International => "international",
            Self::PartyOfficial => "party-official",
        }
    }
}

impl From<String> for RoleType {
    fn from(raw: String) -> Self {
        Self::from_label(&raw)
    }
}

impl From<RoleType> for String {
    fn from(role: RoleType) -> Self {
        role.label().to_string()
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(from = "String", into = "String")]
pub enum SeniorityLevel {
    #[default]
    IndividualContributor,
    Coordinator,
    Supervisor,
    Management,
    Direction,
}

impl SeniorityLevel {
    pub fn from_label(raw: &str) -> Self {
        match normalize_label(raw).as_str() {
            "direction" => Self::Direction,
            "management" => Self::Management,
            "supervisor" => Self::Supervisor,
            "coordinator" => Self::Coordinator,
            _ => Self::IndividualContributor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Direction => "direction",
            Self::Management => "management",
            Self::Supervisor => "supervisor",
            Self::Coordinator => "coordinator",
            Self::IndividualContributor => "individual-contributor",
        }
    }
}

impl From<String> for SeniorityLevel {
    fn from(raw: String) -> Self {
        Self::from_label(&raw)
    }
}

impl From<SeniorityLevel> for String {
    fn from(level: SeniorityLevel) -> Self {
        level.label().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CivilSentenceKind {
    Violence,
    AlimonyDefault,
    Labor,
    /// Smallest penalty; unknown kinds fall back here so a mislabeled
    /// sentence is never penalized harder than the data supports.
    #[default]
    Contractual,
}

impl CivilSentenceKind {
    pub fn from_label(raw: &str) -> Self {
        match normalize_label(raw).as_str() {
            "violence" => Self::Violence,
            "alimony-default" => Self::AlimonyDefault,
            "labor" => Self::Labor,
            _ => Self::Contractual,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Violence => "violence",
            Self::AlimonyDefault => "alimony-default",
            Self::Labor => "labor",
            Self::Contractual => "contractual",
        }
    }
}

impl From<String> for CivilSentenceKind {
    fn from(raw: String) -> Self {
        Self::from_label(&raw)
    }
}

impl From<CivilSentenceKind> for String {
    fn from(kind: CivilSentenceKind) -> Self {
        kind.label().to_string()
    }
}

/// Office the candidate is running for. Selects the relevance table used by
/// the experience scorer; codes without a dedicated table use `Generic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TargetOffice {
    President,
    VicePresident,
    Senator,
    Deputy,
    Governor,
    Mayor,
    #[default]
    Generic,
}

impl TargetOffice {
    pub fn from_code(code: &str) -> Self {
        match normalize_label(code).as_str() {
            "president" => Self::President,
            "vice-president" => Self::VicePresident,
            "senator" => Self::Senator,
            "deputy" => Self::Deputy,
            "governor" => Self::Governor,
            "mayor" => Self::Mayor,
            _ => Self::Generic,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::President => "president",
            Self::VicePresident => "vice-president",
            Self::Senator => "senator",
            Self::Deputy => "deputy",
            Self::Governor => "governor",
            Self::Mayor => "mayor",
            Self::Generic => "generic",
        }
    }
}

fn normalize_label(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['_', ' '], "-")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationDetail {
    #[serde(default)]
    pub level: EducationLevel,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub is_verified: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub role_type: RoleType,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub start_year: Option<i32>,
    /// Absent means the role is ongoing as of the reference year.
    #[serde(default)]
    pub end_year: Option<i32>,
    #[serde(default)]
    pub is_leadership: bool,
    #[serde(default)]
    pub seniority_level: SeniorityLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PenalSentence {
    #[serde(default)]
    pub description: String,
    /// Final, non-appealable sentences carry the full penalty.
    #[serde(default)]
    pub is_firm: bool,
    #[serde(default)]
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CivilSentence {
    #[serde(rename = "type", default)]
    pub kind: CivilSentenceKind,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub year: Option<i32>,
}

/// Fully-typed candidate record, assembled by an external mapping layer and
/// consumed exactly once per scoring call. Missing arrays and signals default
/// to their conservative zero values so a sparse record still scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub education: Vec<EducationDetail>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub penal_sentences: Vec<PenalSentence>,
    #[serde(default)]
    pub civil_sentences: Vec<CivilSentence>,
    #[serde(default)]
    pub party_resignation_count: i32,
    #[serde(default)]
    pub declaration_completeness: f64,
    #[serde(default)]
    pub declaration_consistency: f64,
    #[serde(default)]
    pub assets_quality: f64,
    #[serde(default)]
    pub verification_level: f64,
    #[serde(default)]
    pub coverage_level: f64,
}
