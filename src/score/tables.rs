//! Every business-rule constant in one place. The scorers stay thin and the
//! rules stay auditable: changing a point value never touches control flow.

use crate::types::record::{CivilSentenceKind, EducationLevel, RoleType, SeniorityLevel, TargetOffice};

pub const EDUCATION_CAP: f64 = 30.0;
pub const DEPTH_CAP: f64 = 8.0;
pub const DEPTH_UNVERIFIED_CAP: f64 = 4.0;
pub const DEPTH_VERIFIED_STEP: f64 = 3.0;
pub const DEPTH_UNVERIFIED_STEP: f64 = 1.0;

pub const EDUCATION_LEVEL_POINTS: [(EducationLevel, f64); 11] = [
    (EducationLevel::Doctorate, 22.0),
    (EducationLevel::Masters, 18.0),
    (EducationLevel::ProfessionalDegree, 16.0),
    (EducationLevel::CompletedUniversity, 14.0),
    (EducationLevel::IncompleteUniversity, 12.0),
    (EducationLevel::CompletedTechnical, 10.0),
    (EducationLevel::IncompleteTechnical, 8.0),
    (EducationLevel::CompletedSecondary, 6.0),
    (EducationLevel::IncompleteSecondary, 4.0),
    (EducationLevel::CompletedPrimary, 2.0),
    (EducationLevel::NoInformation, 0.0),
];

pub fn education_points(level: EducationLevel) -> f64 {
    EDUCATION_LEVEL_POINTS
        .iter()
        .find(|(candidate, _)| *candidate == level)
        .map(|(_, points)| *points)
        .unwrap_or(0.0)
}

pub const TENURE_CAP: f64 = 25.0;

/// Ordered bands: first row whose minimum the tenure reaches wins. Lower
/// edges are inclusive (2 years already earns the 2-4 band).
pub const TENURE_BANDS: [(u32, f64); 6] = [
    (15, 25.0),
    (11, 20.0),
    (8, 16.0),
    (5, 12.0),
    (2, 6.0),
    (0, 0.0),
];

pub fn tenure_points(years: u32) -> f64 {
    TENURE_BANDS
        .iter()
        .find(|(min_years, _)| years >= *min_years)
        .map(|(_, points)| *points)
        .unwrap_or(0.0)
}

/// Careers longer than this are treated as data errors and clamped, keeping
/// the year-union loop bounded for arbitrary input.
pub const MAX_CAREER_YEARS: i64 = 80;

pub const RELEVANT_CAP_TENTHS: u64 = 250;

/// Points-per-year of role relevance, stored in tenths so per-entry
/// contributions sum in integers and the result is identical for any
/// ordering of the experience array.
pub struct RelevanceTable {
    pub name: &'static str,
    rows: [(RoleType, u64); 10],
}

impl RelevanceTable {
    pub fn tenths_per_year(&self, role: RoleType) -> u64 {
        self.rows
            .iter()
            .find(|(candidate, _)| *candidate == role)
            .map(|(_, tenths)| *tenths)
            .unwrap_or(0)
    }
}

pub static PRESIDENTIAL_RELEVANCE: RelevanceTable = RelevanceTable {
    name: "presidential",
    rows: [
        (RoleType::ElectedHigh, 30),
        (RoleType::PublicExecutiveHigh, 30),
        (RoleType::PrivateExecutiveHigh, 28),
        (RoleType::ElectedMedium, 22),
        (RoleType::PublicExecutiveMedium, 20),
        (RoleType::International, 18),
        (RoleType::PrivateExecutiveMedium, 16),
        (RoleType::Academic, 14),
        (RoleType::TechnicalProfessional, 12),
        (RoleType::PartyOfficial, 10),
    ],
};

pub static LEGISLATIVE_RELEVANCE: RelevanceTable = RelevanceTable {
    name: "legislative",
    rows: [
        (RoleType::ElectedHigh, 30),
        (RoleType::ElectedMedium, 26),
        (RoleType::PublicExecutiveHigh, 24),
        (RoleType::PrivateExecutiveHigh, 20),
        (RoleType::Academic, 18),
        (RoleType::PublicExecutiveMedium, 18),
        (RoleType::International, 16),
        (RoleType::TechnicalProfessional, 14),
        (RoleType::PrivateExecutiveMedium, 14),
        (RoleType::PartyOfficial, 14),
    ],
};

pub static EXECUTIVE_LOCAL_RELEVANCE: RelevanceTable = RelevanceTable {
    name: "executive-local",
    rows: [
        (RoleType::PublicExecutiveHigh, 30),
        (RoleType::ElectedHigh, 26),
        (RoleType::PrivateExecutiveHigh, 26),
        (RoleType::PublicExecutiveMedium, 24),
        (RoleType::ElectedMedium, 22),
        (RoleType::PrivateExecutiveMedium, 18),
        (RoleType::TechnicalProfessional, 14),
        (RoleType::Academic, 12),
        (RoleType::International, 12),
        (RoleType::PartyOfficial, 10),
    ],
};

pub static GENERIC_RELEVANCE: RelevanceTable = RelevanceTable {
    name: "generic",
    rows: [
        (RoleType::ElectedHigh, 24),
        (RoleType::PublicExecutiveHigh, 24),
        (RoleType::PrivateExecutiveHigh, 22),
        (RoleType::ElectedMedium, 20),
        (RoleType::PublicExecutiveMedium, 18),
        (RoleType::PrivateExecutiveMedium, 16),
        (RoleType::TechnicalProfessional, 14),
        (RoleType::Academic, 14),
        (RoleType::International, 14),
        (RoleType::PartyOfficial, 10),
    ],
};

pub fn relevance_table(office: TargetOffice) -> &'static RelevanceTable {
    match office {
        TargetOffice::President | TargetOffice::VicePresident => &PRESIDENTIAL_RELEVANCE,
        TargetOffice::Senator | TargetOffice::Deputy => &LEGISLATIVE_RELEVANCE,
        TargetOffice::Governor | TargetOffice::Mayor => &EXECUTIVE_LOCAL_RELEVANCE,
        TargetOffice::Generic => &GENERIC_RELEVANCE,
    }
}

pub const SENIORITY_POINTS: [(SeniorityLevel, f64); 5] = [
    (SeniorityLevel::Direction, 14.0),
    (SeniorityLevel::Management, 10.0),
    (SeniorityLevel::Supervisor, 7.0),
    (SeniorityLevel::Coordinator, 4.0),
    (SeniorityLevel::IndividualContributor, 0.0),
];

pub fn seniority_points(level: SeniorityLevel) -> f64 {
    SENIORITY_POINTS
        .iter()
        .find(|(candidate, _)| *candidate == level)
        .map(|(_, points)| *points)
        .unwrap_or(0.0)
}

pub const STABILITY_CAP: f64 = 6.0;

/// Cumulative years in leadership-flagged roles. A single short stint lands
/// in the 1-2 band, near the floor.
pub const STABILITY_BANDS: [(u32, f64); 5] = [
    (10, 6.0),
    (6, 4.0),
    (3, 2.0),
    (1, 1.0),
    (0, 0.0),
];

pub fn stability_points(years: u32) -> f64 {
    STABILITY_BANDS
        .iter()
        .find(|(min_years, _)| years >= *min_years)
        .map(|(_, points)| *points)
        .unwrap_or(0.0)
}

pub const INTEGRITY_BASE: f64 = 100.0;

/// One firm sentence costs 70; two or more hit the 85 cap. Penalties never
/// stack past the cap, however long the sentence list grows.
pub const FIRM_PENALTY_SINGLE: f64 = 70.0;
pub const FIRM_PENALTY_CAP: f64 = 85.0;

/// Pending or appealed sentences carry a reduced, separately-tracked
/// penalty, strictly below the firm one.
pub const NON_FIRM_PENALTY_SINGLE: f64 = 25.0;
pub const NON_FIRM_PENALTY_CAP: f64 = 40.0;

/// Firm and non-firm combined never exceed the firm cap.
pub const PENAL_PENALTY_CAP: f64 = 85.0;

pub const CIVIL_PENALTIES: [(CivilSentenceKind, f64); 4] = [
    (CivilSentenceKind::Violence, 50.0),
    (CivilSentenceKind::AlimonyDefault, 35.0),
    (CivilSentenceKind::Labor, 25.0),
    (CivilSentenceKind::Contractual, 15.0),
];

pub fn civil_penalty(kind: CivilSentenceKind) -> f64 {
    CIVIL_PENALTIES
        .iter()
        .find(|(candidate, _)| *candidate == kind)
        .map(|(_, penalty)| *penalty)
        .unwrap_or(0.0)
}

/// Tiered, not linear: serial party-hopping saturates at 15 points.
pub const RESIGNATION_BANDS: [(u32, f64); 4] = [
    (4, 15.0),
    (2, 10.0),
    (1, 5.0),
    (0, 0.0),
];

pub fn resignation_penalty(count: u32) -> f64 {
    RESIGNATION_BANDS
        .iter()
        .find(|(min_count, _)| count >= *min_count)
        .map(|(_, penalty)| *penalty)
        .unwrap_or(0.0)
}

pub const TRANSPARENCY_COMPLETENESS_WEIGHT: f64 = 0.35;
pub const TRANSPARENCY_CONSISTENCY_WEIGHT: f64 = 0.35;
pub const TRANSPARENCY_ASSETS_WEIGHT: f64 = 0.30;

pub const CONFIDENCE_VERIFICATION_WEIGHT: f64 = 0.6;
pub const CONFIDENCE_COVERAGE_WEIGHT: f64 = 0.4;
