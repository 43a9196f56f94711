use crate::types::report::{RankingReport, ScoreReport};

pub fn to_markdown(report: &ScoreReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("# Score Report: {}\n\n", report.candidate));
    output.push_str(&format!("Office: {}\n", report.office));
    if let Some(sha) = &report.record_sha256 {
        output.push_str(&format!("Record sha256: {sha}\n"));
    }
    output.push('\n');

    output.push_str("## Sub-scores\n\n");
    output.push_str(&format!(
        "- competence: {:.2}\n- integrity: {:.2}\n- transparency: {:.2}\n- confidence: {:.2} (informational)\n\n",
        report.competence.total,
        report.integrity.total,
        report.transparency.total,
        report.confidence.total
    ));

    output.push_str("## Competence breakdown\n\n");
    let education = &report.competence.education;
    output.push_str(&format!(
        "- education: {:.2} (level {:.2} + depth {:.2})\n",
        education.total, education.level, education.depth
    ));
    let experience = &report.competence.experience;
    output.push_str(&format!(
        "- experience: total {:.2} ({} years), relevant {:.2} (raw {:.2})\n",
        experience.total, experience.tenure_years, experience.relevant, experience.raw_relevant
    ));
    let leadership = &report.competence.leadership;
    output.push_str(&format!(
        "- leadership: {:.2} (seniority {:.2} + stability {:.2} over {} years)\n\n",
        leadership.total, leadership.seniority, leadership.stability, leadership.leadership_years
    ));

    output.push_str("## Integrity breakdown\n\n");
    let integrity = &report.integrity;
    output.push_str(&format!(
        "- penal penalty: {:.2} (firm {:.2}, non-firm {:.2})\n",
        integrity.penal_penalty, integrity.firm_penalty, integrity.non_firm_penalty
    ));
    if integrity.civil_penalties.is_empty() {
        output.push_str("- civil penalties: none\n");
    } else {
        for civil in &integrity.civil_penalties {
            output.push_str(&format!(
                "- civil penalty [{}]: {:.2}\n",
                civil.kind.label(),
                civil.penalty
            ));
        }
    }
    output.push_str(&format!(
        "- resignation penalty: {:.2}\n\n",
        integrity.resignation_penalty
    ));

    output.push_str("## Composites\n\n");
    if report.composites.is_empty() {
        output.push_str("- none requested\n");
    } else {
        for composite in &report.composites {
            output.push_str(&format!(
                "- {}: {:.2} (wC {:.2} / wI {:.2} / wT {:.2})\n",
                composite.name,
                composite.score,
                composite.weights.competence,
                composite.weights.integrity,
                composite.weights.transparency
            ));
        }
    }

    output
}

pub fn ranking_to_markdown(report: &RankingReport) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "# Candidate Ranking: {} ({})\n\n",
        report.office, report.ranked_by
    ));
    if report.entries.is_empty() {
        output.push_str("- no candidates\n");
        return output;
    }
    for entry in &report.entries {
        output.push_str(&format!(
            "{}. {} - {:.2} (C {:.2} / I {:.2} / T {:.2}, confidence {:.2})\n",
            entry.rank,
            entry.candidate,
            entry.score,
            entry.competence,
            entry.integrity,
            entry.transparency,
            entry.confidence
        ));
    }
    output
}
