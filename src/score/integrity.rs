use crate::score::tables;
use crate::types::record::{CivilSentence, PenalSentence};
use crate::types::report::{CivilPenalty, IntegrityBreakdown};

/// Starts at 100 and subtracts capped penalties. Penal penalties saturate at
/// the firm cap, civil sentences are penalized individually by kind, and
/// resignations are tiered. The floor at zero is absolute.
pub fn integrity_score(
    penal_sentences: &[PenalSentence],
    civil_sentences: &[CivilSentence],
    party_resignation_count: i32,
) -> IntegrityBreakdown {
    let firm_count = penal_sentences.iter().filter(|s| s.is_firm).count();
    let non_firm_count = penal_sentences.len() - firm_count;

    let firm_penalty = match firm_count {
        0 => 0.0,
        1 => tables::FIRM_PENALTY_SINGLE,
        _ => tables::FIRM_PENALTY_CAP,
    };
    let non_firm_penalty = match non_firm_count {
        0 => 0.0,
        1 => tables::NON_FIRM_PENALTY_SINGLE,
        _ => tables::NON_FIRM_PENALTY_CAP,
    };
    let penal_penalty = (firm_penalty + non_firm_penalty).min(tables::PENAL_PENALTY_CAP);

    let civil_penalties: Vec<CivilPenalty> = civil_sentences
        .iter()
        .map(|sentence| CivilPenalty {
            kind: sentence.kind,
            penalty: tables::civil_penalty(sentence.kind),
        })
        .collect();
    let civil_total: f64 = civil_penalties.iter().map(|penalty| penalty.penalty).sum();

    let resignation_penalty =
        tables::resignation_penalty(u32::try_from(party_resignation_count.max(0)).unwrap_or(0));

    let total = (tables::INTEGRITY_BASE - penal_penalty - civil_total - resignation_penalty)
        .clamp(0.0, 100.0);

    IntegrityBreakdown {
        base: tables::INTEGRITY_BASE,
        firm_penalty,
        non_firm_penalty,
        penal_penalty,
        civil_penalties,
        resignation_penalty,
        total,
    }
}
