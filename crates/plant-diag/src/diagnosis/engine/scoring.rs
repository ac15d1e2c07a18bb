use std::collections::HashSet;

use super::weights::ScoringWeights;
use crate::diagnosis::domain::{DiagnosisInput, Problem, ProblemId};

/// Fixed reason attached when the susceptibility matrix contributed.
pub(crate) const MATRIX_REASON: &str = "Common issue for this plant species";

/// Prefix shared by every symptom-match reason; the explanation renderer
/// recovers symptom names from it.
pub(crate) const SYMPTOM_REASON_PREFIX: &str = "Matches symptom: ";

pub(crate) fn symptom_reason(name: &str) -> String {
    format!("{SYMPTOM_REASON_PREFIX}\"{name}\"")
}

pub(crate) struct ProblemScore {
    pub score: f64,
    pub reasons: Vec<String>,
}

/// Accumulate the weighted factors for one candidate problem.
///
/// Reasons are appended in evaluation order: the matrix reason first when
/// the plant is susceptible, then one reason per matched symptom in
/// submission order. Duplicate reported symptoms match (and explain)
/// multiple times on purpose.
pub(crate) fn score_problem(
    problem: &Problem,
    susceptible: &HashSet<&ProblemId>,
    input: &DiagnosisInput,
    weights: &ScoringWeights,
) -> ProblemScore {
    let mut score = 0.0;
    let mut reasons = Vec::new();

    // Species prior, scaled by how sure the caller is about the plant id.
    if susceptible.contains(&problem.id) {
        score += weights.matrix_boost * input.plant_confidence;
        reasons.push(MATRIX_REASON.to_string());
    }

    let signature: HashSet<&str> = problem.common_symptoms.iter().map(String::as_str).collect();

    let mut match_count = 0usize;
    for symptom in &input.symptoms {
        if signature.contains(symptom.name.as_str()) {
            match_count += 1;
            reasons.push(symptom_reason(&symptom.name));
        }
        // A symptom arguing against a problem would be checked here; the
        // current knowledge base carries no contradiction data.
    }

    // Coverage: share of the problem's defining symptoms that were observed.
    if !problem.common_symptoms.is_empty() {
        score += weights.coverage * match_count as f64 / problem.common_symptoms.len() as f64;
    }

    // Precision: share of the reported symptoms this problem explains.
    if !input.symptoms.is_empty() {
        score += weights.precision * match_count as f64 / input.symptoms.len() as f64;
    }

    ProblemScore { score, reasons }
}
