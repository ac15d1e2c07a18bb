//! Deterministic rendering of a diagnosis result into display prose.

use super::domain::DiagnosisResult;
use super::engine::{MATRIX_REASON, SYMPTOM_REASON_PREFIX};

/// Render one result into the explanation paragraph returned to callers.
///
/// Consumes only the problem record, the rounded confidence, and the reason
/// strings, so it works equally over freshly computed and persisted results.
pub fn render_explanation(result: &DiagnosisResult) -> String {
    let matched: Vec<&str> = result
        .reasons
        .iter()
        .filter_map(|reason| reason.strip_prefix(SYMPTOM_REASON_PREFIX))
        .map(|name| name.trim_matches('"'))
        .collect();

    let mut explanation = format!(
        "We detected {} ({:.0}% match). ",
        result.problem.name,
        result.confidence * 100.0
    );

    if !matched.is_empty() {
        explanation.push_str(&format!(
            "This was indicated by the following symptoms: {}. ",
            matched.join(", ")
        ));
    }

    if result.reasons.iter().any(|reason| reason == MATRIX_REASON) {
        explanation.push_str("Additionally, it is a common issue for this type of plant. ");
    }

    explanation.push_str(&format!(
        "\n\nTypical treatment involves: {}",
        result.problem.description
    ));

    explanation
}
