mod scoring;
mod weights;

pub use weights::ScoringWeights;

pub(crate) use scoring::{MATRIX_REASON, SYMPTOM_REASON_PREFIX};

use std::sync::Arc;

use super::domain::{DiagnosisInput, DiagnosisResult};
use super::knowledge::KnowledgeBase;

/// Stateless scorer ranking knowledge-base problems against one input.
///
/// Pure and side-effect free: identical inputs against the same knowledge
/// base produce an identical result list, including order. Safe to call
/// from concurrent requests since neither the engine nor the knowledge base
/// is ever mutated.
pub struct DiagnosisEngine {
    knowledge: Arc<KnowledgeBase>,
    weights: ScoringWeights,
}

impl DiagnosisEngine {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self::with_weights(knowledge, ScoringWeights::default())
    }

    pub fn with_weights(knowledge: Arc<KnowledgeBase>, weights: ScoringWeights) -> Self {
        Self { knowledge, weights }
    }

    /// Score every known problem against the input and return the surviving
    /// candidates ranked by confidence, descending.
    ///
    /// Problems whose clamped score is not strictly positive are omitted.
    /// Equal confidences keep the knowledge base's problem order; the sort
    /// is stable so tests can assert exact output order.
    pub fn diagnose(&self, input: &DiagnosisInput) -> Vec<DiagnosisResult> {
        let susceptible = self.knowledge.susceptible_problems(&input.plant_id);

        let mut results = Vec::new();
        for problem in self.knowledge.problems() {
            let scored = scoring::score_problem(problem, &susceptible, input, &self.weights);

            let clamped = scored.score.clamp(0.0, 1.0);
            if clamped <= 0.0 {
                continue;
            }

            results.push(DiagnosisResult {
                problem: problem.clone(),
                confidence: round_confidence(clamped),
                reasons: scored.reasons,
            });
        }

        results.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        results
    }
}

/// Round half-up to two decimals so equal scores compare exactly.
fn round_confidence(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}
