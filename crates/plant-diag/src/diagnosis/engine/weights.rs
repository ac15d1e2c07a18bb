use serde::{Deserialize, Serialize};

/// Weighting scheme applied to the scoring factors.
///
/// The defaults are the production constants. Matrix, coverage, and
/// precision can sum past 1.0 in combination, which is why the engine clamps
/// the composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Weight of the species-susceptibility prior, scaled by the caller's
    /// plant-identification confidence.
    pub matrix_boost: f64,
    /// Weight of the coverage ratio: the matched share of a problem's
    /// defining symptoms.
    pub coverage: f64,
    /// Weight of the precision ratio: the share of the reported symptoms a
    /// problem explains. Counters coverage's bias toward problems with few
    /// defining symptoms.
    pub precision: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            matrix_boost: 0.2,
            coverage: 0.6,
            precision: 0.2,
        }
    }
}
