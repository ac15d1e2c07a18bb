use serde::{Deserialize, Serialize};

/// Identifier wrapper for problems in the knowledge base.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProblemId(pub String);

/// Closed set of problem categories tracked by the knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemCategory {
    Disease,
    Pest,
    Deficiency,
    Environmental,
}

impl ProblemCategory {
    pub const fn label(self) -> &'static str {
        match self {
            ProblemCategory::Disease => "disease",
            ProblemCategory::Pest => "pest",
            ProblemCategory::Deficiency => "deficiency",
            ProblemCategory::Environmental => "environmental",
        }
    }
}

/// A candidate plant ailment with the symptom signature that identifies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub id: ProblemId,
    pub name: String,
    pub category: ProblemCategory,
    pub description: String,
    pub common_symptoms: Vec<String>,
}

/// Links one plant species to the problems it is known to be prone to.
///
/// `plant_id` points at an external plant catalog; an id the matrix does not
/// know simply earns no susceptibility boost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SusceptibilityEntry {
    pub plant_id: String,
    pub susceptible_problems: Vec<ProblemId>,
}

/// Where a reported symptom came from. Carried through for provenance and
/// persistence; scoring currently treats every source alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomSource {
    User,
    ImageAnalysis,
    Sensor,
}

impl SymptomSource {
    pub const fn label(self) -> &'static str {
        match self {
            SymptomSource::User => "user",
            SymptomSource::ImageAnalysis => "image_analysis",
            SymptomSource::Sensor => "sensor",
        }
    }
}

/// One observed symptom, matched case-sensitively against problem signatures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomObservation {
    pub name: String,
    pub source: SymptomSource,
}

/// One diagnosis request as the engine sees it.
///
/// `plant_confidence` is expected to sit in [0, 1]; the boundary layer
/// rejects anything else before the engine runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisInput {
    pub plant_id: String,
    pub plant_confidence: f64,
    pub symptoms: Vec<SymptomObservation>,
}

/// One scored output row. Carries the full problem record so downstream
/// rendering never has to re-resolve ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    pub problem: Problem,
    pub confidence: f64,
    pub reasons: Vec<String>,
}
