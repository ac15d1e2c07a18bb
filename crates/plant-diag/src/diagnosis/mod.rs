//! Plant-health diagnosis: the knowledge base, the deterministic scoring
//! engine, explanation rendering, and the service/router surface that
//! exposes them over HTTP.

pub mod domain;
pub mod engine;
pub mod explanation;
pub mod knowledge;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    DiagnosisInput, DiagnosisResult, Problem, ProblemCategory, ProblemId, SusceptibilityEntry,
    SymptomObservation, SymptomSource,
};
pub use engine::{DiagnosisEngine, ScoringWeights};
pub use explanation::render_explanation;
pub use knowledge::{KnowledgeBase, KnowledgeBaseError};
pub use repository::{
    DiagnosisOutcomeRecord, DiagnosisSessionRecord, RecordedInput, SessionId, SessionSink,
    SinkError,
};
pub use router::{diagnosis_router, DiagnoseRequest};
pub use service::{DiagnosisReport, DiagnosisService, ExplainedDiagnosis};
