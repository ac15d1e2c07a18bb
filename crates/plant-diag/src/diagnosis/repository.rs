use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{ProblemId, SymptomObservation};

/// Identifier wrapper for recorded diagnosis sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// Raw request fields captured alongside a session, symptom provenance
/// included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedInput {
    pub plant_id: String,
    pub plant_confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    pub symptoms: Vec<SymptomObservation>,
}

/// Per-result output row recorded for a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisOutcomeRecord {
    pub problem_id: ProblemId,
    pub confidence: f64,
    pub explanation: String,
}

/// Everything persisted for one diagnosis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisSessionRecord {
    pub session_id: SessionId,
    pub recorded_at: DateTime<Utc>,
    pub input: RecordedInput,
    pub outcomes: Vec<DiagnosisOutcomeRecord>,
}

/// Write-only persistence hook for diagnosis sessions.
///
/// The service treats recording as best-effort: the engine has no dependency
/// on any sink, and a failing implementation never blocks a computed
/// diagnosis from being returned.
pub trait SessionSink: Send + Sync {
    fn record(&self, session: DiagnosisSessionRecord) -> Result<(), SinkError>;
}

/// Error enumeration for sink failures.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("session sink unavailable: {0}")]
    Unavailable(String),
}
