use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::{DiagnosisInput, Problem};
use super::engine::DiagnosisEngine;
use super::explanation::render_explanation;
use super::repository::{
    DiagnosisOutcomeRecord, DiagnosisSessionRecord, RecordedInput, SessionId, SessionSink,
};

/// Service composing the scoring engine, explanation rendering, and the
/// best-effort session sink.
pub struct DiagnosisService<S> {
    engine: DiagnosisEngine,
    sink: Arc<S>,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("session-{id:06}"))
}

/// One ranked result with its rendered explanation attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplainedDiagnosis {
    pub problem: Problem,
    pub confidence: f64,
    pub reasons: Vec<String>,
    pub explanation: String,
}

/// Response assembled for one diagnosis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisReport {
    pub session_id: SessionId,
    pub diagnosis: Vec<ExplainedDiagnosis>,
}

impl<S> DiagnosisService<S>
where
    S: SessionSink,
{
    pub fn new(engine: DiagnosisEngine, sink: Arc<S>) -> Self {
        Self { engine, sink }
    }

    /// Run a diagnosis, render explanations, and record the session.
    ///
    /// Recording is best-effort: a sink failure is logged at warn and the
    /// computed report is returned regardless.
    pub fn diagnose(&self, input: DiagnosisInput, image_path: Option<String>) -> DiagnosisReport {
        let results = self.engine.diagnose(&input);
        let session_id = next_session_id();

        let diagnosis: Vec<ExplainedDiagnosis> = results
            .into_iter()
            .map(|result| {
                let explanation = render_explanation(&result);
                ExplainedDiagnosis {
                    problem: result.problem,
                    confidence: result.confidence,
                    reasons: result.reasons,
                    explanation,
                }
            })
            .collect();

        let record = DiagnosisSessionRecord {
            session_id: session_id.clone(),
            recorded_at: Utc::now(),
            input: RecordedInput {
                plant_id: input.plant_id,
                plant_confidence: input.plant_confidence,
                image_path,
                symptoms: input.symptoms,
            },
            outcomes: diagnosis
                .iter()
                .map(|entry| DiagnosisOutcomeRecord {
                    problem_id: entry.problem.id.clone(),
                    confidence: entry.confidence,
                    explanation: entry.explanation.clone(),
                })
                .collect(),
        };

        if let Err(error) = self.sink.record(record) {
            warn!(session_id = %session_id.0, %error, "failed to record diagnosis session");
        }

        DiagnosisReport {
            session_id,
            diagnosis,
        }
    }
}
