use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::diagnosis::domain::{
    DiagnosisInput, Problem, ProblemCategory, ProblemId, SusceptibilityEntry, SymptomObservation,
    SymptomSource,
};
use crate::diagnosis::engine::DiagnosisEngine;
use crate::diagnosis::knowledge::KnowledgeBase;
use crate::diagnosis::repository::{DiagnosisSessionRecord, SessionSink, SinkError};
use crate::diagnosis::service::DiagnosisService;

pub(super) fn problem(
    id: &str,
    name: &str,
    category: ProblemCategory,
    symptoms: &[&str],
) -> Problem {
    Problem {
        id: ProblemId(id.to_string()),
        name: name.to_string(),
        category,
        description: format!("Treatment notes for {name}."),
        common_symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
    }
}

pub(super) fn problems() -> Vec<Problem> {
    vec![
        problem(
            "prob_root_rot",
            "Root Rot",
            ProblemCategory::Disease,
            &["yellow_leaves", "wet_soil", "mushy_roots"],
        ),
        problem(
            "prob_underwatering",
            "Underwatering",
            ProblemCategory::Environmental,
            &["yellow_leaves", "dry_soil", "drooping"],
        ),
    ]
}

pub(super) fn matrix() -> Vec<SusceptibilityEntry> {
    vec![SusceptibilityEntry {
        plant_id: "plant_1".to_string(),
        susceptible_problems: vec![ProblemId("prob_root_rot".to_string())],
    }]
}

pub(super) fn knowledge() -> Arc<KnowledgeBase> {
    Arc::new(KnowledgeBase::new(problems(), matrix()))
}

pub(super) fn engine() -> DiagnosisEngine {
    DiagnosisEngine::new(knowledge())
}

pub(super) fn observed(names: &[&str]) -> Vec<SymptomObservation> {
    names
        .iter()
        .map(|name| SymptomObservation {
            name: name.to_string(),
            source: SymptomSource::User,
        })
        .collect()
}

pub(super) fn input(plant_id: &str, confidence: f64, symptoms: &[&str]) -> DiagnosisInput {
    DiagnosisInput {
        plant_id: plant_id.to_string(),
        plant_confidence: confidence,
        symptoms: observed(symptoms),
    }
}

#[derive(Default)]
pub(super) struct MemorySink {
    sessions: Mutex<Vec<DiagnosisSessionRecord>>,
}

impl MemorySink {
    pub(super) fn sessions(&self) -> Vec<DiagnosisSessionRecord> {
        self.sessions.lock().expect("sink mutex poisoned").clone()
    }
}

impl SessionSink for MemorySink {
    fn record(&self, session: DiagnosisSessionRecord) -> Result<(), SinkError> {
        self.sessions
            .lock()
            .expect("sink mutex poisoned")
            .push(session);
        Ok(())
    }
}

pub(super) struct FailingSink;

impl SessionSink for FailingSink {
    fn record(&self, _session: DiagnosisSessionRecord) -> Result<(), SinkError> {
        Err(SinkError::Unavailable("sink offline".to_string()))
    }
}

pub(super) fn build_service() -> (Arc<DiagnosisService<MemorySink>>, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::default());
    let service = Arc::new(DiagnosisService::new(engine(), sink.clone()));
    (service, sink)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}
