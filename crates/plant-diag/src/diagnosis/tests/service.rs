use super::common::*;
use crate::diagnosis::explanation::render_explanation;
use crate::diagnosis::service::DiagnosisService;
use std::sync::Arc;

#[test]
fn diagnose_records_the_full_session() {
    let (service, sink) = build_service();

    let report = service.diagnose(
        input("plant_1", 1.0, &["yellow_leaves", "wet_soil", "mushy_roots"]),
        Some("uploads/leaf-42.jpg".to_string()),
    );

    assert!(report.session_id.0.starts_with("session-"));
    assert!(!report.diagnosis.is_empty());

    let sessions = sink.sessions();
    assert_eq!(sessions.len(), 1);
    let session = &sessions[0];
    assert_eq!(session.session_id, report.session_id);
    assert_eq!(session.input.plant_id, "plant_1");
    assert_eq!(session.input.plant_confidence, 1.0);
    assert_eq!(
        session.input.image_path.as_deref(),
        Some("uploads/leaf-42.jpg")
    );
    assert_eq!(session.input.symptoms.len(), 3);

    // Outcome rows mirror the ranked results, explanation text included.
    assert_eq!(session.outcomes.len(), report.diagnosis.len());
    for (outcome, entry) in session.outcomes.iter().zip(&report.diagnosis) {
        assert_eq!(outcome.problem_id, entry.problem.id);
        assert_eq!(outcome.confidence, entry.confidence);
        assert_eq!(outcome.explanation, entry.explanation);
    }
}

#[test]
fn session_ids_are_unique_across_requests() {
    let (service, _sink) = build_service();

    let first = service.diagnose(input("plant_1", 1.0, &["yellow_leaves"]), None);
    let second = service.diagnose(input("plant_1", 1.0, &["yellow_leaves"]), None);

    assert_ne!(first.session_id, second.session_id);
    assert_eq!(first.diagnosis, second.diagnosis);
}

#[test]
fn sink_failure_does_not_discard_the_report() {
    let service = DiagnosisService::new(engine(), Arc::new(FailingSink));

    let report = service.diagnose(
        input("plant_1", 1.0, &["yellow_leaves", "wet_soil", "mushy_roots"]),
        None,
    );

    assert!(!report.diagnosis.is_empty());
    assert_eq!(report.diagnosis[0].problem.id.0, "prob_root_rot");
}

#[test]
fn explanations_cover_symptoms_and_species_prior() {
    let (service, _sink) = build_service();

    let report = service.diagnose(
        input("plant_1", 1.0, &["yellow_leaves", "wet_soil", "mushy_roots"]),
        None,
    );

    let top = &report.diagnosis[0];
    assert!(top.explanation.starts_with("We detected Root Rot (100% match)."));
    assert!(top
        .explanation
        .contains("This was indicated by the following symptoms: yellow_leaves, wet_soil, mushy_roots."));
    assert!(top
        .explanation
        .contains("Additionally, it is a common issue for this type of plant."));
    assert!(top
        .explanation
        .contains("Typical treatment involves: Treatment notes for Root Rot."));
}

#[test]
fn matrix_only_explanation_skips_the_symptom_sentence() {
    let (service, _sink) = build_service();

    let report = service.diagnose(input("plant_1", 1.0, &[]), None);

    assert_eq!(report.diagnosis.len(), 1);
    let only = &report.diagnosis[0];
    assert!(only.explanation.starts_with("We detected Root Rot (20% match)."));
    assert!(!only.explanation.contains("indicated by the following symptoms"));
    assert!(only
        .explanation
        .contains("Additionally, it is a common issue for this type of plant."));
}

#[test]
fn render_explanation_is_deterministic_over_a_result() {
    let engine = engine();
    let results = engine.diagnose(&input("plant_1", 1.0, &["yellow_leaves"]));

    let first = render_explanation(&results[0]);
    let second = render_explanation(&results[0]);
    assert_eq!(first, second);
}
