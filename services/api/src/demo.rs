use crate::infra::{parse_confidence, InMemorySessionSink};
use clap::Args;
use plant_diag::diagnosis::{
    DiagnosisEngine, DiagnosisInput, DiagnosisService, KnowledgeBase, SymptomObservation,
    SymptomSource,
};
use plant_diag::error::AppError;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct DiagnoseArgs {
    /// Plant identifier to look up in the susceptibility matrix
    #[arg(long)]
    pub(crate) plant_id: String,
    /// Confidence that the plant id is correct (0 to 1)
    #[arg(long, default_value = "1.0", value_parser = parse_confidence)]
    pub(crate) plant_confidence: f64,
    /// Observed symptom, repeatable (e.g. --symptom yellow_leaves)
    #[arg(long = "symptom")]
    pub(crate) symptoms: Vec<String>,
}

pub(crate) fn run_diagnose(args: DiagnoseArgs) -> Result<(), AppError> {
    let knowledge = Arc::new(KnowledgeBase::builtin());
    let sink = Arc::new(InMemorySessionSink::default());
    let service = DiagnosisService::new(DiagnosisEngine::new(knowledge), sink.clone());

    let input = DiagnosisInput {
        plant_id: args.plant_id,
        plant_confidence: args.plant_confidence,
        symptoms: args
            .symptoms
            .into_iter()
            .map(|name| SymptomObservation {
                name,
                source: SymptomSource::User,
            })
            .collect(),
    };

    println!("Plant diagnosis");
    println!(
        "Plant: {} (confidence {:.2})",
        input.plant_id, input.plant_confidence
    );
    if input.symptoms.is_empty() {
        println!("Symptoms: none reported");
    } else {
        println!("Symptoms:");
        for symptom in &input.symptoms {
            println!("- {} (via {})", symptom.name, symptom.source.label());
        }
    }

    let report = service.diagnose(input, None);

    println!("\nSession {}", report.session_id.0);
    if report.diagnosis.is_empty() {
        println!("No candidate problems cleared the score threshold.");
        return Ok(());
    }

    println!("Ranked candidates:");
    for entry in &report.diagnosis {
        println!(
            "- {} [{}] confidence {:.2}",
            entry.problem.name,
            entry.problem.category.label(),
            entry.confidence
        );
        for reason in &entry.reasons {
            println!("    - {reason}");
        }
    }

    if let Some(top) = report.diagnosis.first() {
        println!("\n{}", top.explanation);
    }

    println!(
        "\nRecorded {} session(s) in the in-memory sink",
        sink.sessions().len()
    );

    Ok(())
}
