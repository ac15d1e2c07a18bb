use super::common::*;
use crate::diagnosis::domain::{ProblemCategory, ProblemId, SusceptibilityEntry};
use crate::diagnosis::knowledge::{KnowledgeBase, KnowledgeBaseError};
use std::collections::HashSet;
use std::path::Path;

#[test]
fn duplicate_problem_ids_keep_the_first_record() {
    let mut records = problems();
    records.push(problem(
        "prob_root_rot",
        "Root Rot (duplicate)",
        ProblemCategory::Disease,
        &["wilting"],
    ));

    let kb = KnowledgeBase::new(records, matrix());

    let root_rot: Vec<_> = kb
        .problems()
        .iter()
        .filter(|problem| problem.id.0 == "prob_root_rot")
        .collect();
    assert_eq!(root_rot.len(), 1);
    assert_eq!(root_rot[0].name, "Root Rot");
}

#[test]
fn duplicate_matrix_rows_keep_the_first_entry() {
    let mut rows = matrix();
    rows.push(SusceptibilityEntry {
        plant_id: "plant_1".to_string(),
        susceptible_problems: vec![ProblemId("prob_underwatering".to_string())],
    });

    let kb = KnowledgeBase::new(problems(), rows);
    let susceptible = kb.susceptible_problems("plant_1");

    assert!(susceptible.contains(&ProblemId("prob_root_rot".to_string())));
    assert!(!susceptible.contains(&ProblemId("prob_underwatering".to_string())));
}

#[test]
fn unknown_plant_yields_empty_susceptibility_set() {
    let kb = KnowledgeBase::new(problems(), matrix());
    assert!(kb.susceptible_problems("plant_nobody").is_empty());
}

#[test]
fn builtin_data_loads_and_is_internally_consistent() {
    let kb = KnowledgeBase::builtin();

    assert!(!kb.problems().is_empty());

    let ids: HashSet<_> = kb.problems().iter().map(|problem| &problem.id).collect();
    assert_eq!(ids.len(), kb.problems().len(), "builtin problem ids are unique");
    assert!(ids.contains(&ProblemId("prob_root_rot".to_string())));

    // Every matrix reference should resolve against the problem collection.
    for plant_id in [
        "plant_monstera",
        "plant_pothos",
        "plant_snake_plant",
        "plant_fiddle_leaf_fig",
    ] {
        let susceptible = kb.susceptible_problems(plant_id);
        assert!(!susceptible.is_empty(), "{plant_id} has matrix coverage");
        for problem_id in susceptible {
            assert!(ids.contains(problem_id), "{} resolves", problem_id.0);
        }
    }
}

#[test]
fn load_reports_missing_reference_files() {
    let missing = Path::new("/nonexistent/problems.json");
    let error = KnowledgeBase::load(missing, missing).expect_err("load fails");
    assert!(matches!(error, KnowledgeBaseError::Io { .. }));
}

#[test]
fn load_reports_malformed_reference_files() {
    let dir = std::env::temp_dir().join(format!("plant-diag-kb-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir creates");
    let problems_path = dir.join("problems.json");
    let matrix_path = dir.join("matrix.json");
    std::fs::write(&problems_path, "{ not json").expect("fixture writes");
    std::fs::write(&matrix_path, "[]").expect("fixture writes");

    let error = KnowledgeBase::load(&problems_path, &matrix_path).expect_err("load fails");
    assert!(matches!(error, KnowledgeBaseError::Parse { .. }));

    std::fs::remove_dir_all(&dir).ok();
}
