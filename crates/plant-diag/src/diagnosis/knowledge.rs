//! Static reference data the engine scores against.
//!
//! Two loading methods, mirroring how deployments actually run:
//! - `builtin()` parses the data files embedded into the binary
//! - `load(problems, matrix)` reads operator-supplied JSON overrides

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use super::domain::{Problem, ProblemId, SusceptibilityEntry};

const BUILTIN_PROBLEMS: &str = include_str!("../../data/problems.json");
const BUILTIN_MATRIX: &str = include_str!("../../data/plant_problem_matrix.json");

/// Problem collection plus susceptibility matrix, loaded once at startup and
/// never mutated afterwards. Share it behind an `Arc` across concurrent
/// callers.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    problems: Vec<Problem>,
    matrix: Vec<SusceptibilityEntry>,
}

impl KnowledgeBase {
    /// Build a knowledge base from explicit collections.
    ///
    /// Duplicate problem ids and duplicate matrix rows for the same plant
    /// keep their first occurrence and drop the rest, so every later lookup
    /// is deterministic regardless of how the data was assembled.
    pub fn new(problems: Vec<Problem>, matrix: Vec<SusceptibilityEntry>) -> Self {
        let mut seen_problems = HashSet::new();
        let problems = problems
            .into_iter()
            .filter(|problem| seen_problems.insert(problem.id.clone()))
            .collect();

        let mut seen_plants = HashSet::new();
        let matrix = matrix
            .into_iter()
            .filter(|entry| seen_plants.insert(entry.plant_id.clone()))
            .collect();

        Self { problems, matrix }
    }

    /// Reference data embedded in the binary at compile time.
    ///
    /// # Panics
    /// Panics if the bundled JSON is invalid, which would be a packaging bug.
    pub fn builtin() -> Self {
        let problems =
            serde_json::from_str(BUILTIN_PROBLEMS).expect("embedded problems.json must be valid");
        let matrix = serde_json::from_str(BUILTIN_MATRIX)
            .expect("embedded plant_problem_matrix.json must be valid");
        Self::new(problems, matrix)
    }

    /// Load reference data from JSON files, for deployments that override
    /// the bundled set. Malformed data is a startup-time configuration
    /// error; callers are expected to abort on it.
    pub fn load(problems_path: &Path, matrix_path: &Path) -> Result<Self, KnowledgeBaseError> {
        let problems = read_json(problems_path)?;
        let matrix = read_json(matrix_path)?;
        Ok(Self::new(problems, matrix))
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    /// Problem ids the given plant is known to be susceptible to. An
    /// unknown plant id yields an empty set.
    pub fn susceptible_problems(&self, plant_id: &str) -> HashSet<&ProblemId> {
        self.matrix
            .iter()
            .find(|entry| entry.plant_id == plant_id)
            .map(|entry| entry.susceptible_problems.iter().collect())
            .unwrap_or_default()
    }
}

fn read_json<T>(path: &Path) -> Result<T, KnowledgeBaseError>
where
    T: DeserializeOwned,
{
    let content = std::fs::read_to_string(path).map_err(|source| KnowledgeBaseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| KnowledgeBaseError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Error enumeration for reference-data loading failures.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeBaseError {
    #[error("failed to read reference data from {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("reference data in {} is malformed", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
