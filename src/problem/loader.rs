use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::problem::model::ProblemDocument;

#[derive(Debug, Error)]
pub enum ProblemError {
    #[error("invalid problem ID: {0}")]
    InvalidId(u32),

    #[error("problem {id} not found")]
    NotFound { id: u32 },

    #[error("invalid problem data for {id}: {reason}")]
    InvalidData { id: u32, reason: String },

    #[error("failed to read problem file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse problem JSON for {id}: {source}")]
    Parse {
        id: u32,
        #[source]
        source: serde_json::Error,
    },
}

pub trait ProblemProvider {
    fn load(&self, id: u32) -> Result<ProblemDocument, ProblemError>;
}

/// Reads `<base_dir>/<id>.json`.
pub struct FileProblemProvider {
    base_dir: PathBuf,
}

impl FileProblemProvider {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }


    fn file_path(&self, id: u32) -> PathBuf {
        self.base_dir.join(format!("{id}.json"))
    }
}

impl ProblemProvider for FileProblemProvider {
    fn load(&self, id: u32) -> Result<ProblemDocument, ProblemError> {
        if id == 0 {
            return Err(ProblemError::InvalidId(id));
        }

        let path = self.file_path(id);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(ProblemError::NotFound { id });
            }
            Err(source) => return Err(ProblemError::Io { path, source }),
        };

        let problem: ProblemDocument =
            serde_json::from_str(&content).map_err(|source| ProblemError::Parse { id, source })?;

        problem
            .validate("problem loader")
            .map_err(|err| ProblemError::InvalidData {
                id,
                reason: err.to_string(),
            })?;

        tracing::debug!(id, path = %path.display(), "loaded problem");
        Ok(problem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::model::tests::sample_problem;
    use tempfile::TempDir;

    fn write_problem(dir: &TempDir, id: u32, body: &str) {
        fs::write(dir.path().join(format!("{id}.json")), body).unwrap();
    }

    #[test]
    fn test_load_valid_problem() {
        let dir = TempDir::new().unwrap();
        let problem = sample_problem();
        write_problem(&dir, 110, &serde_json::to_string_pretty(&problem).unwrap());

        let loaded = FileProblemProvider::new(dir.path()).load(110).unwrap();
        assert_eq!(loaded, problem);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = FileProblemProvider::new(dir.path()).load(42).unwrap_err();
        assert!(matches!(err, ProblemError::NotFound { id: 42 }));
        assert_eq!(err.to_string(), "problem 42 not found");
    }

    #[test]
    fn test_zero_id_rejected_before_io() {
        let provider = FileProblemProvider::new("/nonexistent/dir");
        assert!(matches!(provider.load(0), Err(ProblemError::InvalidId(0))));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        write_problem(&dir, 5, "{ not json");
        let err = FileProblemProvider::new(dir.path()).load(5).unwrap_err();
        assert!(matches!(err, ProblemError::Parse { id: 5, .. }));
    }

    #[test]
    fn test_directory_in_place_of_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("9.json")).unwrap();
        let err = FileProblemProvider::new(dir.path()).load(9).unwrap_err();
        assert!(matches!(err, ProblemError::Io { .. }));
    }

    #[test]
    fn test_each_invalid_clause_is_invalid_data() {
        let breakers: [fn(&mut ProblemDocument); 6] = [
            |p: &mut ProblemDocument| p.id = 0,
            |p: &mut ProblemDocument| p.title.clear(),
            |p: &mut ProblemDocument| p.description.clear(),
            |p: &mut ProblemDocument| p.examples.clear(),
            |p: &mut ProblemDocument| p.constraints.clear(),
            |p: &mut ProblemDocument| p.test_cases.clear(),
        ];

        for breaker in breakers {
            let dir = TempDir::new().unwrap();
            let mut problem = sample_problem();
            breaker(&mut problem);
            write_problem(&dir, 110, &serde_json::to_string(&problem).unwrap());

            let err = FileProblemProvider::new(dir.path()).load(110).unwrap_err();
            match err {
                ProblemError::InvalidData { id, reason } => {
                    assert_eq!(id, 110);
                    assert!(reason.contains("problem loader"));
                }
                other => panic!("expected InvalidData, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_repairing_one_clause_still_invalid() {
        let dir = TempDir::new().unwrap();
        let mut problem = sample_problem();
        problem.examples.clear();
        problem.constraints.clear();
        problem.examples.push(Default::default());
        write_problem(&dir, 110, &serde_json::to_string(&problem).unwrap());

        let err = FileProblemProvider::new(dir.path()).load(110).unwrap_err();
        assert!(matches!(err, ProblemError::InvalidData { .. }));
        assert!(err.to_string().contains("constraints"));
    }
}
