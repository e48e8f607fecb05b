// src/store.rs

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use validator::Validate;

use crate::error::AppError;
use crate::models::question::Question;

/// Dataset-load failure. Can only occur at startup, before the server
/// accepts requests, and is always fatal.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Csv(csv::Error),
    /// A data row is missing a required column value (1-based row index).
    InvalidRow { row: usize, message: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read dataset: {}", e),
            LoadError::Csv(e) => write!(f, "failed to parse dataset: {}", e),
            LoadError::InvalidRow { row, message } => {
                write!(f, "invalid dataset row {}: {}", row, message)
            }
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        LoadError::Csv(err)
    }
}

/// In-memory, append-only collection of questions.
///
/// Populated once at startup from a CSV source and mutated only through
/// `append`; there are no update or delete operations and nothing is written
/// back to disk. Shared across requests behind a lock in `AppState`, so a row
/// becomes visible to readers only once fully validated and pushed.
#[derive(Debug, Default)]
pub struct QuestionStore {
    rows: Vec<Question>,
}

impl QuestionStore {
    /// Loads the dataset from a CSV file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Parses the dataset from any CSV reader. A single malformed row fails
    /// the whole load; the store never starts with a partially valid table.
    pub fn from_reader(reader: impl Read) -> Result<Self, LoadError> {
        let mut rows = Vec::new();
        let mut csv_reader = csv::Reader::from_reader(reader);
        for (idx, record) in csv_reader.deserialize().enumerate() {
            let question: Question = record?;
            let question = question.normalized();
            if let Err(e) = question.validate() {
                return Err(LoadError::InvalidRow {
                    row: idx + 1,
                    message: e.to_string(),
                });
            }
            rows.push(question);
        }
        Ok(QuestionStore { rows })
    }

    /// Returns all rows whose `use` equals `purpose` exactly (case-sensitive)
    /// and whose `subject` is one of `subjects`, in insertion order.
    pub fn filter(&self, purpose: &str, subjects: &[String]) -> Vec<Question> {
        self.rows
            .iter()
            .filter(|q| q.purpose == purpose && subjects.iter().any(|s| s == &q.subject))
            .cloned()
            .collect()
    }

    /// Appends a question to the end of the collection.
    ///
    /// Required fields must be non-empty; blank optional fields are collapsed
    /// to `None` before storage. No duplicate detection.
    pub fn append(&mut self, question: Question) -> Result<(), AppError> {
        let question = question.normalized();
        question
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.rows.push(question);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
