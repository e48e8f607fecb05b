// src/models/question.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A single row of the question dataset.
///
/// Field names mirror the CSV header and the JSON wire format exactly; `use`
/// is a reserved keyword in Rust, so the struct field is `purpose` renamed on
/// the wire. Rows carry no identity column, so duplicates are permitted and a
/// row is addressed only by its position in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Question {
    /// The question text.
    #[validate(length(min = 1, message = "question must not be empty"))]
    pub question: String,

    /// Secondary filter key (e.g., 'Databases', 'Docker').
    #[validate(length(min = 1, message = "subject must not be empty"))]
    pub subject: String,

    /// Intended exam/context category; the primary filter key.
    #[serde(rename = "use")]
    #[validate(length(min = 1, message = "use must not be empty"))]
    pub purpose: String,

    /// Key of the correct answer (e.g., 'A').
    #[validate(length(min = 1, message = "correct must not be empty"))]
    pub correct: String,

    #[serde(rename = "responseA")]
    #[validate(length(min = 1, message = "responseA must not be empty"))]
    pub response_a: String,

    #[serde(rename = "responseB")]
    #[validate(length(min = 1, message = "responseB must not be empty"))]
    pub response_b: String,

    /// Optional third choice; renders as an explicit JSON null when absent.
    #[serde(rename = "responseC")]
    pub response_c: Option<String>,

    /// Optional fourth choice; renders as an explicit JSON null when absent.
    #[serde(rename = "responseD")]
    pub response_d: Option<String>,

    pub remark: Option<String>,
}

impl Question {
    /// Collapses blank optional fields to `None` so absent values always
    /// serialize as JSON null rather than an empty string.
    pub fn normalized(mut self) -> Self {
        for field in [
            &mut self.response_c,
            &mut self.response_d,
            &mut self.remark,
        ] {
            if field.as_deref().is_some_and(|v| v.trim().is_empty()) {
                *field = None;
            }
        }
        self
    }
}
