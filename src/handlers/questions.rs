// src/handlers/questions.rs

use axum::{
    Json,
    extract::{RawQuery, State},
    response::IntoResponse,
};
use serde_json::json;

use crate::{
    error::AppError, models::question::Question, query::select_questions, state::SharedStore,
};

/// Parsed query parameters for GET /questions. `subjects` may repeat
/// (`subjects=a&subjects=b`), which the urlencoded extractor cannot express,
/// so the raw query string is parsed by hand.
#[derive(Debug)]
struct QuestionsQuery {
    purpose: String,
    num_questions: usize,
    subjects: Vec<String>,
}

fn parse_query(raw: Option<&str>) -> Result<QuestionsQuery, AppError> {
    let raw = raw.unwrap_or("");
    let mut purpose = None;
    let mut num_questions = None;
    let mut subjects = Vec::new();

    for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
        match key.as_ref() {
            "use" => purpose = Some(value.into_owned()),
            "num_questions" => {
                let parsed = value.parse::<usize>().map_err(|_| {
                    AppError::InvalidParameter(
                        "num_questions must be a non-negative integer".to_string(),
                    )
                })?;
                num_questions = Some(parsed);
            }
            "subjects" => subjects.push(value.into_owned()),
            _ => {}
        }
    }

    let purpose = purpose.ok_or_else(|| {
        AppError::InvalidParameter("Missing required parameter: use".to_string())
    })?;
    let num_questions = num_questions.ok_or_else(|| {
        AppError::InvalidParameter("Missing required parameter: num_questions".to_string())
    })?;
    if subjects.is_empty() {
        return Err(AppError::InvalidParameter(
            "Missing required parameter: subjects".to_string(),
        ));
    }

    Ok(QuestionsQuery {
        purpose,
        num_questions,
        subjects,
    })
}

/// Draws a random set of questions for an authenticated user.
///
/// Filters the store by `(use, subjects)`, then samples `num_questions`
/// distinct rows. The read lock is released before the response is built.
#[utoipa::path(
    get,
    path = "/questions",
    tag = "questions",
    params(
        ("use" = String, Query, description = "Test category to draw from"),
        ("num_questions" = usize, Query, description = "Number of questions: 5, 10, or 20"),
        ("subjects" = Vec<String>, Query, description = "Accepted subjects (repeatable)")
    ),
    responses(
        (status = 200, description = "Sampled questions"),
        (status = 400, description = "Number of questions must be 5, 10, or 20"),
        (status = 401, description = "Incorrect username or password"),
        (status = 404, description = "Not enough questions available")
    ),
    security(("basic_auth" = []))
)]
pub async fn get_questions(
    State(store): State<SharedStore>,
    RawQuery(raw): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let params = parse_query(raw.as_deref())?;
    tracing::info!(
        "Received request for questions with use: {}, num_questions: {}, subjects: {:?}",
        params.purpose,
        params.num_questions,
        params.subjects
    );

    let questions = {
        let store = store.read().map_err(|e| AppError::Internal(e.to_string()))?;
        select_questions(
            &store,
            &params.purpose,
            params.num_questions,
            &params.subjects,
            &mut rand::thread_rng(),
        )?
    };

    Ok(Json(json!({ "questions": questions })))
}

/// Appends a question to the dataset. Admin only.
///
/// The write guard makes the new row visible to readers all at once; there is
/// no duplicate detection and appended rows do not survive a restart.
#[utoipa::path(
    post,
    path = "/questions",
    tag = "admin",
    request_body = Question,
    responses(
        (status = 200, description = "Question added successfully"),
        (status = 400, description = "Question is missing a required field"),
        (status = 401, description = "Unauthorized")
    ),
    security(("basic_auth" = []))
)]
pub async fn add_question(
    State(store): State<SharedStore>,
    Json(payload): Json<Question>,
) -> Result<impl IntoResponse, AppError> {
    let question_text = payload.question.clone();
    {
        let mut store = store.write().map_err(|e| AppError::Internal(e.to_string()))?;
        store.append(payload)?;
    }
    tracing::info!("Question added: {}", question_text);

    Ok(Json(json!({ "message": "Question added successfully" })))
}
