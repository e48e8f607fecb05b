// src/query.rs

use rand::Rng;
use rand::seq::SliceRandom;

use crate::{error::AppError, models::question::Question, store::QuestionStore};

/// Numbers of questions a client may request per draw.
pub const ALLOWED_COUNTS: [usize; 3] = [5, 10, 20];

/// Draws `num_questions` distinct questions matching `(use, subjects)`.
///
/// * Validates `num_questions` against `ALLOWED_COUNTS`.
/// * Filters candidates, checks availability, then samples uniformly without
///   replacement (no row repeats within one result).
/// * Optional fields of each selected row are normalized so absent values
///   serialize as explicit nulls; required fields are never null by the store
///   invariant.
///
/// Draw order is random and not reproducible across calls unless a seeded
/// `rng` is supplied.
pub fn select_questions(
    store: &QuestionStore,
    purpose: &str,
    num_questions: usize,
    subjects: &[String],
    rng: &mut impl Rng,
) -> Result<Vec<Question>, AppError> {
    if !ALLOWED_COUNTS.contains(&num_questions) {
        return Err(AppError::InvalidParameter(
            "Number of questions must be 5, 10, or 20".to_string(),
        ));
    }

    let candidates = store.filter(purpose, subjects);

    if candidates.len() < num_questions {
        return Err(AppError::InsufficientData(
            "Not enough questions available".to_string(),
        ));
    }

    let selected: Vec<Question> = candidates
        .choose_multiple(rng, num_questions)
        .cloned()
        .map(Question::normalized)
        .collect();

    // The availability check above makes a short draw impossible; anything
    // shorter is a sampler fault, not a client error.
    if selected.len() != num_questions {
        return Err(AppError::Internal(format!(
            "sampler returned {} of {} requested questions",
            selected.len(),
            num_questions
        )));
    }

    Ok(selected)
}
