//! Problem and practice response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{PracticeSubmission, Problem};

/// Problem list response
#[derive(Debug, Serialize)]
pub struct ProblemsListResponse {
    pub problems: Vec<Problem>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// Verdict for one practice attempt
#[derive(Debug, Serialize)]
pub struct PracticeResultResponse {
    pub submission_id: Uuid,
    pub problem_id: Uuid,
    pub language: String,
    pub correct: bool,
    pub accuracy: f64,
    pub hint: String,
    pub created_at: DateTime<Utc>,
}

impl From<PracticeSubmission> for PracticeResultResponse {
    fn from(submission: PracticeSubmission) -> Self {
        Self {
            submission_id: submission.id,
            problem_id: submission.problem_id,
            language: submission.language,
            correct: submission.correct,
            accuracy: submission.accuracy,
            hint: submission.hint,
            created_at: submission.created_at,
        }
    }
}

/// The caller's attempt history against a problem
#[derive(Debug, Serialize)]
pub struct PracticeHistoryResponse {
    pub attempts: Vec<PracticeResultResponse>,
}
