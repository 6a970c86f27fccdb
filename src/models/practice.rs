//! Practice submission model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One practice attempt against a problem, graded by the external
/// evaluation service.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PracticeSubmission {
    pub id: Uuid,
    pub problem_id: Uuid,
    pub user_id: Uuid,
    pub language: String,
    #[serde(skip_serializing)]
    pub source_code: String,
    pub correct: bool,
    pub accuracy: f64,
    pub hint: String,
    pub created_at: DateTime<Utc>,
}
