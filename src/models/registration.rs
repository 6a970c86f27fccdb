//! Individual registration model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::review_status;

/// Individual hackathon registration.
///
/// One row per (hackathon, user), enforced by a unique constraint.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Registration {
    pub id: Uuid,
    pub hackathon_id: Uuid,
    pub user_id: Uuid,
    pub github_url: String,
    pub linkedin_url: String,
    pub college: String,
    pub artifact_url: Option<String>,
    pub project_description: Option<String>,
    pub review_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Registration {
    /// Check whether the registration is still awaiting review
    pub fn is_under_review(&self) -> bool {
        self.review_status == review_status::UNDER_REVIEW
    }
}
