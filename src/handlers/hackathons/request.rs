//! Hackathon request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::constants::{
    MAX_COLLEGE_LENGTH, MAX_HACKATHON_DESCRIPTION_LENGTH, MAX_HACKATHON_NAME_LENGTH,
    MAX_PROJECT_DESCRIPTION_LENGTH,
};

/// Timeline entry input.
///
/// `kind` drives window gating (registration, submission, other); `title` is
/// free display text.
#[derive(Debug, Deserialize, Validate)]
pub struct TimelineInput {
    #[validate(length(min = 1, max = 256))]
    pub title: String,

    /// Entry kind: registration, submission, other
    pub kind: String,

    /// When this phase occurs
    pub occurs_on: DateTime<Utc>,

    /// Entry status: upcoming, ongoing, complete
    pub status: String,
}

/// Prize input
#[derive(Debug, Deserialize, Validate)]
pub struct PrizeInput {
    #[validate(length(min = 1, max = 256))]
    pub title: String,

    #[validate(length(max = 2048))]
    pub description: Option<String>,
}

/// Mentor guidance session input
#[derive(Debug, Deserialize, Validate)]
pub struct SessionInput {
    #[validate(length(min = 1, max = 256))]
    pub title: String,

    #[validate(length(max = 256))]
    pub mentor: Option<String>,

    pub scheduled_at: DateTime<Utc>,

    #[validate(length(max = 2048))]
    pub meeting_url: Option<String>,
}

/// Create hackathon request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateHackathonRequest {
    #[validate(length(min = 1, max = MAX_HACKATHON_NAME_LENGTH))]
    pub name: String,

    #[validate(length(max = MAX_HACKATHON_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    #[validate(length(max = 256))]
    pub theme: Option<String>,

    #[validate(length(max = 256))]
    pub city: Option<String>,

    #[validate(length(max = 2048))]
    pub thumbnail_url: Option<String>,

    /// Hackathon status: open, closed (defaults to open)
    pub status: Option<String>,

    /// Optional wall-clock registration bounds
    pub registration_start: Option<DateTime<Utc>>,
    pub registration_end: Option<DateTime<Utc>>,

    #[validate(nested)]
    #[serde(default)]
    pub timelines: Vec<TimelineInput>,

    #[validate(nested)]
    #[serde(default)]
    pub prizes: Vec<PrizeInput>,

    #[validate(nested)]
    #[serde(default)]
    pub sessions: Vec<SessionInput>,
}

/// Update hackathon request.
///
/// Scalar fields left out keep their stored values; a supplied child list
/// replaces the existing one wholesale.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateHackathonRequest {
    #[validate(length(min = 1, max = MAX_HACKATHON_NAME_LENGTH))]
    pub name: Option<String>,

    #[validate(length(max = MAX_HACKATHON_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    #[validate(length(max = 256))]
    pub theme: Option<String>,

    #[validate(length(max = 256))]
    pub city: Option<String>,

    #[validate(length(max = 2048))]
    pub thumbnail_url: Option<String>,

    pub status: Option<String>,

    pub registration_start: Option<DateTime<Utc>>,
    pub registration_end: Option<DateTime<Utc>>,

    #[validate(nested)]
    pub timelines: Option<Vec<TimelineInput>>,

    #[validate(nested)]
    pub prizes: Option<Vec<PrizeInput>>,

    #[validate(nested)]
    pub sessions: Option<Vec<SessionInput>>,
}

/// List hackathons query parameters
#[derive(Debug, Deserialize)]
pub struct ListHackathonsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub status: Option<String>, // open, closed
    pub search: Option<String>,
}

/// Individual registration request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterIndividualRequest {
    #[validate(length(min = 1, max = 2048))]
    pub github_url: String,

    #[validate(length(min = 1, max = 2048))]
    pub linkedin_url: String,

    #[validate(length(min = 1, max = MAX_COLLEGE_LENGTH))]
    pub college: String,
}

/// Save artifacts on an individual registration
#[derive(Debug, Deserialize, Validate)]
pub struct SaveArtifactsRequest {
    #[validate(length(min = 1, max = 2048))]
    pub artifact_url: Option<String>,

    #[validate(length(max = MAX_PROJECT_DESCRIPTION_LENGTH))]
    pub project_description: Option<String>,
}

/// Review decision on a registration or team submission
#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    /// Review status: under_review, accepted, rejected
    pub review_status: String,
}

/// Generic pagination query for review listings
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}
