//! Hackathon response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::handlers::teams::response::TeamResponse;
use crate::models::{GuidanceSession, Prize, Registration, TimelineEntry, Windows};

/// Full hackathon detail
#[derive(Debug, Serialize)]
pub struct HackathonResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub theme: Option<String>,
    pub city: Option<String>,
    pub thumbnail_url: Option<String>,
    pub status: String,
    pub host_id: Uuid,
    pub host_name: String,
    pub registration_start: Option<DateTime<Utc>>,
    pub registration_end: Option<DateTime<Utc>>,
    pub timelines: Vec<TimelineEntry>,
    pub prizes: Vec<Prize>,
    pub sessions: Vec<GuidanceSession>,
    pub windows: Windows,
    pub registration_count: i64,
    pub team_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Hackathon summary for list views
#[derive(Debug, Serialize)]
pub struct HackathonSummary {
    pub id: Uuid,
    pub name: String,
    pub theme: Option<String>,
    pub city: Option<String>,
    pub thumbnail_url: Option<String>,
    pub status: String,
    pub registration_count: i64,
    pub team_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Hackathon list response
#[derive(Debug, Serialize)]
pub struct HackathonsListResponse {
    pub hackathons: Vec<HackathonSummary>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// Registration success response
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub registration: Registration,
}

/// The caller's participation state for a hackathon
#[derive(Debug, Serialize)]
pub struct ParticipationResponse {
    /// unregistered, registered, team_leader or team_member
    pub state: String,
    pub windows: Windows,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration: Option<Registration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<TeamResponse>,
}

/// Registrations list for host/admin review
#[derive(Debug, Serialize)]
pub struct RegistrationsListResponse {
    pub registrations: Vec<Registration>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
