//! Team response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Team;

/// Team detail with members
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: Uuid,
    pub hackathon_id: Uuid,
    pub name: String,
    pub code: String,
    pub leader_id: Uuid,
    pub github_url: String,
    pub linkedin_url: String,
    pub college: String,
    pub artifact_url: Option<String>,
    pub project_description: Option<String>,
    pub submitted: bool,
    pub submitted_at: Option<DateTime<Utc>>,
    pub review_status: String,
    pub members: Vec<TeamMemberResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TeamResponse {
    /// Assemble from the team row and its member listing
    pub fn from_team(team: Team, members: Vec<TeamMemberResponse>) -> Self {
        Self {
            id: team.id,
            hackathon_id: team.hackathon_id,
            name: team.name,
            code: team.code,
            leader_id: team.leader_id,
            github_url: team.github_url,
            linkedin_url: team.linkedin_url,
            college: team.college,
            artifact_url: team.artifact_url,
            project_description: team.project_description,
            submitted: team.submitted,
            submitted_at: team.submitted_at,
            review_status: team.review_status,
            members,
            created_at: team.created_at,
            updated_at: team.updated_at,
        }
    }
}

/// Team member with enough user detail for a roster view
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct TeamMemberResponse {
    pub user_id: Uuid,
    pub username: String,
    pub display_name: Option<String>,
    pub joined_at: DateTime<Utc>,
}

/// Team creation response (includes the shareable join code)
#[derive(Debug, Serialize)]
pub struct CreateTeamResponse {
    pub message: String,
    pub team: TeamResponse,
}

/// Join team response
#[derive(Debug, Serialize)]
pub struct JoinTeamResponse {
    pub message: String,
    pub team: TeamResponse,
}

/// Submission response
#[derive(Debug, Serialize)]
pub struct SubmitTeamResponse {
    pub message: String,
    pub team: TeamResponse,
}

/// Teams list for host/admin review
#[derive(Debug, Serialize)]
pub struct TeamsListResponse {
    pub teams: Vec<TeamResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
