//! Team request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{
    MAX_COLLEGE_LENGTH, MAX_PROJECT_DESCRIPTION_LENGTH, MAX_TEAM_NAME_LENGTH,
};

/// Create team request.
///
/// The creator becomes leader; their contact details are recorded on the
/// team.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTeamRequest {
    #[validate(length(min = 1, max = MAX_TEAM_NAME_LENGTH))]
    pub name: String,

    #[validate(length(min = 1, max = 2048))]
    pub github_url: String,

    #[validate(length(min = 1, max = 2048))]
    pub linkedin_url: String,

    #[validate(length(min = 1, max = MAX_COLLEGE_LENGTH))]
    pub college: String,
}

/// Join team by code request
#[derive(Debug, Deserialize, Validate)]
pub struct JoinTeamRequest {
    #[validate(length(min = 1, max = 16))]
    pub code: String,
}

/// Rename team request
#[derive(Debug, Deserialize, Validate)]
pub struct RenameTeamRequest {
    #[validate(length(min = 1, max = MAX_TEAM_NAME_LENGTH))]
    pub name: String,
}

/// Save artifacts on a team
#[derive(Debug, Deserialize, Validate)]
pub struct SaveTeamArtifactsRequest {
    #[validate(length(min = 1, max = 2048))]
    pub artifact_url: Option<String>,

    #[validate(length(max = MAX_PROJECT_DESCRIPTION_LENGTH))]
    pub project_description: Option<String>,
}
