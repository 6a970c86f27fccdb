//! Team handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::TeamService,
    state::AppState,
};

use super::{
    request::{RenameTeamRequest, SaveTeamArtifactsRequest},
    response::{SubmitTeamResponse, TeamResponse},
};
use crate::handlers::hackathons::request::ReviewRequest;

/// Get team detail
pub async fn get_team(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<TeamResponse>> {
    let team = TeamService::get_team(state.db(), &id, &auth_user.id, &auth_user.role).await?;
    Ok(Json(team))
}

/// Rename the team (leader only)
pub async fn rename_team(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<RenameTeamRequest>,
) -> AppResult<Json<TeamResponse>> {
    payload.validate()?;

    let team = TeamService::rename_team(state.db(), &id, &auth_user.id, payload).await?;
    Ok(Json(team))
}

/// Remove a member from the team
pub async fn remove_member(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((id, member_id)): Path<(Uuid, Uuid)>,
) -> AppResult<StatusCode> {
    TeamService::remove_member(state.db(), &id, &member_id, &auth_user.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Save artifacts on the team (leader only)
pub async fn save_artifacts(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<SaveTeamArtifactsRequest>,
) -> AppResult<Json<TeamResponse>> {
    payload.validate()?;

    let team = TeamService::save_artifacts(state.db(), &id, &auth_user.id, payload).await?;
    Ok(Json(team))
}

/// Submit the team's project (leader only, single-shot)
pub async fn submit_team(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SubmitTeamResponse>> {
    let team = TeamService::submit_team(state.db(), &id, &auth_user.id).await?;

    Ok(Json(SubmitTeamResponse {
        message: "Project submitted".to_string(),
        team,
    }))
}

/// Review a team submission (host or admin)
pub async fn review_team(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<ReviewRequest>,
) -> AppResult<Json<TeamResponse>> {
    let team = TeamService::set_review_status(
        state.db(),
        &id,
        &auth_user.id,
        &auth_user.role,
        &payload.review_status,
    )
    .await?;

    Ok(Json(team))
}
