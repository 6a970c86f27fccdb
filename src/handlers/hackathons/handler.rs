//! Hackathon handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::{HackathonService, RegistrationService, TeamService},
    state::AppState,
    utils::page_params,
};

use super::{
    request::{
        CreateHackathonRequest, ListHackathonsQuery, PageQuery, RegisterIndividualRequest,
        ReviewRequest, SaveArtifactsRequest, UpdateHackathonRequest,
    },
    response::{
        HackathonResponse, HackathonsListResponse, ParticipationResponse, RegisterResponse,
        RegistrationsListResponse,
    },
};
use crate::handlers::teams::{
    request::{CreateTeamRequest, JoinTeamRequest},
    response::{CreateTeamResponse, JoinTeamResponse, TeamsListResponse},
};
use crate::models::Registration;

/// List hackathons (with filtering)
pub async fn list_hackathons(
    State(state): State<AppState>,
    Query(query): Query<ListHackathonsQuery>,
) -> AppResult<Json<HackathonsListResponse>> {
    let (page, per_page) = page_params(query.page, query.per_page, 20);

    let (hackathons, total) = HackathonService::list_hackathons(
        state.db(),
        page,
        per_page,
        query.status.as_deref(),
        query.search.as_deref(),
    )
    .await?;

    Ok(Json(HackathonsListResponse {
        hackathons,
        total,
        page,
        per_page,
    }))
}

/// Create a new hackathon
pub async fn create_hackathon(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateHackathonRequest>,
) -> AppResult<(StatusCode, Json<HackathonResponse>)> {
    payload.validate()?;

    let hackathon =
        HackathonService::create_hackathon(state.db(), &auth_user.id, &auth_user.role, payload)
            .await?;

    Ok((StatusCode::CREATED, Json(hackathon)))
}

/// Get a specific hackathon
pub async fn get_hackathon(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<HackathonResponse>> {
    let hackathon = HackathonService::get_hackathon(state.db(), &id).await?;
    Ok(Json(hackathon))
}

/// Update a hackathon
pub async fn update_hackathon(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateHackathonRequest>,
) -> AppResult<Json<HackathonResponse>> {
    payload.validate()?;

    let hackathon = HackathonService::update_hackathon(
        state.db(),
        &id,
        &auth_user.id,
        &auth_user.role,
        payload,
    )
    .await?;

    Ok(Json(hackathon))
}

/// Delete a hackathon
pub async fn delete_hackathon(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    HackathonService::delete_hackathon(state.db(), &id, &auth_user.id, &auth_user.role).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Register as an individual participant
pub async fn register_individual(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<RegisterIndividualRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    payload.validate()?;

    let registration =
        RegistrationService::register_individual(state.db(), &id, &auth_user.id, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Registered for hackathon".to_string(),
            registration,
        }),
    ))
}

/// Get the caller's registration
pub async fn my_registration(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Registration>> {
    let registration =
        RegistrationService::my_registration(state.db(), &id, &auth_user.id).await?;
    Ok(Json(registration))
}

/// Save artifacts on the caller's registration
pub async fn save_artifacts(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<SaveArtifactsRequest>,
) -> AppResult<Json<Registration>> {
    payload.validate()?;

    let registration =
        RegistrationService::save_artifacts(state.db(), &id, &auth_user.id, payload).await?;
    Ok(Json(registration))
}

/// Get the caller's participation state
pub async fn get_participation(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ParticipationResponse>> {
    let participation =
        RegistrationService::participation(state.db(), &id, &auth_user.id).await?;
    Ok(Json(participation))
}

/// Create a team with the caller as leader
pub async fn create_team(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreateTeamRequest>,
) -> AppResult<(StatusCode, Json<CreateTeamResponse>)> {
    payload.validate()?;

    let team = TeamService::create_team(state.db(), &id, &auth_user.id, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateTeamResponse {
            message: "Team created".to_string(),
            team,
        }),
    ))
}

/// Join a team by its shareable code
pub async fn join_team(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<JoinTeamRequest>,
) -> AppResult<Json<JoinTeamResponse>> {
    payload.validate()?;

    let team = TeamService::join_team(state.db(), &id, &auth_user.id, payload).await?;

    Ok(Json(JoinTeamResponse {
        message: "Joined team".to_string(),
        team,
    }))
}

/// List registrations for review (host or admin)
pub async fn list_registrations(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<RegistrationsListResponse>> {
    let (page, per_page) = page_params(query.page, query.per_page, 50);

    let (registrations, total) = RegistrationService::list_registrations(
        state.db(),
        &id,
        &auth_user.id,
        &auth_user.role,
        page,
        per_page,
    )
    .await?;

    Ok(Json(RegistrationsListResponse {
        registrations,
        total,
        page,
        per_page,
    }))
}

/// Review a registration (host or admin)
pub async fn review_registration(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((id, registration_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<ReviewRequest>,
) -> AppResult<Json<Registration>> {
    let registration = RegistrationService::set_review_status(
        state.db(),
        &id,
        &registration_id,
        &auth_user.id,
        &auth_user.role,
        &payload.review_status,
    )
    .await?;

    Ok(Json(registration))
}

/// List teams for review (host or admin)
pub async fn list_teams(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<TeamsListResponse>> {
    let (page, per_page) = page_params(query.page, query.per_page, 50);

    let (teams, total) = TeamService::list_teams(
        state.db(),
        &id,
        &auth_user.id,
        &auth_user.role,
        page,
        per_page,
    )
    .await?;

    Ok(Json(TeamsListResponse {
        teams,
        total,
        page,
        per_page,
    }))
}
