//! Problem and practice handler implementations

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
    models::Problem,
    services::{PracticeService, ProblemService},
    state::AppState,
    utils::page_params,
};

use super::{
    request::{CreateProblemRequest, ListProblemsQuery, PracticeSubmitRequest, UpdateProblemRequest},
    response::{PracticeHistoryResponse, PracticeResultResponse, ProblemsListResponse},
};

/// List practice problems
pub async fn list_problems(
    State(state): State<AppState>,
    Query(query): Query<ListProblemsQuery>,
) -> AppResult<Json<ProblemsListResponse>> {
    let (page, per_page) = page_params(query.page, query.per_page, 20);

    let (problems, total) = ProblemService::list_problems(
        state.db(),
        page,
        per_page,
        query.difficulty.as_deref(),
        query.topic.as_deref(),
        query.search.as_deref(),
    )
    .await?;

    Ok(Json(ProblemsListResponse {
        problems,
        total,
        page,
        per_page,
    }))
}

/// Create a practice problem
pub async fn create_problem(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateProblemRequest>,
) -> AppResult<(StatusCode, Json<Problem>)> {
    payload.validate()?;

    let problem =
        ProblemService::create_problem(state.db(), &auth_user.id, &auth_user.role, payload).await?;

    Ok((StatusCode::CREATED, Json(problem)))
}

/// Get a problem
pub async fn get_problem(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Problem>> {
    let problem = ProblemService::get_problem(state.db(), &id).await?;
    Ok(Json(problem))
}

/// Update a problem
pub async fn update_problem(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProblemRequest>,
) -> AppResult<Json<Problem>> {
    payload.validate()?;

    let problem =
        ProblemService::update_problem(state.db(), &id, &auth_user.id, &auth_user.role, payload)
            .await?;

    Ok(Json(problem))
}

/// Delete a problem
pub async fn delete_problem(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    ProblemService::delete_problem(state.db(), &id, &auth_user.id, &auth_user.role).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Submit source code for practice evaluation
pub async fn submit_practice(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<PracticeSubmitRequest>,
) -> AppResult<(StatusCode, Json<PracticeResultResponse>)> {
    payload.validate()?;

    let submission = PracticeService::submit(
        state.db(),
        state.evaluator(),
        &id,
        &auth_user.id,
        payload,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(submission.into())))
}

/// List the caller's practice attempts against a problem
pub async fn list_practice_attempts(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<PracticeHistoryResponse>> {
    let attempts = PracticeService::attempts(state.db(), &id, &auth_user.id).await?;

    Ok(Json(PracticeHistoryResponse {
        attempts: attempts.into_iter().map(Into::into).collect(),
    }))
}
