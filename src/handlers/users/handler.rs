//! User handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::UserService,
    state::AppState,
    utils::page_params,
};

use super::{
    request::{ListUsersQuery, UpdateUserRequest},
    response::{UserProfileResponse, UserStatsResponse, UsersListResponse},
};

/// List users
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<Json<UsersListResponse>> {
    let (page, per_page) = page_params(query.page, query.per_page, 20);

    let (users, total) = UserService::list_users(
        state.db(),
        page,
        per_page,
        query.search.as_deref(),
        query.role.as_deref(),
    )
    .await?;

    Ok(Json(UsersListResponse {
        users: users.into_iter().map(Into::into).collect(),
        total,
        page,
        per_page,
    }))
}

/// Get a user's public profile
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserProfileResponse>> {
    let user = UserService::get_user_by_id(state.db(), &id).await?;
    Ok(Json(user.into()))
}

/// Update a user profile
pub async fn update_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> AppResult<Json<UserProfileResponse>> {
    payload.validate()?;

    let user = UserService::update_user(
        state.db(),
        &auth_user.id,
        &id,
        &auth_user.role,
        payload.display_name.as_deref(),
        payload.email.as_deref(),
        payload.current_password.as_deref(),
        payload.new_password.as_deref(),
    )
    .await?;

    Ok(Json(user.into()))
}

/// Get a user's statistics
pub async fn get_user_stats(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserStatsResponse>> {
    let stats = UserService::get_user_stats(state.db(), &id).await?;
    Ok(Json(stats))
}
