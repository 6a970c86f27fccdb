//! Admin handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::AdminService,
    state::AppState,
    utils::page_params,
};

use super::{
    request::{AdminListUsersQuery, BanUserRequest, UpdateRoleRequest},
    response::{AdminActionResponse, AdminUsersListResponse, SystemStatsResponse},
};

fn require_admin(auth_user: &AuthenticatedUser) -> AppResult<()> {
    if auth_user.role != crate::constants::roles::ADMIN {
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }
    Ok(())
}

/// List all users with admin details
pub async fn list_all_users(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<AdminListUsersQuery>,
) -> AppResult<Json<AdminUsersListResponse>> {
    require_admin(&auth_user)?;

    let (page, per_page) = page_params(query.page, query.per_page, 50);

    let (users, total) = AdminService::list_all_users(
        state.db(),
        page,
        per_page,
        query.search.as_deref(),
        query.role.as_deref(),
    )
    .await?;

    Ok(Json(AdminUsersListResponse {
        users,
        total,
        page,
        per_page,
    }))
}

/// Update a user's role
pub async fn update_user_role(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRoleRequest>,
) -> AppResult<Json<AdminActionResponse>> {
    require_admin(&auth_user)?;

    AdminService::update_user_role(state.db(), &id, &payload.role).await?;

    Ok(Json(AdminActionResponse {
        message: "Role updated".to_string(),
    }))
}

/// Ban a user
pub async fn ban_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<BanUserRequest>,
) -> AppResult<Json<AdminActionResponse>> {
    require_admin(&auth_user)?;

    AdminService::ban_user(
        state.db(),
        &id,
        payload.reason.as_deref(),
        payload.duration_hours,
    )
    .await?;

    Ok(Json(AdminActionResponse {
        message: "User banned".to_string(),
    }))
}

/// Unban a user
pub async fn unban_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<AdminActionResponse>> {
    require_admin(&auth_user)?;

    AdminService::unban_user(state.db(), &id).await?;

    Ok(Json(AdminActionResponse {
        message: "User unbanned".to_string(),
    }))
}

/// Get system statistics
pub async fn get_system_stats(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<SystemStatsResponse>> {
    require_admin(&auth_user)?;

    let stats = AdminService::get_system_stats(state.db()).await?;
    Ok(Json(stats))
}
