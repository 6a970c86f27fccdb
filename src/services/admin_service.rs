//! Admin service

use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{
        HackathonRepository, PracticeRepository, ProblemRepository, RegistrationRepository,
        TeamRepository, UserRepository,
    },
    error::{AppError, AppResult},
    handlers::admin::response::{AdminUserResponse, SystemStatsResponse},
    utils::validation,
};

/// Admin service for system management
pub struct AdminService;

impl AdminService {
    /// List all users with admin details
    pub async fn list_all_users(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        search: Option<&str>,
        role: Option<&str>,
    ) -> AppResult<(Vec<AdminUserResponse>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;
        let search_pattern = search.map(|s| format!("%{}%", s));

        let users = sqlx::query_as::<_, AdminUserResponse>(
            r#"
            SELECT
                id, username, email, display_name, role,
                is_banned, ban_reason, ban_expires_at,
                created_at, last_login_at
            FROM users
            WHERE
                ($1::text IS NULL OR username ILIKE $1 OR email ILIKE $1)
                AND ($2::text IS NULL OR role = $2)
            ORDER BY created_at DESC
            OFFSET $3 LIMIT $4
            "#,
        )
        .bind(&search_pattern)
        .bind(role)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        // Total uses the same predicates as the page query
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM users
            WHERE
                ($1::text IS NULL OR username ILIKE $1 OR email ILIKE $1)
                AND ($2::text IS NULL OR role = $2)
            "#,
        )
        .bind(&search_pattern)
        .bind(role)
        .fetch_one(pool)
        .await?;

        Ok((users, total))
    }

    /// Update user role
    pub async fn update_user_role(pool: &PgPool, user_id: &Uuid, role: &str) -> AppResult<()> {
        validation::validate_role(role).map_err(|e| AppError::Validation(e.to_string()))?;
        UserRepository::update_role(pool, user_id, role).await?;
        Ok(())
    }

    /// Ban a user
    pub async fn ban_user(
        pool: &PgPool,
        user_id: &Uuid,
        reason: Option<&str>,
        duration_hours: Option<i64>,
    ) -> AppResult<()> {
        let expires_at = duration_hours.map(|h| Utc::now() + Duration::hours(h));
        UserRepository::ban(pool, user_id, reason, expires_at).await
    }

    /// Unban a user
    pub async fn unban_user(pool: &PgPool, user_id: &Uuid) -> AppResult<()> {
        UserRepository::unban(pool, user_id).await
    }

    /// Get system statistics
    pub async fn get_system_stats(pool: &PgPool) -> AppResult<SystemStatsResponse> {
        let (
            total_users,
            total_hackathons,
            total_registrations,
            total_teams,
            total_problems,
            total_practice_submissions,
        ) = futures::try_join!(
            UserRepository::count(pool),
            HackathonRepository::count(pool),
            RegistrationRepository::count(pool),
            TeamRepository::count(pool),
            ProblemRepository::count(pool),
            PracticeRepository::count(pool),
        )?;

        Ok(SystemStatsResponse {
            total_users,
            total_hackathons,
            total_registrations,
            total_teams,
            total_problems,
            total_practice_submissions,
        })
    }
}
