//! Registration repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Registration};

/// Repository for individual registration database operations
pub struct RegistrationRepository;

impl RegistrationRepository {
    /// Insert a registration if the user does not already have one for this
    /// hackathon. Returns `None` when the unique key already exists.
    pub async fn insert_if_absent(
        pool: &PgPool,
        hackathon_id: &Uuid,
        user_id: &Uuid,
        github_url: &str,
        linkedin_url: &str,
        college: &str,
    ) -> AppResult<Option<Registration>> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"
            INSERT INTO registrations (hackathon_id, user_id, github_url, linkedin_url, college)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (hackathon_id, user_id) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(hackathon_id)
        .bind(user_id)
        .bind(github_url)
        .bind(linkedin_url)
        .bind(college)
        .fetch_optional(pool)
        .await?;

        Ok(registration)
    }

    /// Point lookup by the (hackathon, user) natural key
    pub async fn find_by_user(
        pool: &PgPool,
        hackathon_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<Option<Registration>> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"SELECT * FROM registrations WHERE hackathon_id = $1 AND user_id = $2"#,
        )
        .bind(hackathon_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(registration)
    }

    /// Find registration by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Registration>> {
        let registration =
            sqlx::query_as::<_, Registration>(r#"SELECT * FROM registrations WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(registration)
    }

    /// Attach or update submission artifacts; fields left as `None` keep
    /// their stored value.
    pub async fn update_artifacts(
        pool: &PgPool,
        id: &Uuid,
        artifact_url: Option<&str>,
        project_description: Option<&str>,
    ) -> AppResult<Registration> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"
            UPDATE registrations
            SET
                artifact_url = COALESCE($2, artifact_url),
                project_description = COALESCE($3, project_description),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(artifact_url)
        .bind(project_description)
        .fetch_one(pool)
        .await?;

        Ok(registration)
    }

    /// Set the review status
    pub async fn set_review_status(
        pool: &PgPool,
        id: &Uuid,
        review_status: &str,
    ) -> AppResult<Registration> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"
            UPDATE registrations
            SET review_status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(review_status)
        .fetch_one(pool)
        .await?;

        Ok(registration)
    }

    /// List registrations for a hackathon (for host/admin review)
    pub async fn list_for_hackathon(
        pool: &PgPool,
        hackathon_id: &Uuid,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Registration>, i64)> {
        let registrations = sqlx::query_as::<_, Registration>(
            r#"
            SELECT * FROM registrations
            WHERE hackathon_id = $1
            ORDER BY created_at
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(hackathon_id)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM registrations WHERE hackathon_id = $1"#)
                .bind(hackathon_id)
                .fetch_one(pool)
                .await?;

        Ok((registrations, count))
    }

    /// Count of registrations for a hackathon
    pub async fn count_for_hackathon(pool: &PgPool, hackathon_id: &Uuid) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM registrations WHERE hackathon_id = $1"#)
                .bind(hackathon_id)
                .fetch_one(pool)
                .await?;

        Ok(count)
    }

    /// Count registrations made by a user across hackathons
    pub async fn count_for_user(pool: &PgPool, user_id: &Uuid) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM registrations WHERE user_id = $1"#)
                .bind(user_id)
                .fetch_one(pool)
                .await?;

        Ok(count)
    }

    /// Count total registrations
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM registrations"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
