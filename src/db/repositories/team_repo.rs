//! Team repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Team};

/// Repository for team database operations
pub struct TeamRepository;

impl TeamRepository {
    /// Create a team and its leader's membership row in one transaction,
    /// so the leader invariant holds from the first committed state.
    pub async fn create_with_leader(
        pool: &PgPool,
        hackathon_id: &Uuid,
        name: &str,
        code: &str,
        leader_id: &Uuid,
        github_url: &str,
        linkedin_url: &str,
        college: &str,
    ) -> AppResult<Team> {
        let mut tx = pool.begin().await?;

        let team = sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (hackathon_id, name, code, leader_id, github_url, linkedin_url, college)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(hackathon_id)
        .bind(name)
        .bind(code)
        .bind(leader_id)
        .bind(github_url)
        .bind(linkedin_url)
        .bind(college)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(r#"INSERT INTO team_members (team_id, user_id) VALUES ($1, $2)"#)
            .bind(team.id)
            .bind(leader_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(team)
    }

    /// Find team by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Team>> {
        let team = sqlx::query_as::<_, Team>(r#"SELECT * FROM teams WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(team)
    }

    /// Point lookup by the shareable join code within a hackathon
    pub async fn find_by_code(
        pool: &PgPool,
        hackathon_id: &Uuid,
        code: &str,
    ) -> AppResult<Option<Team>> {
        let team =
            sqlx::query_as::<_, Team>(r#"SELECT * FROM teams WHERE hackathon_id = $1 AND code = $2"#)
                .bind(hackathon_id)
                .bind(code)
                .fetch_optional(pool)
                .await?;

        Ok(team)
    }

    /// Indexed reverse lookup: the team (if any) a user belongs to within a
    /// hackathon.
    pub async fn find_team_for_user(
        pool: &PgPool,
        hackathon_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<Option<Team>> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            SELECT t.* FROM teams t
            JOIN team_members m ON m.team_id = t.id
            WHERE t.hackathon_id = $1 AND m.user_id = $2
            "#,
        )
        .bind(hackathon_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(team)
    }

    /// Add a member. Duplicate joins are no-ops; returns whether a new row
    /// was actually inserted.
    pub async fn add_member(pool: &PgPool, team_id: &Uuid, user_id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO team_members (team_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (team_id, user_id) DO NOTHING
            "#,
        )
        .bind(team_id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Remove a member; returns whether a row was deleted
    pub async fn remove_member(pool: &PgPool, team_id: &Uuid, user_id: &Uuid) -> AppResult<bool> {
        let result =
            sqlx::query(r#"DELETE FROM team_members WHERE team_id = $1 AND user_id = $2"#)
                .bind(team_id)
                .bind(user_id)
                .execute(pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Current member count
    pub async fn member_count(pool: &PgPool, team_id: &Uuid) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM team_members WHERE team_id = $1"#)
                .bind(team_id)
                .fetch_one(pool)
                .await?;

        Ok(count)
    }

    /// Rename the team
    pub async fn rename(pool: &PgPool, id: &Uuid, name: &str) -> AppResult<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            UPDATE teams
            SET name = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(team)
    }

    /// Attach or update submission artifacts; fields left as `None` keep
    /// their stored value.
    pub async fn update_artifacts(
        pool: &PgPool,
        id: &Uuid,
        artifact_url: Option<&str>,
        project_description: Option<&str>,
    ) -> AppResult<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            UPDATE teams
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

        Ok(team)
    }

    /// Mark a team submitted. The `submitted = false` guard makes the
    /// transition single-shot even under concurrent attempts; returns `None`
    /// when another submit already won.
    pub async fn mark_submitted(pool: &PgPool, id: &Uuid) -> AppResult<Option<Team>> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            UPDATE teams
            SET submitted = true, submitted_at = NOW(), updated_at = NOW()
            WHERE id = $1 AND submitted = false
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(team)
    }

    /// Set the review status
    pub async fn set_review_status(
        pool: &PgPool,
        id: &Uuid,
        review_status: &str,
    ) -> AppResult<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            UPDATE teams
            SET review_status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(review_status)
        .fetch_one(pool)
        .await?;

        Ok(team)
    }

    /// List teams for a hackathon (for host/admin review)
    pub async fn list_for_hackathon(
        pool: &PgPool,
        hackathon_id: &Uuid,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Team>, i64)> {
        let teams = sqlx::query_as::<_, Team>(
            r#"
            SELECT * FROM teams
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
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM teams WHERE hackathon_id = $1"#)
                .bind(hackathon_id)
                .fetch_one(pool)
                .await?;

        Ok((teams, count))
    }

    /// Count of teams for a hackathon
    pub async fn count_for_hackathon(pool: &PgPool, hackathon_id: &Uuid) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM teams WHERE hackathon_id = $1"#)
                .bind(hackathon_id)
                .fetch_one(pool)
                .await?;

        Ok(count)
    }

    /// Count total teams
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM teams"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
