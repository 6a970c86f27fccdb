//! Problem repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Problem};

/// Repository for practice problem database operations
pub struct ProblemRepository;

impl ProblemRepository {
    /// Create a new problem
    pub async fn create(
        pool: &PgPool,
        title: &str,
        statement: &str,
        difficulty: &str,
        topic: Option<&str>,
        created_by: &Uuid,
    ) -> AppResult<Problem> {
        let problem = sqlx::query_as::<_, Problem>(
            r#"
            INSERT INTO problems (title, statement, difficulty, topic, created_by)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(statement)
        .bind(difficulty)
        .bind(topic)
        .bind(created_by)
        .fetch_one(pool)
        .await?;

        Ok(problem)
    }

    /// Find problem by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Problem>> {
        let problem = sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(problem)
    }

    /// Update problem fields
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        title: Option<&str>,
        statement: Option<&str>,
        difficulty: Option<&str>,
        topic: Option<&str>,
    ) -> AppResult<Problem> {
        let problem = sqlx::query_as::<_, Problem>(
            r#"
            UPDATE problems
            SET
                title = COALESCE($2, title),
                statement = COALESCE($3, statement),
                difficulty = COALESCE($4, difficulty),
                topic = COALESCE($5, topic),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(statement)
        .bind(difficulty)
        .bind(topic)
        .fetch_one(pool)
        .await?;

        Ok(problem)
    }

    /// Delete problem
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM problems WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// List problems with pagination and filters
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        difficulty: Option<&str>,
        topic: Option<&str>,
        search: Option<&str>,
    ) -> AppResult<(Vec<Problem>, i64)> {
        let search_pattern = search.map(|s| format!("%{}%", s));

        let problems = sqlx::query_as::<_, Problem>(
            r#"
            SELECT * FROM problems
            WHERE
                ($1::text IS NULL OR difficulty = $1)
                AND ($2::text IS NULL OR topic = $2)
                AND ($3::text IS NULL OR title ILIKE $3)
            ORDER BY created_at DESC
            OFFSET $4 LIMIT $5
            "#,
        )
        .bind(difficulty)
        .bind(topic)
        .bind(&search_pattern)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM problems
            WHERE
                ($1::text IS NULL OR difficulty = $1)
                AND ($2::text IS NULL OR topic = $2)
                AND ($3::text IS NULL OR title ILIKE $3)
            "#,
        )
        .bind(difficulty)
        .bind(topic)
        .bind(&search_pattern)
        .fetch_one(pool)
        .await?;

        Ok((problems, count))
    }

    /// Count total problems
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM problems"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
