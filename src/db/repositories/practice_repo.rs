//! Practice submission repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::PracticeSubmission};

/// Repository for practice submission database operations
pub struct PracticeRepository;

impl PracticeRepository {
    /// Record a graded practice attempt
    pub async fn insert(
        pool: &PgPool,
        problem_id: &Uuid,
        user_id: &Uuid,
        language: &str,
        source_code: &str,
        correct: bool,
        accuracy: f64,
        hint: &str,
    ) -> AppResult<PracticeSubmission> {
        let submission = sqlx::query_as::<_, PracticeSubmission>(
            r#"
            INSERT INTO practice_submissions (
                problem_id, user_id, language, source_code, correct, accuracy, hint
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(problem_id)
        .bind(user_id)
        .bind(language)
        .bind(source_code)
        .bind(correct)
        .bind(accuracy)
        .bind(hint)
        .fetch_one(pool)
        .await?;

        Ok(submission)
    }

    /// List a user's attempts against a problem, newest first
    pub async fn list_for_user_problem(
        pool: &PgPool,
        problem_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<Vec<PracticeSubmission>> {
        let submissions = sqlx::query_as::<_, PracticeSubmission>(
            r#"
            SELECT * FROM practice_submissions
            WHERE problem_id = $1 AND user_id = $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(problem_id)
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(submissions)
    }

    /// Count attempts by a user
    pub async fn count_for_user(pool: &PgPool, user_id: &Uuid) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM practice_submissions WHERE user_id = $1"#)
                .bind(user_id)
                .fetch_one(pool)
                .await?;

        Ok(count)
    }

    /// Count distinct problems a user has solved
    pub async fn count_solved_for_user(pool: &PgPool, user_id: &Uuid) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(DISTINCT problem_id) FROM practice_submissions
            WHERE user_id = $1 AND correct = true
            "#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }

    /// Count total practice submissions
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM practice_submissions"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
