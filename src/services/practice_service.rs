//! Practice submission service
//!
//! Grades DSA practice attempts through the external AI evaluation service
//! and keeps the per-user attempt history.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{PracticeRepository, ProblemRepository},
    error::{AppError, AppResult},
    handlers::problems::request::PracticeSubmitRequest,
    models::PracticeSubmission,
    services::EvaluationClient,
    utils::validation,
};

/// Practice service for business logic
pub struct PracticeService;

impl PracticeService {
    /// Submit source code against a problem.
    ///
    /// The verdict comes back from the evaluation service as
    /// `{correct, accuracy, hint}` and is persisted with the attempt.
    pub async fn submit(
        pool: &PgPool,
        evaluator: &EvaluationClient,
        problem_id: &Uuid,
        user_id: &Uuid,
        payload: PracticeSubmitRequest,
    ) -> AppResult<PracticeSubmission> {
        validation::validate_source_code(&payload.source_code)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let problem = ProblemRepository::find_by_id(pool, problem_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))?;

        let verdict = evaluator
            .evaluate(&problem.statement, &payload.language, &payload.source_code)
            .await?;

        PracticeRepository::insert(
            pool,
            problem_id,
            user_id,
            &payload.language,
            &payload.source_code,
            verdict.correct,
            verdict.accuracy,
            &verdict.hint,
        )
        .await
    }

    /// List the caller's attempts against a problem, newest first
    pub async fn attempts(
        pool: &PgPool,
        problem_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<Vec<PracticeSubmission>> {
        // 404 for unknown problems rather than an empty history
        ProblemRepository::find_by_id(pool, problem_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))?;

        PracticeRepository::list_for_user_problem(pool, problem_id, user_id).await
    }
}
