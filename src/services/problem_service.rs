//! Practice problem service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::roles,
    db::repositories::ProblemRepository,
    error::{AppError, AppResult},
    handlers::problems::request::{CreateProblemRequest, UpdateProblemRequest},
    models::Problem,
    utils::validation,
};

/// Problem service for business logic
pub struct ProblemService;

impl ProblemService {
    /// Create a new practice problem (hosts and admins)
    pub async fn create_problem(
        pool: &PgPool,
        creator_id: &Uuid,
        creator_role: &str,
        payload: CreateProblemRequest,
    ) -> AppResult<Problem> {
        if !matches!(creator_role, roles::ADMIN | roles::HOST) {
            return Err(AppError::Forbidden(
                "Only hosts can create problems".to_string(),
            ));
        }

        validation::validate_difficulty(&payload.difficulty)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        ProblemRepository::create(
            pool,
            &payload.title,
            &payload.statement,
            &payload.difficulty,
            payload.topic.as_deref(),
            creator_id,
        )
        .await
    }

    /// Get problem by ID
    pub async fn get_problem(pool: &PgPool, id: &Uuid) -> AppResult<Problem> {
        ProblemRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))
    }

    /// Update problem (creator or admin)
    pub async fn update_problem(
        pool: &PgPool,
        id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
        payload: UpdateProblemRequest,
    ) -> AppResult<Problem> {
        let problem = Self::get_problem(pool, id).await?;

        if problem.created_by != *requester_id && requester_role != roles::ADMIN {
            return Err(AppError::Forbidden(
                "Cannot update other users' problems".to_string(),
            ));
        }

        if let Some(difficulty) = payload.difficulty.as_deref() {
            validation::validate_difficulty(difficulty)
                .map_err(|e| AppError::Validation(e.to_string()))?;
        }

        ProblemRepository::update(
            pool,
            id,
            payload.title.as_deref(),
            payload.statement.as_deref(),
            payload.difficulty.as_deref(),
            payload.topic.as_deref(),
        )
        .await
    }

    /// Delete problem (creator or admin)
    pub async fn delete_problem(
        pool: &PgPool,
        id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
    ) -> AppResult<()> {
        let problem = Self::get_problem(pool, id).await?;

        if problem.created_by != *requester_id && requester_role != roles::ADMIN {
            return Err(AppError::Forbidden(
                "Cannot delete other users' problems".to_string(),
            ));
        }

        ProblemRepository::delete(pool, id).await
    }

    /// List problems with pagination and filters
    pub async fn list_problems(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        difficulty: Option<&str>,
        topic: Option<&str>,
        search: Option<&str>,
    ) -> AppResult<(Vec<Problem>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        ProblemRepository::list(pool, offset, per_page as i64, difficulty, topic, search).await
    }
}
