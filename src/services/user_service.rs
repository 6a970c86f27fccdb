//! User service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::roles,
    db::repositories::{PracticeRepository, RegistrationRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::users::response::UserStatsResponse,
    models::User,
    utils::validation,
};

/// User service for business logic
pub struct UserService;

impl UserService {
    /// Get user by ID
    pub async fn get_user_by_id(pool: &PgPool, id: &Uuid) -> AppResult<User> {
        UserRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// List users with pagination
    pub async fn list_users(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        search: Option<&str>,
        role: Option<&str>,
    ) -> AppResult<(Vec<User>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        UserRepository::list(pool, offset, limit, search, role).await
    }

    /// Update user profile
    pub async fn update_user(
        pool: &PgPool,
        requester_id: &Uuid,
        target_id: &Uuid,
        requester_role: &str,
        display_name: Option<&str>,
        email: Option<&str>,
        current_password: Option<&str>,
        new_password: Option<&str>,
    ) -> AppResult<User> {
        if requester_id != target_id && requester_role != roles::ADMIN {
            return Err(AppError::Forbidden(
                "Cannot update other users' profiles".to_string(),
            ));
        }

        // A password change must prove knowledge of the current one
        let password_hash = if let Some(new_pwd) = new_password {
            validation::validate_password(new_pwd)
                .map_err(|e| AppError::Validation(e.to_string()))?;

            let current_pwd = current_password
                .ok_or_else(|| AppError::Validation("Current password required".to_string()))?;

            let user = Self::get_user_by_id(pool, target_id).await?;

            let argon2 = argon2::Argon2::default();
            let parsed_hash = argon2::PasswordHash::new(&user.password_hash)
                .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;

            if argon2::PasswordVerifier::verify_password(
                &argon2,
                current_pwd.as_bytes(),
                &parsed_hash,
            )
            .is_err()
            {
                return Err(AppError::InvalidCredentials);
            }

            use argon2::password_hash::{PasswordHasher, SaltString, rand_core::OsRng};
            let salt = SaltString::generate(&mut OsRng);
            Some(
                argon2
                    .hash_password(new_pwd.as_bytes(), &salt)
                    .map_err(|e| {
                        AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e))
                    })?
                    .to_string(),
            )
        } else {
            None
        };

        UserRepository::update(
            pool,
            target_id,
            email,
            display_name,
            password_hash.as_deref(),
        )
        .await
    }

    /// Get a user's participation and practice statistics
    pub async fn get_user_stats(pool: &PgPool, user_id: &Uuid) -> AppResult<UserStatsResponse> {
        Self::get_user_by_id(pool, user_id).await?;

        let (hackathon_registrations, practice_attempts, problems_solved) = futures::try_join!(
            RegistrationRepository::count_for_user(pool, user_id),
            PracticeRepository::count_for_user(pool, user_id),
            PracticeRepository::count_solved_for_user(pool, user_id),
        )?;

        Ok(UserStatsResponse {
            user_id: *user_id,
            hackathon_registrations,
            practice_attempts,
            problems_solved,
        })
    }
}
