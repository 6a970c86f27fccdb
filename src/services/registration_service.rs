//! Individual registration service
//!
//! Owns the individual half of the participation lifecycle: registering,
//! saving artifacts during the submission window, review decisions and the
//! unified participation lookup.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{RegistrationRepository, TeamRepository},
    error::{AppError, AppResult},
    handlers::hackathons::{
        request::{RegisterIndividualRequest, SaveArtifactsRequest},
        response::ParticipationResponse,
    },
    models::{ParticipationState, Registration, resolve_participation},
    services::{HackathonService, TeamService},
    utils::validation,
};

/// Registration service for business logic
pub struct RegistrationService;

impl RegistrationService {
    /// Register the user as an individual participant.
    ///
    /// The unique (hackathon, user) key makes the operation idempotent-safe:
    /// a second attempt conflicts instead of duplicating.
    pub async fn register_individual(
        pool: &PgPool,
        hackathon_id: &Uuid,
        user_id: &Uuid,
        payload: RegisterIndividualRequest,
    ) -> AppResult<Registration> {
        validation::validate_url(&payload.github_url)
            .map_err(|e| AppError::Validation(format!("github_url: {}", e)))?;
        validation::validate_url(&payload.linkedin_url)
            .map_err(|e| AppError::Validation(format!("linkedin_url: {}", e)))?;

        let hackathon = HackathonService::find_required(pool, hackathon_id).await?;

        if !hackathon.accepts_participants() {
            return Err(AppError::Validation(
                "Hackathon is not accepting registrations".to_string(),
            ));
        }

        let windows = HackathonService::windows(pool, hackathon_id).await?;
        if !windows.registration_open {
            return Err(AppError::Validation(
                "Registration window is not open".to_string(),
            ));
        }

        // A team member cannot also register individually
        if TeamRepository::find_team_for_user(pool, hackathon_id, user_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "Already participating in a team for this hackathon".to_string(),
            ));
        }

        RegistrationRepository::insert_if_absent(
            pool,
            hackathon_id,
            user_id,
            &payload.github_url,
            &payload.linkedin_url,
            &payload.college,
        )
        .await?
        .ok_or_else(|| {
            AppError::AlreadyExists("Already registered for this hackathon".to_string())
        })
    }

    /// Get the caller's registration for a hackathon
    pub async fn my_registration(
        pool: &PgPool,
        hackathon_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<Registration> {
        RegistrationRepository::find_by_user(pool, hackathon_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Registration not found".to_string()))
    }

    /// Save artifacts on the caller's registration.
    ///
    /// Only allowed while the submission window is ongoing.
    pub async fn save_artifacts(
        pool: &PgPool,
        hackathon_id: &Uuid,
        user_id: &Uuid,
        payload: SaveArtifactsRequest,
    ) -> AppResult<Registration> {
        if let Some(url) = payload.artifact_url.as_deref() {
            validation::validate_url(url)
                .map_err(|e| AppError::Validation(format!("artifact_url: {}", e)))?;
        }

        let registration = Self::my_registration(pool, hackathon_id, user_id).await?;

        let windows = HackathonService::windows(pool, hackathon_id).await?;
        if !windows.submission_open {
            return Err(AppError::Validation(
                "Submission window is not open".to_string(),
            ));
        }

        RegistrationRepository::update_artifacts(
            pool,
            &registration.id,
            payload.artifact_url.as_deref(),
            payload.project_description.as_deref(),
        )
        .await
    }

    /// Record a review decision on a registration (host or admin)
    pub async fn set_review_status(
        pool: &PgPool,
        hackathon_id: &Uuid,
        registration_id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
        review_status: &str,
    ) -> AppResult<Registration> {
        validation::validate_review_status(review_status)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let hackathon = HackathonService::find_required(pool, hackathon_id).await?;
        HackathonService::check_manage_permission(&hackathon, requester_id, requester_role)?;

        let registration = RegistrationRepository::find_by_id(pool, registration_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Registration not found".to_string()))?;

        if registration.hackathon_id != *hackathon_id {
            return Err(AppError::NotFound("Registration not found".to_string()));
        }

        RegistrationRepository::set_review_status(pool, registration_id, review_status).await
    }

    /// List registrations for review (host or admin)
    pub async fn list_registrations(
        pool: &PgPool,
        hackathon_id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
        page: u32,
        per_page: u32,
    ) -> AppResult<(Vec<Registration>, i64)> {
        let hackathon = HackathonService::find_required(pool, hackathon_id).await?;
        HackathonService::check_manage_permission(&hackathon, requester_id, requester_role)?;

        let offset = ((page - 1) * per_page) as i64;
        RegistrationRepository::list_for_hackathon(pool, hackathon_id, offset, per_page as i64)
            .await
    }

    /// Resolve the caller's participation state for a hackathon.
    ///
    /// Two indexed lookups, then a pure resolution; team membership wins
    /// over any individual registration.
    pub async fn participation(
        pool: &PgPool,
        hackathon_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<ParticipationResponse> {
        HackathonService::find_required(pool, hackathon_id).await?;

        let (team, registration, windows) = futures::try_join!(
            TeamRepository::find_team_for_user(pool, hackathon_id, user_id),
            RegistrationRepository::find_by_user(pool, hackathon_id, user_id),
            HackathonService::windows(pool, hackathon_id),
        )?;

        let state = resolve_participation(user_id, team, registration);
        let state_tag = state.as_str().to_string();

        let (registration, team) = match state {
            ParticipationState::Unregistered => (None, None),
            ParticipationState::Registered(registration) => (Some(registration), None),
            ParticipationState::TeamMember { team, .. } => {
                let team = TeamService::to_team_response(pool, team).await?;
                (None, Some(team))
            }
        };

        Ok(ParticipationResponse {
            state: state_tag,
            windows,
            registration,
            team,
        })
    }
}
