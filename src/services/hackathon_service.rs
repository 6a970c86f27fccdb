//! Hackathon service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::{hackathon_status, roles, timeline_kinds, timeline_status},
    db::repositories::{
        HackathonRepository, RegistrationRepository, TeamRepository, UserRepository,
    },
    error::{AppError, AppResult},
    handlers::hackathons::{
        request::{CreateHackathonRequest, TimelineInput, UpdateHackathonRequest},
        response::{HackathonResponse, HackathonSummary},
    },
    models::{Hackathon, Windows, derive_windows},
    utils::validation,
};

/// Hackathon service for business logic
pub struct HackathonService;

impl HackathonService {
    /// Create a new hackathon
    pub async fn create_hackathon(
        pool: &PgPool,
        host_id: &Uuid,
        requester_role: &str,
        payload: CreateHackathonRequest,
    ) -> AppResult<HackathonResponse> {
        if !matches!(requester_role, roles::ADMIN | roles::HOST) {
            return Err(AppError::Forbidden(
                "Only hosts can create hackathons".to_string(),
            ));
        }

        let status = payload.status.as_deref().unwrap_or(hackathon_status::OPEN);
        Self::validate_enums(Some(status), &payload.timelines)?;

        let hackathon = HackathonRepository::create(
            pool,
            &payload.name,
            payload.description.as_deref(),
            payload.theme.as_deref(),
            payload.city.as_deref(),
            payload.thumbnail_url.as_deref(),
            host_id,
            status,
            payload.registration_start,
            payload.registration_end,
            &payload.timelines,
            &payload.prizes,
            &payload.sessions,
        )
        .await?;

        Self::to_hackathon_response(pool, hackathon).await
    }

    /// Get hackathon detail by ID
    pub async fn get_hackathon(pool: &PgPool, id: &Uuid) -> AppResult<HackathonResponse> {
        let hackathon = Self::find_required(pool, id).await?;
        Self::to_hackathon_response(pool, hackathon).await
    }

    /// Update hackathon
    pub async fn update_hackathon(
        pool: &PgPool,
        id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
        payload: UpdateHackathonRequest,
    ) -> AppResult<HackathonResponse> {
        let hackathon = Self::find_required(pool, id).await?;
        Self::check_manage_permission(&hackathon, requester_id, requester_role)?;

        Self::validate_enums(
            payload.status.as_deref(),
            payload.timelines.as_deref().unwrap_or_default(),
        )?;

        let updated = HackathonRepository::update(
            pool,
            id,
            payload.name.as_deref(),
            payload.description.as_deref(),
            payload.theme.as_deref(),
            payload.city.as_deref(),
            payload.thumbnail_url.as_deref(),
            payload.status.as_deref(),
            payload.registration_start,
            payload.registration_end,
            payload.timelines.as_deref(),
            payload.prizes.as_deref(),
            payload.sessions.as_deref(),
        )
        .await?;

        Self::to_hackathon_response(pool, updated).await
    }

    /// Delete hackathon
    pub async fn delete_hackathon(
        pool: &PgPool,
        id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
    ) -> AppResult<()> {
        let hackathon = Self::find_required(pool, id).await?;
        Self::check_manage_permission(&hackathon, requester_id, requester_role)?;

        HackathonRepository::delete(pool, id).await
    }

    /// List hackathons with pagination
    pub async fn list_hackathons(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        status: Option<&str>,
        search: Option<&str>,
    ) -> AppResult<(Vec<HackathonSummary>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        let (hackathons, total) = HackathonRepository::list(pool, offset, limit, status, search).await?;

        let summaries: Vec<HackathonSummary> = futures::future::try_join_all(
            hackathons
                .into_iter()
                .map(|h| Self::to_hackathon_summary(pool, h)),
        )
        .await?;

        Ok((summaries, total))
    }

    /// Derive the registration/submission windows for a hackathon
    pub async fn windows(pool: &PgPool, hackathon_id: &Uuid) -> AppResult<Windows> {
        let timelines = HackathonRepository::timelines(pool, hackathon_id).await?;
        Ok(derive_windows(&timelines))
    }

    /// Fetch a hackathon or fail with NotFound
    pub async fn find_required(pool: &PgPool, id: &Uuid) -> AppResult<Hackathon> {
        HackathonRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Hackathon not found".to_string()))
    }

    /// Hosts manage their own hackathons; admins manage all of them
    pub fn check_manage_permission(
        hackathon: &Hackathon,
        requester_id: &Uuid,
        requester_role: &str,
    ) -> AppResult<()> {
        if hackathon.host_id != *requester_id && requester_role != roles::ADMIN {
            return Err(AppError::Forbidden(
                "Cannot manage other hosts' hackathons".to_string(),
            ));
        }
        Ok(())
    }

    // Kinds and statuses are checked here rather than at deserialization so
    // the error names the offending value.
    fn validate_enums(status: Option<&str>, timelines: &[TimelineInput]) -> AppResult<()> {
        if let Some(status) = status {
            validation::validate_hackathon_status(status)
                .map_err(|e| AppError::Validation(e.to_string()))?;
        }

        for entry in timelines {
            validation::validate_timeline_kind(&entry.kind)
                .map_err(|e| AppError::Validation(e.to_string()))?;
            validation::validate_timeline_status(&entry.status)
                .map_err(|e| AppError::Validation(e.to_string()))?;
        }

        Ok(())
    }

    async fn to_hackathon_response(
        pool: &PgPool,
        hackathon: Hackathon,
    ) -> AppResult<HackathonResponse> {
        let (timelines, prizes, sessions, registration_count, team_count, host) = futures::try_join!(
            HackathonRepository::timelines(pool, &hackathon.id),
            HackathonRepository::prizes(pool, &hackathon.id),
            HackathonRepository::sessions(pool, &hackathon.id),
            RegistrationRepository::count_for_hackathon(pool, &hackathon.id),
            TeamRepository::count_for_hackathon(pool, &hackathon.id),
            UserRepository::find_by_id(pool, &hackathon.host_id),
        )?;

        let windows = derive_windows(&timelines);
        let host_name = host
            .map(|h| h.display_name.unwrap_or(h.username))
            .unwrap_or_default();

        Ok(HackathonResponse {
            id: hackathon.id,
            name: hackathon.name,
            description: hackathon.description,
            theme: hackathon.theme,
            city: hackathon.city,
            thumbnail_url: hackathon.thumbnail_url,
            status: hackathon.status,
            host_id: hackathon.host_id,
            host_name,
            registration_start: hackathon.registration_start,
            registration_end: hackathon.registration_end,
            timelines,
            prizes,
            sessions,
            windows,
            registration_count,
            team_count,
            created_at: hackathon.created_at,
            updated_at: hackathon.updated_at,
        })
    }

    async fn to_hackathon_summary(
        pool: &PgPool,
        hackathon: Hackathon,
    ) -> AppResult<HackathonSummary> {
        let (registration_count, team_count) = futures::try_join!(
            RegistrationRepository::count_for_hackathon(pool, &hackathon.id),
            TeamRepository::count_for_hackathon(pool, &hackathon.id),
        )?;

        Ok(HackathonSummary {
            id: hackathon.id,
            name: hackathon.name,
            theme: hackathon.theme,
            city: hackathon.city,
            thumbnail_url: hackathon.thumbnail_url,
            status: hackathon.status,
            registration_count,
            team_count,
            created_at: hackathon.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(kind: &str, status: &str) -> TimelineInput {
        TimelineInput {
            title: "Phase".to_string(),
            kind: kind.to_string(),
            occurs_on: Utc::now(),
            status: status.to_string(),
        }
    }

    #[test]
    fn test_validate_enums_accepts_known_values() {
        let timelines = vec![
            entry(timeline_kinds::REGISTRATION, timeline_status::ONGOING),
            entry(timeline_kinds::OTHER, timeline_status::UPCOMING),
        ];
        assert!(HackathonService::validate_enums(Some(hackathon_status::OPEN), &timelines).is_ok());
    }

    #[test]
    fn test_validate_enums_rejects_unknown_kind() {
        let timelines = vec![entry("ceremony", timeline_status::ONGOING)];
        assert!(HackathonService::validate_enums(None, &timelines).is_err());
    }

    #[test]
    fn test_validate_enums_rejects_unknown_status() {
        assert!(HackathonService::validate_enums(Some("archived"), &[]).is_err());
    }
}
