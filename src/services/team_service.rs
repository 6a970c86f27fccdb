//! Team service
//!
//! Team creation, joining by code, roster changes and the single-shot
//! submission transition.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::{MIN_TEAM_SUBMIT_SIZE, TEAM_CODE_GENERATION_ATTEMPTS, roles},
    db::repositories::{RegistrationRepository, TeamRepository},
    error::{AppError, AppResult},
    handlers::teams::{
        request::{CreateTeamRequest, JoinTeamRequest, RenameTeamRequest, SaveTeamArtifactsRequest},
        response::{TeamMemberResponse, TeamResponse},
    },
    models::{SubmitBlock, Team},
    services::HackathonService,
    utils::{generate_team_code, validation},
};

/// Team service for business logic
pub struct TeamService;

impl TeamService {
    /// Create a team with the caller as leader.
    ///
    /// The team row and the leader's membership row land in one
    /// transaction, so the leader invariant holds from the first committed
    /// state.
    pub async fn create_team(
        pool: &PgPool,
        hackathon_id: &Uuid,
        user_id: &Uuid,
        payload: CreateTeamRequest,
    ) -> AppResult<TeamResponse> {
        validation::validate_url(&payload.github_url)
            .map_err(|e| AppError::Validation(format!("github_url: {}", e)))?;
        validation::validate_url(&payload.linkedin_url)
            .map_err(|e| AppError::Validation(format!("linkedin_url: {}", e)))?;
        let name = validation::validate_team_name(&payload.name)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let hackathon = HackathonService::find_required(pool, hackathon_id).await?;
        if !hackathon.accepts_participants() {
            return Err(AppError::Validation(
                "Hackathon is not accepting participants".to_string(),
            ));
        }

        let windows = HackathonService::windows(pool, hackathon_id).await?;
        if !windows.registration_open {
            return Err(AppError::Validation(
                "Registration window is not open".to_string(),
            ));
        }

        Self::check_not_participating(pool, hackathon_id, user_id).await?;

        // The code is unique per hackathon; retry on the rare collision
        let mut last_err = AppError::Conflict("Could not generate a team code".to_string());
        for _ in 0..TEAM_CODE_GENERATION_ATTEMPTS {
            let code = generate_team_code();
            match TeamRepository::create_with_leader(
                pool,
                hackathon_id,
                &name,
                &code,
                user_id,
                &payload.github_url,
                &payload.linkedin_url,
                &payload.college,
            )
            .await
            {
                Ok(team) => return Self::to_team_response(pool, team).await,
                Err(AppError::AlreadyExists(e)) => {
                    last_err = AppError::AlreadyExists(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_err)
    }

    /// Join a team by its shareable code.
    ///
    /// Rejoining one's own team is a no-op success; membership in another
    /// team or an individual registration is a conflict.
    pub async fn join_team(
        pool: &PgPool,
        hackathon_id: &Uuid,
        user_id: &Uuid,
        payload: JoinTeamRequest,
    ) -> AppResult<TeamResponse> {
        let hackathon = HackathonService::find_required(pool, hackathon_id).await?;
        if !hackathon.accepts_participants() {
            return Err(AppError::Validation(
                "Hackathon is not accepting participants".to_string(),
            ));
        }

        let windows = HackathonService::windows(pool, hackathon_id).await?;
        if !windows.registration_open {
            return Err(AppError::Validation(
                "Registration window is not open".to_string(),
            ));
        }

        let code = payload.code.trim().to_uppercase();
        let team = TeamRepository::find_by_code(pool, hackathon_id, &code)
            .await?
            .ok_or_else(|| AppError::NotFound("No team with that code".to_string()))?;

        if team.submitted {
            return Err(AppError::Validation(
                "Team has already submitted".to_string(),
            ));
        }

        if let Some(existing) = TeamRepository::find_team_for_user(pool, hackathon_id, user_id).await? {
            if existing.id == team.id {
                // Rejoining with the same code changes nothing
                return Self::to_team_response(pool, team).await;
            }
            return Err(AppError::Conflict(
                "Already a member of another team in this hackathon".to_string(),
            ));
        }

        if RegistrationRepository::find_by_user(pool, hackathon_id, user_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "Already registered individually for this hackathon".to_string(),
            ));
        }

        TeamRepository::add_member(pool, &team.id, user_id).await?;

        Self::to_team_response(pool, team).await
    }

    /// Get team detail. Members, the host and admins may look
    pub async fn get_team(
        pool: &PgPool,
        team_id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
    ) -> AppResult<TeamResponse> {
        let team = Self::find_required(pool, team_id).await?;

        let is_member = TeamRepository::find_team_for_user(pool, &team.hackathon_id, requester_id)
            .await?
            .is_some_and(|t| t.id == team.id);

        if !is_member && requester_role != roles::ADMIN {
            let hackathon = HackathonService::find_required(pool, &team.hackathon_id).await?;
            if hackathon.host_id != *requester_id {
                return Err(AppError::Forbidden(
                    "Not a member of this team".to_string(),
                ));
            }
        }

        Self::to_team_response(pool, team).await
    }

    /// Rename the team (leader only, before submission)
    pub async fn rename_team(
        pool: &PgPool,
        team_id: &Uuid,
        requester_id: &Uuid,
        payload: RenameTeamRequest,
    ) -> AppResult<TeamResponse> {
        let name = validation::validate_team_name(&payload.name)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let team = Self::find_required(pool, team_id).await?;
        Self::check_leader_and_unsubmitted(&team, requester_id)?;

        let team = TeamRepository::rename(pool, team_id, &name).await?;
        Self::to_team_response(pool, team).await
    }

    /// Remove a member (leader removes anyone but themselves; a member may
    /// leave on their own). Not allowed after submission.
    pub async fn remove_member(
        pool: &PgPool,
        team_id: &Uuid,
        member_id: &Uuid,
        requester_id: &Uuid,
    ) -> AppResult<()> {
        let team = Self::find_required(pool, team_id).await?;

        if team.submitted {
            return Err(AppError::Validation(
                "Team has already submitted".to_string(),
            ));
        }

        if team.is_leader(member_id) {
            return Err(AppError::Validation(
                "The leader cannot leave the team".to_string(),
            ));
        }

        let leaving_self = requester_id == member_id;
        if !leaving_self && !team.is_leader(requester_id) {
            return Err(AppError::Forbidden(
                "Only the leader can remove members".to_string(),
            ));
        }

        let removed = TeamRepository::remove_member(pool, team_id, member_id).await?;
        if !removed {
            return Err(AppError::NotFound("Member not found".to_string()));
        }

        Ok(())
    }

    /// Save artifacts on the team (leader only, before submission)
    pub async fn save_artifacts(
        pool: &PgPool,
        team_id: &Uuid,
        requester_id: &Uuid,
        payload: SaveTeamArtifactsRequest,
    ) -> AppResult<TeamResponse> {
        if let Some(url) = payload.artifact_url.as_deref() {
            validation::validate_url(url)
                .map_err(|e| AppError::Validation(format!("artifact_url: {}", e)))?;
        }

        let team = Self::find_required(pool, team_id).await?;
        Self::check_leader_and_unsubmitted(&team, requester_id)?;

        let team = TeamRepository::update_artifacts(
            pool,
            team_id,
            payload.artifact_url.as_deref(),
            payload.project_description.as_deref(),
        )
        .await?;

        Self::to_team_response(pool, team).await
    }

    /// Submit the team's project.
    ///
    /// The gating conditions live in [`Team::check_submit`]; the guarded
    /// update in the repository keeps the transition single-shot under
    /// concurrent attempts.
    pub async fn submit_team(
        pool: &PgPool,
        team_id: &Uuid,
        requester_id: &Uuid,
    ) -> AppResult<TeamResponse> {
        let team = Self::find_required(pool, team_id).await?;

        let (member_count, windows) = futures::try_join!(
            TeamRepository::member_count(pool, team_id),
            HackathonService::windows(pool, &team.hackathon_id),
        )?;

        team.check_submit(requester_id, member_count, windows.registration_open)
            .map_err(|block| match block {
                SubmitBlock::NotLeader => {
                    AppError::Forbidden("Only the leader can submit".to_string())
                }
                SubmitBlock::AlreadySubmitted => {
                    AppError::Conflict("Team has already submitted".to_string())
                }
                SubmitBlock::WindowClosed => {
                    AppError::Validation("Submission is closed for this hackathon".to_string())
                }
                SubmitBlock::TooFewMembers { have } => AppError::Validation(format!(
                    "Team needs at least {} members to submit, has {}",
                    MIN_TEAM_SUBMIT_SIZE, have
                )),
            })?;

        let team = TeamRepository::mark_submitted(pool, team_id)
            .await?
            .ok_or_else(|| AppError::Conflict("Team has already submitted".to_string()))?;

        Self::to_team_response(pool, team).await
    }

    /// Record a review decision on a team submission (host or admin)
    pub async fn set_review_status(
        pool: &PgPool,
        team_id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
        review_status: &str,
    ) -> AppResult<TeamResponse> {
        validation::validate_review_status(review_status)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let team = Self::find_required(pool, team_id).await?;

        let hackathon = HackathonService::find_required(pool, &team.hackathon_id).await?;
        HackathonService::check_manage_permission(&hackathon, requester_id, requester_role)?;

        let team = TeamRepository::set_review_status(pool, team_id, review_status).await?;
        Self::to_team_response(pool, team).await
    }

    /// List teams for review (host or admin)
    pub async fn list_teams(
        pool: &PgPool,
        hackathon_id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
        page: u32,
        per_page: u32,
    ) -> AppResult<(Vec<TeamResponse>, i64)> {
        let hackathon = HackathonService::find_required(pool, hackathon_id).await?;
        HackathonService::check_manage_permission(&hackathon, requester_id, requester_role)?;

        let offset = ((page - 1) * per_page) as i64;
        let (teams, total) =
            TeamRepository::list_for_hackathon(pool, hackathon_id, offset, per_page as i64).await?;

        let teams = futures::future::try_join_all(
            teams.into_iter().map(|t| Self::to_team_response(pool, t)),
        )
        .await?;

        Ok((teams, total))
    }

    /// Assemble the team detail response with its member roster
    pub async fn to_team_response(pool: &PgPool, team: Team) -> AppResult<TeamResponse> {
        let members = sqlx::query_as::<_, TeamMemberResponse>(
            r#"
            SELECT m.user_id, u.username, u.display_name, m.joined_at
            FROM team_members m
            JOIN users u ON u.id = m.user_id
            WHERE m.team_id = $1
            ORDER BY m.joined_at
            "#,
        )
        .bind(team.id)
        .fetch_all(pool)
        .await?;

        Ok(TeamResponse::from_team(team, members))
    }

    async fn find_required(pool: &PgPool, team_id: &Uuid) -> AppResult<Team> {
        TeamRepository::find_by_id(pool, team_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))
    }

    async fn check_not_participating(
        pool: &PgPool,
        hackathon_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<()> {
        if TeamRepository::find_team_for_user(pool, hackathon_id, user_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "Already a member of a team in this hackathon".to_string(),
            ));
        }

        if RegistrationRepository::find_by_user(pool, hackathon_id, user_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "Already registered individually for this hackathon".to_string(),
            ));
        }

        Ok(())
    }

    fn check_leader_and_unsubmitted(team: &Team, requester_id: &Uuid) -> AppResult<()> {
        if !team.is_leader(requester_id) {
            return Err(AppError::Forbidden(
                "Only the leader can modify the team".to_string(),
            ));
        }
        if team.submitted {
            return Err(AppError::Validation(
                "Team has already submitted".to_string(),
            ));
        }
        Ok(())
    }
}
