//! Per-user participation state for a hackathon
//!
//! For any (hackathon, user) pair the lifecycle state is exactly one of
//! unregistered, individually registered, or team member (with a leader
//! sub-state). Resolution is a pure function over two indexed lookups.

use uuid::Uuid;

use super::{Registration, Team};

/// Mutually exclusive participation states
#[derive(Debug, Clone)]
pub enum ParticipationState {
    Unregistered,
    Registered(Registration),
    TeamMember { team: Team, is_leader: bool },
}

impl ParticipationState {
    /// Stable string tag for API responses
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unregistered => "unregistered",
            Self::Registered(_) => "registered",
            Self::TeamMember { is_leader: true, .. } => "team_leader",
            Self::TeamMember { is_leader: false, .. } => "team_member",
        }
    }
}

/// Resolve the participation state from the membership and registration
/// lookups. Team membership takes precedence: once a user is on a team their
/// individual registration (which the write paths prevent anyway) is ignored.
pub fn resolve_participation(
    user_id: &Uuid,
    team: Option<Team>,
    registration: Option<Registration>,
) -> ParticipationState {
    if let Some(team) = team {
        let is_leader = team.is_leader(user_id);
        return ParticipationState::TeamMember { team, is_leader };
    }

    match registration {
        Some(registration) => ParticipationState::Registered(registration),
        None => ParticipationState::Unregistered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::review_status;
    use chrono::Utc;

    fn team(leader_id: Uuid) -> Team {
        Team {
            id: Uuid::new_v4(),
            hackathon_id: Uuid::new_v4(),
            name: "Foo".to_string(),
            code: "CODE1234".to_string(),
            leader_id,
            github_url: "https://github.com/foo".to_string(),
            linkedin_url: "https://linkedin.com/in/foo".to_string(),
            college: "Example University".to_string(),
            artifact_url: None,
            project_description: None,
            submitted: false,
            submitted_at: None,
            review_status: review_status::UNDER_REVIEW.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn registration(user_id: Uuid) -> Registration {
        Registration {
            id: Uuid::new_v4(),
            hackathon_id: Uuid::new_v4(),
            user_id,
            github_url: "https://github.com/alice".to_string(),
            linkedin_url: "https://linkedin.com/in/alice".to_string(),
            college: "Example University".to_string(),
            artifact_url: None,
            project_description: None,
            review_status: review_status::UNDER_REVIEW.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_unregistered_when_no_records() {
        let user = Uuid::new_v4();
        let state = resolve_participation(&user, None, None);
        assert_eq!(state.as_str(), "unregistered");
    }

    #[test]
    fn test_registered_state() {
        let user = Uuid::new_v4();
        let state = resolve_participation(&user, None, Some(registration(user)));
        assert_eq!(state.as_str(), "registered");
    }

    #[test]
    fn test_leader_substate() {
        let user = Uuid::new_v4();
        let state = resolve_participation(&user, Some(team(user)), None);
        assert_eq!(state.as_str(), "team_leader");

        let other_leader = Uuid::new_v4();
        let state = resolve_participation(&user, Some(team(other_leader)), None);
        assert_eq!(state.as_str(), "team_member");
    }

    #[test]
    fn test_team_membership_takes_precedence() {
        // Both records present (unreachable via the write paths, which reject
        // the second one): membership wins and the state stays singular.
        let user = Uuid::new_v4();
        let state = resolve_participation(&user, Some(team(user)), Some(registration(user)));
        assert_eq!(state.as_str(), "team_leader");
    }
}
