//! Team models and the team submission gating rules

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::MIN_TEAM_SUBMIT_SIZE;

/// Team database model.
///
/// `code` is the shareable join code handed out-of-band to prospective
/// members. The leader always has a row in `team_members`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Team {
    pub id: Uuid,
    pub hackathon_id: Uuid,
    pub name: String,
    pub code: String,
    pub leader_id: Uuid,
    pub github_url: String,
    pub linkedin_url: String,
    pub college: String,
    pub artifact_url: Option<String>,
    pub project_description: Option<String>,
    pub submitted: bool,
    pub submitted_at: Option<DateTime<Utc>>,
    pub review_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Why a team submission attempt is blocked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlock {
    NotLeader,
    AlreadySubmitted,
    WindowClosed,
    TooFewMembers { have: i64 },
}

impl Team {
    /// Check if the given user leads this team
    pub fn is_leader(&self, user_id: &Uuid) -> bool {
        self.leader_id == *user_id
    }

    /// Decide whether a submission attempt may proceed.
    ///
    /// Every blocking condition is independent: the caller must be the
    /// leader, the team must not already be submitted, the registration
    /// window must be ongoing, and the team needs at least
    /// [`MIN_TEAM_SUBMIT_SIZE`] members.
    pub fn check_submit(
        &self,
        requester_id: &Uuid,
        member_count: i64,
        registration_open: bool,
    ) -> Result<(), SubmitBlock> {
        if !self.is_leader(requester_id) {
            return Err(SubmitBlock::NotLeader);
        }
        if self.submitted {
            return Err(SubmitBlock::AlreadySubmitted);
        }
        if !registration_open {
            return Err(SubmitBlock::WindowClosed);
        }
        if member_count < MIN_TEAM_SUBMIT_SIZE {
            return Err(SubmitBlock::TooFewMembers { have: member_count });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::review_status;

    fn team(leader_id: Uuid, submitted: bool) -> Team {
        Team {
            id: Uuid::new_v4(),
            hackathon_id: Uuid::new_v4(),
            name: "Foo".to_string(),
            code: "AB12CD34".to_string(),
            leader_id,
            github_url: "https://github.com/foo".to_string(),
            linkedin_url: "https://linkedin.com/in/foo".to_string(),
            college: "Some College".to_string(),
            artifact_url: None,
            project_description: None,
            submitted,
            submitted_at: None,
            review_status: review_status::UNDER_REVIEW.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_submit_allowed_when_all_conditions_hold() {
        let leader = Uuid::new_v4();
        assert_eq!(team(leader, false).check_submit(&leader, 4, true), Ok(()));
    }

    #[test]
    fn test_submit_blocked_for_non_leader() {
        let leader = Uuid::new_v4();
        let other = Uuid::new_v4();
        assert_eq!(
            team(leader, false).check_submit(&other, 4, true),
            Err(SubmitBlock::NotLeader)
        );
    }

    #[test]
    fn test_submit_blocked_when_already_submitted() {
        let leader = Uuid::new_v4();
        assert_eq!(
            team(leader, true).check_submit(&leader, 4, true),
            Err(SubmitBlock::AlreadySubmitted)
        );
    }

    #[test]
    fn test_submit_blocked_when_window_closed() {
        let leader = Uuid::new_v4();
        assert_eq!(
            team(leader, false).check_submit(&leader, 4, false),
            Err(SubmitBlock::WindowClosed)
        );
    }

    #[test]
    fn test_submit_blocked_below_member_floor() {
        let leader = Uuid::new_v4();
        assert_eq!(
            team(leader, false).check_submit(&leader, 2, true),
            Err(SubmitBlock::TooFewMembers { have: 2 })
        );
        assert_eq!(
            team(leader, false).check_submit(&leader, 3, true),
            Err(SubmitBlock::TooFewMembers { have: 3 })
        );
        // Exactly at the floor is allowed
        assert_eq!(team(leader, false).check_submit(&leader, 4, true), Ok(()));
    }
}
