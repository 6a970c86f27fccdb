//! Hackathon models: the event itself plus its timeline, prize and
//! guidance-session sub-entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::{hackathon_status, timeline_kinds, timeline_status};

/// Hackathon database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Hackathon {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub theme: Option<String>,
    pub city: Option<String>,
    pub thumbnail_url: Option<String>,
    pub host_id: Uuid,
    pub status: String,
    pub registration_start: Option<DateTime<Utc>>,
    pub registration_end: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Hackathon {
    /// Check if the hackathon is accepting any participation actions
    pub fn is_open(&self) -> bool {
        self.status == hackathon_status::OPEN
    }

    /// Check if registration-phase actions (individual registration, team
    /// creation, joining by code) are allowed at the hackathon level. The
    /// timeline-derived windows gate on top of this.
    pub fn accepts_participants(&self) -> bool {
        self.is_open() && self.is_within_registration_bounds()
    }

    /// Check if the current moment falls inside the optional wall-clock
    /// registration bounds. Missing bounds do not restrict.
    pub fn is_within_registration_bounds(&self) -> bool {
        let now = Utc::now();

        if let Some(start) = self.registration_start {
            if now < start {
                return false;
            }
        }

        if let Some(end) = self.registration_end {
            if now > end {
                return false;
            }
        }

        true
    }
}

/// Timeline entry on a hackathon.
///
/// The `kind` tag drives registration/submission window gating; `title` is
/// display-only free text and never participates in gating decisions.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub id: Uuid,
    pub hackathon_id: Uuid,
    pub title: String,
    pub kind: String,
    pub occurs_on: DateTime<Utc>,
    pub status: String,
    pub position: i32,
}

/// Prize listed on a hackathon
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Prize {
    pub id: Uuid,
    pub hackathon_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub position: i32,
}

/// Mentor guidance session attached to a hackathon
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct GuidanceSession {
    pub id: Uuid,
    pub hackathon_id: Uuid,
    pub title: String,
    pub mentor: Option<String>,
    pub scheduled_at: DateTime<Utc>,
    pub meeting_url: Option<String>,
}

/// Gating flags derived from a hackathon's timeline entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Windows {
    pub registration_open: bool,
    pub submission_open: bool,
}

/// Derive the registration/submission windows from timeline entries.
///
/// A window is open when any entry of the matching kind has status `ongoing`.
pub fn derive_windows(entries: &[TimelineEntry]) -> Windows {
    let mut windows = Windows::default();

    for entry in entries {
        if entry.status != timeline_status::ONGOING {
            continue;
        }
        match entry.kind.as_str() {
            timeline_kinds::REGISTRATION => windows.registration_open = true,
            timeline_kinds::SUBMISSION => windows.submission_open = true,
            _ => {}
        }
    }

    windows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn entry(kind: &str, status: &str, title: &str) -> TimelineEntry {
        TimelineEntry {
            id: Uuid::new_v4(),
            hackathon_id: Uuid::new_v4(),
            title: title.to_string(),
            kind: kind.to_string(),
            occurs_on: Utc::now(),
            status: status.to_string(),
            position: 0,
        }
    }

    #[test]
    fn test_no_entries_means_closed_windows() {
        assert_eq!(derive_windows(&[]), Windows::default());
    }

    #[test]
    fn test_ongoing_registration_opens_window() {
        let windows = derive_windows(&[entry(
            timeline_kinds::REGISTRATION,
            timeline_status::ONGOING,
            "Registration",
        )]);
        assert!(windows.registration_open);
        assert!(!windows.submission_open);
    }

    #[test]
    fn test_non_ongoing_entries_do_not_open_windows() {
        let windows = derive_windows(&[
            entry(
                timeline_kinds::REGISTRATION,
                timeline_status::UPCOMING,
                "Registration",
            ),
            entry(
                timeline_kinds::SUBMISSION,
                timeline_status::COMPLETE,
                "Project Submission",
            ),
        ]);
        assert_eq!(windows, Windows::default());
    }

    #[test]
    fn test_title_wording_is_irrelevant_to_gating() {
        // Any casing or wording of the title opens the window as long as the
        // kind tag matches and the entry is ongoing.
        let windows = derive_windows(&[entry(
            timeline_kinds::SUBMISSION,
            timeline_status::ONGOING,
            "Project Submission Details",
        )]);
        assert!(windows.submission_open);

        // Conversely, a suggestive title with an untyped kind opens nothing.
        let windows = derive_windows(&[entry(
            timeline_kinds::OTHER,
            timeline_status::ONGOING,
            "project submission",
        )]);
        assert!(!windows.submission_open);
    }

    fn hackathon(
        status: &str,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Hackathon {
        Hackathon {
            id: Uuid::new_v4(),
            name: "HackWeek".to_string(),
            description: None,
            theme: None,
            city: None,
            thumbnail_url: None,
            host_id: Uuid::new_v4(),
            status: status.to_string(),
            registration_start: start,
            registration_end: end,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_registration_bounds() {
        let now = Utc::now();

        // No bounds: unrestricted
        assert!(hackathon(hackathon_status::OPEN, None, None).is_within_registration_bounds());

        // Inside bounds
        assert!(
            hackathon(
                hackathon_status::OPEN,
                Some(now - Duration::hours(1)),
                Some(now + Duration::hours(1)),
            )
            .is_within_registration_bounds()
        );

        // Before start
        assert!(
            !hackathon(hackathon_status::OPEN, Some(now + Duration::hours(1)), None)
                .is_within_registration_bounds()
        );

        // After end
        assert!(
            !hackathon(hackathon_status::OPEN, None, Some(now - Duration::hours(1)))
                .is_within_registration_bounds()
        );
    }

    #[test]
    fn test_is_open() {
        assert!(hackathon(hackathon_status::OPEN, None, None).is_open());
        assert!(!hackathon(hackathon_status::CLOSED, None, None).is_open());
    }

    #[test]
    fn test_accepts_participants_requires_open_status_and_bounds() {
        let now = Utc::now();

        assert!(hackathon(hackathon_status::OPEN, None, None).accepts_participants());

        // Closed status blocks regardless of bounds
        assert!(!hackathon(hackathon_status::CLOSED, None, None).accepts_participants());

        // Expired bounds block even an open hackathon; every registration
        // action (individual, create team, join team) shares this predicate
        assert!(
            !hackathon(hackathon_status::OPEN, None, Some(now - Duration::hours(1)))
                .accepts_participants()
        );
        assert!(
            !hackathon(hackathon_status::OPEN, Some(now + Duration::hours(1)), None)
                .accepts_participants()
        );
    }
}
