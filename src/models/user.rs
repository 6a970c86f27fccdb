//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::roles;

/// User database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub display_name: Option<String>,
    pub role: String,
    pub is_banned: bool,
    pub ban_reason: Option<String>,
    pub ban_expires_at: Option<DateTime<Utc>>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if the user is currently banned
    pub fn is_currently_banned(&self) -> bool {
        if !self.is_banned {
            return false;
        }

        // Check if ban has expired
        if let Some(expires_at) = self.ban_expires_at {
            if expires_at < Utc::now() {
                return false;
            }
        }

        true
    }

    /// Check if user has admin privileges
    pub fn is_admin(&self) -> bool {
        self.role == roles::ADMIN
    }

    /// Check if user can create and manage hackathons
    pub fn can_host(&self) -> bool {
        matches!(self.role.as_str(), roles::ADMIN | roles::HOST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn user(role: &str) -> User {
        User {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: String::new(),
            display_name: None,
            role: role.to_string(),
            is_banned: false,
            ban_reason: None,
            ban_expires_at: None,
            last_login_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_role_helpers() {
        assert!(user(roles::ADMIN).is_admin());
        assert!(user(roles::ADMIN).can_host());
        assert!(user(roles::HOST).can_host());
        assert!(!user(roles::PARTICIPANT).can_host());
    }

    #[test]
    fn test_expired_ban_is_not_active() {
        let mut u = user(roles::PARTICIPANT);
        u.is_banned = true;
        u.ban_expires_at = Some(Utc::now() - Duration::hours(1));
        assert!(!u.is_currently_banned());

        u.ban_expires_at = Some(Utc::now() + Duration::hours(1));
        assert!(u.is_currently_banned());

        u.ban_expires_at = None;
        assert!(u.is_currently_banned());
    }
}
