//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Default refresh token expiry in days
pub const DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Username minimum length
pub const MIN_USERNAME_LENGTH: u64 = 3;

/// Username maximum length
pub const MAX_USERNAME_LENGTH: u64 = 32;

// =============================================================================
// EVALUATOR DEFAULTS
// =============================================================================

/// Default base URL for the external AI evaluation service
pub const DEFAULT_EVALUATOR_URL: &str = "http://localhost:9000";

/// Default request timeout for evaluation calls, in seconds
pub const DEFAULT_EVALUATOR_TIMEOUT_SECONDS: u64 = 30;

// =============================================================================
// TEAM SETTINGS
// =============================================================================

/// Minimum number of members a team needs before the leader may submit
pub const MIN_TEAM_SUBMIT_SIZE: i64 = 4;

/// Length of the generated shareable team join code
pub const TEAM_CODE_LENGTH: usize = 8;

/// Attempts at generating a non-colliding team code before giving up
pub const TEAM_CODE_GENERATION_ATTEMPTS: u32 = 3;

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const HOST: &str = "host";
    pub const PARTICIPANT: &str = "participant";

    /// All user roles
    pub const ALL: &[&str] = &[ADMIN, HOST, PARTICIPANT];
}

// =============================================================================
// HACKATHON SETTINGS
// =============================================================================

/// Hackathon lifecycle statuses
pub mod hackathon_status {
    pub const OPEN: &str = "open";
    pub const CLOSED: &str = "closed";

    /// All hackathon statuses
    pub const ALL: &[&str] = &[OPEN, CLOSED];
}

/// Timeline entry kinds (typed gating tags, decoupled from display titles)
pub mod timeline_kinds {
    pub const REGISTRATION: &str = "registration";
    pub const SUBMISSION: &str = "submission";
    pub const OTHER: &str = "other";

    /// All timeline kinds
    pub const ALL: &[&str] = &[REGISTRATION, SUBMISSION, OTHER];
}

/// Timeline entry statuses
pub mod timeline_status {
    pub const UPCOMING: &str = "upcoming";
    pub const ONGOING: &str = "ongoing";
    pub const COMPLETE: &str = "complete";

    /// All timeline statuses
    pub const ALL: &[&str] = &[UPCOMING, ONGOING, COMPLETE];
}

/// Review statuses for registrations and team submissions
pub mod review_status {
    pub const UNDER_REVIEW: &str = "under_review";
    pub const ACCEPTED: &str = "accepted";
    pub const REJECTED: &str = "rejected";

    /// All review statuses
    pub const ALL: &[&str] = &[UNDER_REVIEW, ACCEPTED, REJECTED];
}

// =============================================================================
// PRACTICE SETTINGS
// =============================================================================

/// Problem difficulty levels
pub mod difficulties {
    pub const EASY: &str = "easy";
    pub const MEDIUM: &str = "medium";
    pub const HARD: &str = "hard";

    /// All difficulty levels
    pub const ALL: &[&str] = &[EASY, MEDIUM, HARD];
}

// =============================================================================
// RATE LIMITING
// =============================================================================

/// Rate limiting configuration
pub mod rate_limits {
    /// Auth endpoint - max requests
    pub const AUTH_MAX_REQUESTS: i64 = 5;
    /// Auth endpoint - window in seconds
    pub const AUTH_WINDOW_SECS: i64 = 60;

    /// Practice submission endpoint - max requests
    pub const PRACTICE_MAX_REQUESTS: i64 = 10;
    /// Practice submission endpoint - window in seconds
    pub const PRACTICE_WINDOW_SECS: i64 = 60;

    /// General API - max requests
    pub const GENERAL_MAX_REQUESTS: i64 = 100;
    /// General API - window in seconds
    pub const GENERAL_WINDOW_SECS: i64 = 60;
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: u32 = 100;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum hackathon name length
pub const MAX_HACKATHON_NAME_LENGTH: u64 = 256;

/// Maximum hackathon description length
pub const MAX_HACKATHON_DESCRIPTION_LENGTH: u64 = 65535;

/// Maximum team name length
pub const MAX_TEAM_NAME_LENGTH: u64 = 128;

/// Maximum college name length
pub const MAX_COLLEGE_LENGTH: u64 = 256;

/// Maximum project description length
pub const MAX_PROJECT_DESCRIPTION_LENGTH: u64 = 65535;

/// Maximum problem title length
pub const MAX_PROBLEM_TITLE_LENGTH: u64 = 256;

/// Maximum problem statement length
pub const MAX_PROBLEM_STATEMENT_LENGTH: u64 = 65535;

/// Maximum source code size in bytes for practice submissions (64 KB)
pub const MAX_SOURCE_CODE_SIZE: usize = 64 * 1024;

// =============================================================================
// API VERSIONING
// =============================================================================

/// Current API version
pub const API_VERSION: &str = "v1";

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";
