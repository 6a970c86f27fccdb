//! Admin request DTOs

use serde::Deserialize;

/// Update user role request
#[derive(Debug, Deserialize)]
pub struct UpdateRoleRequest {
    /// Role: admin, host, participant
    pub role: String,
}

/// Ban user request
#[derive(Debug, Deserialize)]
pub struct BanUserRequest {
    pub reason: Option<String>,

    /// Ban duration in hours; permanent when omitted
    pub duration_hours: Option<i64>,
}

/// Admin user listing query parameters
#[derive(Debug, Deserialize)]
pub struct AdminListUsersQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub role: Option<String>,
}
