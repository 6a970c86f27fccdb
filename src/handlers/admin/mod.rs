//! Admin management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Admin routes
pub fn routes() -> Router<AppState> {
    Router::new()
        // User management
        .route("/users", get(handler::list_all_users))
        .route("/users/{id}/role", put(handler::update_user_role))
        .route("/users/{id}/ban", post(handler::ban_user))
        .route("/users/{id}/unban", post(handler::unban_user))
        // System management
        .route("/stats", get(handler::get_system_stats))
}
