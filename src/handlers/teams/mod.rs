//! Team management handlers
//!
//! Team creation and joining live under the hackathon routes; everything
//! scoped to an existing team lives here.

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Team routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(handler::get_team))
        .route("/{id}", put(handler::rename_team))
        .route("/{id}/members/{member_id}", delete(handler::remove_member))
        .route("/{id}/artifacts", put(handler::save_artifacts))
        .route("/{id}/submit", post(handler::submit_team))
        .route("/{id}/review", put(handler::review_team))
}
