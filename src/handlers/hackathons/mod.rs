//! Hackathon management handlers

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

/// Hackathon routes
pub fn routes() -> Router<AppState> {
    Router::new()
        // Hackathon CRUD
        .route("/", get(handler::list_hackathons))
        .route("/", post(handler::create_hackathon))
        .route("/{id}", get(handler::get_hackathon))
        .route("/{id}", put(handler::update_hackathon))
        .route("/{id}", delete(handler::delete_hackathon))
        // Individual participation
        .route("/{id}/register", post(handler::register_individual))
        .route("/{id}/registration", get(handler::my_registration))
        .route("/{id}/registration", put(handler::save_artifacts))
        .route("/{id}/participation", get(handler::get_participation))
        // Teams
        .route("/{id}/teams", post(handler::create_team))
        .route("/{id}/teams", get(handler::list_teams))
        .route("/{id}/teams/join", post(handler::join_team))
        // Review
        .route("/{id}/registrations", get(handler::list_registrations))
        .route(
            "/{id}/registrations/{registration_id}/review",
            put(handler::review_registration),
        )
}
