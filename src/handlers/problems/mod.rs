//! Practice problem handlers

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

/// Problem and practice routes
pub fn routes() -> Router<AppState> {
    Router::new()
        // Problem CRUD
        .route("/", get(handler::list_problems))
        .route("/", post(handler::create_problem))
        .route("/{id}", get(handler::get_problem))
        .route("/{id}", put(handler::update_problem))
        .route("/{id}", delete(handler::delete_problem))
        // Practice
        .route("/{id}/practice", post(handler::submit_practice))
        .route("/{id}/practice", get(handler::list_practice_attempts))
}
