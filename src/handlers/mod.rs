//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod hackathons;
pub mod health;
pub mod problems;
pub mod teams;
pub mod users;

use axum::{Router, middleware};

use crate::{
    middleware::auth::{auth_middleware, optional_auth_middleware},
    state::AppState,
};

/// Create all API routes.
///
/// The optional auth layer attaches the user to every request that carries
/// a valid token; admin routes additionally require one.
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/auth", auth::routes())
        .nest("/users", users::routes())
        .nest("/hackathons", hackathons::routes())
        .nest("/teams", teams::routes())
        .nest("/problems", problems::routes())
        .nest(
            "/admin",
            admin::routes().route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        .layer(middleware::from_fn_with_state(
            state,
            optional_auth_middleware,
        ))
}
