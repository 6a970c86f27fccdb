//! Rate limiting middleware
//!
//! Fixed-window counters in Redis, keyed by client IP and a coarse path
//! bucket so bursts against one endpoint group do not starve the rest.

use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use redis::AsyncCommands;

use crate::{constants::rate_limits, error::AppError, state::AppState};

/// Rate limit middleware
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let ip = addr.ip().to_string();
    let path = request.uri().path().to_string();

    let (limit, window) = limits_for(&path);
    let key = format!("rate_limit:{}:{}", ip, path_bucket(&path));
    let mut redis = state.redis();

    let count: i64 = redis.incr(&key, 1).await.unwrap_or(0);

    if count == 1 {
        // Start the window on the first request
        let _: () = redis.expire(&key, window).await.unwrap_or(());
    }

    if count > limit {
        return Err(AppError::TooManyRequests);
    }

    Ok(next.run(request).await)
}

/// Pick the limit and window for a path
fn limits_for(path: &str) -> (i64, i64) {
    if path.starts_with("/api/v1/auth") {
        (rate_limits::AUTH_MAX_REQUESTS, rate_limits::AUTH_WINDOW_SECS)
    } else if is_practice_path(path) {
        (
            rate_limits::PRACTICE_MAX_REQUESTS,
            rate_limits::PRACTICE_WINDOW_SECS,
        )
    } else {
        (
            rate_limits::GENERAL_MAX_REQUESTS,
            rate_limits::GENERAL_WINDOW_SECS,
        )
    }
}

/// Get bucket for path (for grouping similar endpoints)
fn path_bucket(path: &str) -> &str {
    if path.starts_with("/api/v1/auth") {
        "auth"
    } else if is_practice_path(path) {
        "practice"
    } else if path.starts_with("/api/v1/hackathons") {
        "hackathons"
    } else if path.starts_with("/api/v1/teams") {
        "teams"
    } else if path.starts_with("/api/v1/problems") {
        "problems"
    } else {
        "general"
    }
}

fn is_practice_path(path: &str) -> bool {
    path.starts_with("/api/v1/problems") && path.ends_with("/practice")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_buckets() {
        assert_eq!(path_bucket("/api/v1/auth/login"), "auth");
        assert_eq!(path_bucket("/api/v1/hackathons"), "hackathons");
        assert_eq!(path_bucket("/api/v1/teams/abc/submit"), "teams");
        assert_eq!(path_bucket("/api/v1/problems"), "problems");
        assert_eq!(path_bucket("/api/v1/problems/abc/practice"), "practice");
        assert_eq!(path_bucket("/health"), "general");
    }

    #[test]
    fn test_practice_paths_use_tighter_limit() {
        let (practice_limit, _) = limits_for("/api/v1/problems/abc/practice");
        let (general_limit, _) = limits_for("/api/v1/problems/abc");
        assert!(practice_limit < general_limit);
    }
}
