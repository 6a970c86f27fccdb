//! HackBase - Hackathon Discovery and Management Platform
//!
//! This library provides the core functionality for the HackBase backend,
//! a platform where hosts publish hackathons and participants register,
//! form teams and submit projects.
//!
//! # Features
//!
//! - Hackathon publishing with timelines, prizes and mentor sessions
//! - Individual and team participation with join codes
//! - Window-gated registration and submission lifecycle
//! - DSA practice problems graded by an external AI evaluation service
//! - Role-based access control (admin, host, participant)
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
