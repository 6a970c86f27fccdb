//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod hackathon;
pub mod participation;
pub mod practice;
pub mod problem;
pub mod registration;
pub mod team;
pub mod user;

pub use hackathon::*;
pub use participation::*;
pub use practice::*;
pub use problem::*;
pub use registration::*;
pub use team::*;
pub use user::*;
