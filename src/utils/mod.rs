//! Utility functions

pub mod crypto;
pub mod pagination;
pub mod validation;

pub use crypto::{generate_secure_token, generate_team_code};
pub use pagination::page_params;
pub use validation::{validate_url, validate_username};
