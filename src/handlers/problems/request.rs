//! Problem and practice request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_PROBLEM_STATEMENT_LENGTH, MAX_PROBLEM_TITLE_LENGTH};

/// Create problem request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProblemRequest {
    #[validate(length(min = 1, max = MAX_PROBLEM_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(min = 1, max = MAX_PROBLEM_STATEMENT_LENGTH))]
    pub statement: String,

    /// Difficulty: easy, medium, hard
    pub difficulty: String,

    #[validate(length(max = 128))]
    pub topic: Option<String>,
}

/// Update problem request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProblemRequest {
    #[validate(length(min = 1, max = MAX_PROBLEM_TITLE_LENGTH))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = MAX_PROBLEM_STATEMENT_LENGTH))]
    pub statement: Option<String>,

    pub difficulty: Option<String>,

    #[validate(length(max = 128))]
    pub topic: Option<String>,
}

/// List problems query parameters
#[derive(Debug, Deserialize)]
pub struct ListProblemsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub difficulty: Option<String>,
    pub topic: Option<String>,
    pub search: Option<String>,
}

/// Practice submission request
#[derive(Debug, Deserialize, Validate)]
pub struct PracticeSubmitRequest {
    #[validate(length(min = 1, max = 64))]
    pub language: String,

    #[validate(length(min = 1))]
    pub source_code: String,
}
