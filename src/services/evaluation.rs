//! Client for the external AI evaluation service
//!
//! Practice submissions are graded by a remote service that takes a problem
//! statement and source code and answers with a JSON verdict
//! `{correct, accuracy, hint}`. The service occasionally wraps that JSON in
//! Markdown code fences, so the raw body is fence-stripped before parsing.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    config::EvaluatorConfig,
    error::{AppError, AppResult},
};

/// Verdict returned by the evaluation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub correct: bool,
    pub accuracy: f64,
    pub hint: String,
}

/// Request body sent to the evaluation service
#[derive(Debug, Serialize)]
struct EvaluationRequest<'a> {
    statement: &'a str,
    language: &'a str,
    code: &'a str,
}

/// HTTP client for the evaluation service
#[derive(Clone)]
pub struct EvaluationClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl EvaluationClient {
    /// Build a client from configuration
    pub fn new(config: &EvaluatorConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Submit code for evaluation and parse the verdict
    pub async fn evaluate(
        &self,
        statement: &str,
        language: &str,
        code: &str,
    ) -> AppResult<Evaluation> {
        let url = format!("{}/evaluate", self.base_url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&EvaluationRequest {
                statement,
                language,
                code,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Evaluator(format!(
                "evaluation service returned {}",
                status
            )));
        }

        let body = response.text().await?;
        parse_evaluation(&body)
    }
}

/// Parse an evaluation verdict from a possibly fenced response body
pub fn parse_evaluation(raw: &str) -> AppResult<Evaluation> {
    let stripped = strip_code_fences(raw);

    serde_json::from_str(stripped)
        .map_err(|e| AppError::Evaluator(format!("unparseable evaluation response: {}", e)))
}

/// Strip surrounding Markdown code fences (``` or ```json) if present
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop an optional language tag on the opening fence line
    let rest = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };

    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_json() {
        let parsed =
            parse_evaluation(r#"{"correct": true, "accuracy": 0.95, "hint": ""}"#).unwrap();
        assert_eq!(
            parsed,
            Evaluation {
                correct: true,
                accuracy: 0.95,
                hint: String::new(),
            }
        );
    }

    #[test]
    fn test_parse_fenced_json() {
        let raw = "```json\n{\"correct\": false, \"accuracy\": 0.4, \"hint\": \"check the base case\"}\n```";
        let parsed = parse_evaluation(raw).unwrap();
        assert!(!parsed.correct);
        assert_eq!(parsed.hint, "check the base case");
    }

    #[test]
    fn test_parse_fenced_json_without_language_tag() {
        let raw = "```\n{\"correct\": true, \"accuracy\": 1.0, \"hint\": \"\"}\n```";
        assert!(parse_evaluation(raw).unwrap().correct);
    }

    #[test]
    fn test_parse_garbage_is_an_error() {
        assert!(parse_evaluation("the answer looks wrong").is_err());
        assert!(parse_evaluation("```json\nnot json\n```").is_err());
    }
}
