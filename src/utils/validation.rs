//! Input validation utilities

use crate::constants;

/// Validate username format
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if username.len() < 3 {
        return Err("Username must be at least 3 characters");
    }
    if username.len() > 32 {
        return Err("Username must be at most 32 characters");
    }
    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
    {
        return Err("Username can only contain letters, numbers, underscores, and hyphens");
    }
    if !username
        .chars()
        .next()
        .map(|c| c.is_alphabetic())
        .unwrap_or(false)
    {
        return Err("Username must start with a letter");
    }
    Ok(())
}

/// Validate email format (basic validation)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !email.contains('@') {
        return Err("Invalid email format");
    }
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err("Invalid email format");
    }
    if parts[0].is_empty() || parts[1].is_empty() {
        return Err("Invalid email format");
    }
    if !parts[1].contains('.') {
        return Err("Invalid email domain");
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    if password.len() > 128 {
        return Err("Password must be at most 128 characters");
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        return Err("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        return Err("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_numeric()) {
        return Err("Password must contain at least one number");
    }
    Ok(())
}

/// Validate an externally hosted artifact or profile link. Stored verbatim,
/// so only the shape is checked.
pub fn validate_url(url: &str) -> Result<(), &'static str> {
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err("URL must start with http:// or https://");
    }
    if url.len() > 2048 {
        return Err("URL must be at most 2048 characters");
    }
    if url.chars().any(|c| c.is_whitespace()) {
        return Err("URL cannot contain whitespace");
    }
    Ok(())
}

/// Validate user role
pub fn validate_role(role: &str) -> Result<(), &'static str> {
    if constants::roles::ALL.contains(&role) {
        Ok(())
    } else {
        Err("Invalid role")
    }
}

/// Validate hackathon status
pub fn validate_hackathon_status(status: &str) -> Result<(), &'static str> {
    if constants::hackathon_status::ALL.contains(&status) {
        Ok(())
    } else {
        Err("Invalid hackathon status")
    }
}

/// Validate timeline entry kind
pub fn validate_timeline_kind(kind: &str) -> Result<(), &'static str> {
    if constants::timeline_kinds::ALL.contains(&kind) {
        Ok(())
    } else {
        Err("Invalid timeline kind")
    }
}

/// Validate timeline entry status
pub fn validate_timeline_status(status: &str) -> Result<(), &'static str> {
    if constants::timeline_status::ALL.contains(&status) {
        Ok(())
    } else {
        Err("Invalid timeline status")
    }
}

/// Validate review status
pub fn validate_review_status(status: &str) -> Result<(), &'static str> {
    if constants::review_status::ALL.contains(&status) {
        Ok(())
    } else {
        Err("Invalid review status")
    }
}

/// Validate problem difficulty
pub fn validate_difficulty(difficulty: &str) -> Result<(), &'static str> {
    if constants::difficulties::ALL.contains(&difficulty) {
        Ok(())
    } else {
        Err("Invalid difficulty")
    }
}

/// Validate source code size for practice submissions
pub fn validate_source_code(code: &str) -> Result<(), &'static str> {
    if code.is_empty() {
        return Err("Source code cannot be empty");
    }
    if code.len() > constants::MAX_SOURCE_CODE_SIZE {
        return Err("Source code exceeds maximum size of 64KB");
    }
    Ok(())
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Validate and sanitize a team name
pub fn validate_team_name(name: &str) -> Result<String, &'static str> {
    let sanitized = sanitize_string(name);
    if sanitized.is_empty() {
        return Err("Team name cannot be empty");
    }
    if sanitized.len() > 128 {
        return Err("Team name must be at most 128 characters");
    }
    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("Alice_123").is_ok());
        assert!(validate_username("ab").is_err()); // Too short
        assert!(validate_username("123abc").is_err()); // Starts with number
        assert!(validate_username("user@name").is_err()); // Invalid character
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("Password123").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password("nouppercase123").is_err());
        assert!(validate_password("NOLOWERCASE123").is_err());
        assert!(validate_password("NoNumbers").is_err());
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("https://docs.example.com/slides.pdf").is_ok());
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("https://bad url.com").is_err());
    }

    #[test]
    fn test_validate_team_name() {
        assert_eq!(validate_team_name("  Foo  ").unwrap(), "Foo");
        assert!(validate_team_name("   ").is_err());
    }

    #[test]
    fn test_validate_timeline_kind() {
        assert!(validate_timeline_kind("registration").is_ok());
        assert!(validate_timeline_kind("submission").is_ok());
        assert!(validate_timeline_kind("other").is_ok());
        assert!(validate_timeline_kind("Registration").is_err());
    }

    #[test]
    fn test_validate_review_status() {
        assert!(validate_review_status("under_review").is_ok());
        assert!(validate_review_status("accepted").is_ok());
        assert!(validate_review_status("rejected").is_ok());
        assert!(validate_review_status("approved").is_err());
    }
}
