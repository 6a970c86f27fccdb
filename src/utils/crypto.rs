//! Random token and code generation

use rand::Rng;

use crate::constants::TEAM_CODE_LENGTH;

/// Generate a random alphanumeric token
pub fn generate_secure_token(length: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Generate a shareable team join code
pub fn generate_team_code() -> String {
    generate_secure_token(TEAM_CODE_LENGTH).to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_secure_token() {
        let token1 = generate_secure_token(32);
        let token2 = generate_secure_token(32);

        assert_eq!(token1.len(), 32);
        assert_eq!(token2.len(), 32);
        assert_ne!(token1, token2);
    }

    #[test]
    fn test_generate_team_code() {
        let code = generate_team_code();
        assert_eq!(code.len(), TEAM_CODE_LENGTH);
        assert_eq!(code, code.to_uppercase());
    }
}
