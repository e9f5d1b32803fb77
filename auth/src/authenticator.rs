use chrono::Duration;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token
/// issuance.
///
/// Holds the server-side signing secret and the token lifetime, so callers
/// never touch raw JWT machinery.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_ttl: Duration,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    /// * `token_ttl_days` - Token lifetime in days
    pub fn new(jwt_secret: &[u8], token_ttl_days: i64) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
            token_ttl: Duration::days(token_ttl_days),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a plaintext password against a stored hash.
    ///
    /// # Errors
    /// * `PasswordError` - Hash format is invalid
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> Result<bool, PasswordError> {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Issue a signed identity token for a user.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_token(
        &self,
        user_id: impl ToString,
        username: &str,
    ) -> Result<String, JwtError> {
        let claims = Claims::for_user(user_id, username, self.token_ttl);
        self.jwt_handler.encode(&claims)
    }

    /// Verify credentials and issue a token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Password verification failed
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        user_id: impl ToString,
        username: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.verify_password(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.issue_token(user_id, username)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Validate a token and recover the identity claims.
    ///
    /// This is the only authoritative way to derive a caller identity from a
    /// token; payloads decoded without signature verification must never be
    /// used for access decisions.
    ///
    /// # Errors
    /// * `JwtError` - Bad signature, malformed structure, or expiry
    pub fn verify_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticator() -> Authenticator {
        Authenticator::new(b"test_secret_key_at_least_32_bytes!", 7)
    }

    #[test]
    fn test_authenticate_success() {
        let auth = authenticator();

        let password = "my_password";
        let hash = auth.hash_password(password).expect("Failed to hash password");

        let result = auth
            .authenticate(password, &hash, "user123", "alice")
            .expect("Authentication failed");
        assert!(!result.access_token.is_empty());

        // The token resolves back to the same identity
        let claims = auth
            .verify_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.username, "alice");
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let auth = authenticator();

        let hash = auth
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = auth.authenticate("wrong_password", &hash, "user123", "alice");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_issue_and_verify_token() {
        let auth = authenticator();

        let token = auth
            .issue_token("user123", "alice")
            .expect("Failed to issue token");

        let claims = auth.verify_token(&token).expect("Failed to verify token");
        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_verify_invalid_token() {
        let auth = authenticator();

        let result = auth.verify_token("invalid.token.here");
        assert!(result.is_err());
    }

    #[test]
    fn test_verify_token_from_other_secret() {
        let other = Authenticator::new(b"other_secret_key_at_least_32_byte!", 7);
        let token = other
            .issue_token("user123", "alice")
            .expect("Failed to issue token");

        let result = authenticator().verify_token(&token);
        assert!(result.is_err());
    }
}
