//! Authentication utilities for the bulletin board service:
//! - Password hashing (Argon2id)
//! - Signed identity tokens (JWT, HS256)
//! - An `Authenticator` coordinating both for login flows
//!
//! The service defines its own domain traits and adapts these implementations,
//! so this crate stays free of HTTP and storage concerns.
//!
//! # Examples
//!
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", 7);
//!
//! // Register: hash the password for storage
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify the password and issue a token
//! let result = auth.authenticate("password123", &hash, "user123", "alice").unwrap();
//!
//! // Authorize: verify the token and recover the identity
//! let claims = auth.verify_token(&result.access_token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! assert_eq!(claims.username, "alice");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
