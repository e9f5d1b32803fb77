use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use super::ApiError;
use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::PasswordError;
use crate::domain::user::errors::UsernameError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<RegisterResponseData>, ApiError> {
    state
        .user_service
        .register_user(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| Json(user.into()))
}

/// HTTP request body for registration (raw JSON).
///
/// Fields are optional so a missing field is reported by the boundary
/// taxonomy, not by body deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Invalid username: {0}")]
    Username(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid password: {0}")]
    Password(#[from] PasswordError),
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterUserCommand, ParseRegisterRequestError> {
        let username = Username::new(
            self.username
                .ok_or(ParseRegisterRequestError::MissingField("username"))?,
        )?;
        let email = EmailAddress::new(
            self.email
                .ok_or(ParseRegisterRequestError::MissingField("email"))?,
        )?;
        let password = Password::new(
            self.password
                .ok_or(ParseRegisterRequestError::MissingField("password"))?,
        )?;
        Ok(RegisterUserCommand::new(username, email, password))
    }
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

/// Public user fields returned after registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

impl From<&User> for RegisterResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_missing_password() {
        let request = RegisterRequest {
            username: Some("alice".to_string()),
            email: Some("a@x.com".to_string()),
            password: None,
        };
        let result = request.try_into_command();
        assert!(matches!(
            result,
            Err(ParseRegisterRequestError::MissingField("password"))
        ));
    }

    #[test]
    fn test_parse_rejects_short_password() {
        let request = RegisterRequest {
            username: Some("alice".to_string()),
            email: Some("a@x.com".to_string()),
            password: Some("abc".to_string()),
        };
        let result = request.try_into_command();
        assert!(matches!(
            result,
            Err(ParseRegisterRequestError::Password(_))
        ));
    }

    #[test]
    fn test_parse_valid_request() {
        let request = RegisterRequest {
            username: Some("alice".to_string()),
            email: Some("a@x.com".to_string()),
            password: Some("secret1".to_string()),
        };
        let command = request.try_into_command().expect("Failed to parse");
        assert_eq!(command.username.as_str(), "alice");
        assert_eq!(command.email.as_str(), "a@x.com");
    }
}
