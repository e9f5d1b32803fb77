use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::ApiError;
use crate::domain::user::errors::UserError;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<Json<LoginResponseData>, ApiError> {
    let (Some(email), Some(password)) = (body.email, body.password) else {
        return Err(ApiError::Validation("Missing credentials".to_string()));
    };

    // Unknown email and wrong password are indistinguishable to the caller
    let user = state
        .user_service
        .get_user_by_email(&email)
        .await
        .map_err(|e| match e {
            UserError::NotFoundByEmail(_) => ApiError::InvalidCredentials,
            other => ApiError::from(other),
        })?;

    // Argon2 verification is CPU-bound; keep it off the request executor
    let authenticator = Arc::clone(&state.authenticator);
    let user_id = user.id;
    let username = user.username.as_str().to_string();
    let stored_hash = user.password_hash.clone();
    let result = tokio::task::spawn_blocking(move || {
        authenticator.authenticate(&password, &stored_hash, user_id, &username)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Password verification task failed: {}", e)))?
    .map_err(|e| match e {
        auth::AuthenticationError::InvalidCredentials => ApiError::InvalidCredentials,
        auth::AuthenticationError::PasswordError(err) => {
            ApiError::Internal(format!("Password verification failed: {}", err))
        }
        auth::AuthenticationError::JwtError(err) => {
            ApiError::Internal(format!("Token generation failed: {}", err))
        }
    })?;

    Ok(Json(LoginResponseData {
        token: result.access_token,
        user: LoginUserData {
            id: user.id.0,
            username: user.username.as_str().to_string(),
        },
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
    pub user: LoginUserData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginUserData {
    pub id: Uuid,
    pub username: String,
}
