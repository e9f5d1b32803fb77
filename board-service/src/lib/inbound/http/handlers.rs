use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::comment::errors::CommentError;
use crate::domain::post::errors::PostError;
use crate::domain::user::errors::UserError;

pub mod add_comment;
pub mod create_post;
pub mod delete_post;
pub mod list_comments;
pub mod list_posts;
pub mod login;
pub mod register;

// Re-export handlers for easy access
pub use add_comment::add_comment;
pub use create_post::create_post;
pub use delete_post::delete_post;
pub use list_comments::list_comments;
pub use list_posts::list_posts;
pub use login::login;
pub use register::register;

/// Boundary error taxonomy.
///
/// Every variant renders as `{"error": "<message>"}` with its status code;
/// internal detail is logged, never surfaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Bad or missing input (400)
    Validation(String),
    /// Uniqueness violation (400)
    Conflict(String),
    /// Unknown email or wrong password (400)
    InvalidCredentials,
    /// Missing bearer token (401)
    Unauthenticated(String),
    /// Bad, malformed, or expired token (403)
    InvalidToken(String),
    /// Ownership mismatch (403)
    Forbidden(String),
    /// Unknown resource (404)
    NotFound(String),
    /// Datastore or blob store failure (500)
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) | ApiError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::InvalidCredentials => {
                (StatusCode::BAD_REQUEST, "Invalid credentials".to_string())
            }
            ApiError::Unauthenticated(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::InvalidToken(msg) | ApiError::Forbidden(msg) => {
                (StatusCode::FORBIDDEN, msg)
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(detail) => {
                tracing::error!("Request failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidUserId(_)
            | UserError::InvalidUsername(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidPassword(_) => ApiError::Validation(err.to_string()),
            UserError::UsernameAlreadyExists(_) | UserError::EmailAlreadyExists(_) => {
                ApiError::Conflict(err.to_string())
            }
            UserError::NotFoundByEmail(_) | UserError::InvalidCredentials => {
                ApiError::InvalidCredentials
            }
            UserError::DatabaseError(_) | UserError::Unknown(_) => {
                ApiError::Internal(err.to_string())
            }
        }
    }
}

impl From<PostError> for ApiError {
    fn from(err: PostError) -> Self {
        match err {
            PostError::InvalidPostId(_) | PostError::InvalidCategory(_) => {
                ApiError::Validation(err.to_string())
            }
            PostError::NotFound(_) => ApiError::NotFound(err.to_string()),
            PostError::NotAuthor(_) => ApiError::Forbidden(err.to_string()),
            PostError::ImageStore(_) | PostError::DatabaseError(_) | PostError::Unknown(_) => {
                ApiError::Internal(err.to_string())
            }
        }
    }
}

impl From<CommentError> for ApiError {
    fn from(err: CommentError) -> Self {
        match err {
            CommentError::InvalidCommentId(_) | CommentError::InvalidContent(_) => {
                ApiError::Validation(err.to_string())
            }
            CommentError::PostNotFound(_) => ApiError::NotFound(err.to_string()),
            CommentError::DatabaseError(_) | CommentError::Unknown(_) => {
                ApiError::Internal(err.to_string())
            }
        }
    }
}
