use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use super::ApiError;
use crate::domain::comment::models::CommentContent;
use crate::domain::comment::ports::CommentServicePort;
use crate::domain::post::models::PostId;
use crate::inbound::http::messages::CommentData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn add_comment(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(post_id): Path<Uuid>,
    Json(body): Json<AddCommentRequestBody>,
) -> Result<(StatusCode, Json<CommentData>), ApiError> {
    let content = CommentContent::new(body.content.unwrap_or_default())
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    state
        .comment_service
        .add_comment(PostId(post_id), caller.user_id, content)
        .await
        .map_err(ApiError::from)
        .map(|ref comment| (StatusCode::CREATED, Json(comment.into())))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddCommentRequestBody {
    content: Option<String>,
}
