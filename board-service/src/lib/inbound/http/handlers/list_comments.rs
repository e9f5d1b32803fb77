use axum::extract::Path;
use axum::extract::State;
use axum::Json;
use uuid::Uuid;

use super::ApiError;
use crate::domain::comment::ports::CommentServicePort;
use crate::domain::post::models::PostId;
use crate::inbound::http::messages::CommentData;
use crate::inbound::http::router::AppState;

pub async fn list_comments(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<Vec<CommentData>>, ApiError> {
    let comments = state.comment_service.list_comments(PostId(post_id)).await?;

    Ok(Json(comments.iter().map(CommentData::from).collect()))
}
