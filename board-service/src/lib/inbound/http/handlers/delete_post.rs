use axum::extract::Path;
use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use super::ApiError;
use crate::domain::post::models::PostId;
use crate::domain::post::ports::PostServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_post(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<DeletePostResponseData>, ApiError> {
    state
        .post_service
        .delete_post(PostId(post_id), caller.user_id)
        .await?;

    Ok(Json(DeletePostResponseData { success: true }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletePostResponseData {
    pub success: bool,
}
