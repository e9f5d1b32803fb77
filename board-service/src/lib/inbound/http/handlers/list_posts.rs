use axum::extract::State;
use axum::Json;

use super::ApiError;
use crate::domain::post::ports::PostServicePort;
use crate::inbound::http::messages::PostData;
use crate::inbound::http::router::AppState;

pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<PostData>>, ApiError> {
    let posts = state.post_service.list_posts().await?;

    Ok(Json(posts.iter().map(PostData::from).collect()))
}
