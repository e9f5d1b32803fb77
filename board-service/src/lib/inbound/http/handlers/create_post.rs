use std::path::Path;

use axum::extract::Multipart;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::ApiError;
use crate::domain::post::models::Category;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::ImageUpload;
use crate::domain::post::ports::PostServicePort;
use crate::inbound::http::messages::PostData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Create a post from a multipart form: `title`, `content`, `category` text
/// fields plus an optional `image` file part.
pub async fn create_post(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<PostData>), ApiError> {
    let mut title = None;
    let mut content = None;
    let mut category = None;
    let mut image = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("title") => title = Some(field.text().await.map_err(bad_multipart)?),
            Some("content") => content = Some(field.text().await.map_err(bad_multipart)?),
            Some("category") => category = Some(field.text().await.map_err(bad_multipart)?),
            Some("image") => {
                let extension = field
                    .file_name()
                    .and_then(|file_name| Path::new(file_name).extension())
                    .and_then(|ext| ext.to_str())
                    .map(str::to_string);
                let data = field.bytes().await.map_err(bad_multipart)?.to_vec();
                // An empty file part means no image was attached
                if !data.is_empty() {
                    image = Some(ImageUpload { data, extension });
                }
            }
            _ => {}
        }
    }

    let category = Category::new(category.unwrap_or_default())
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let command = CreatePostCommand {
        author_id: caller.user_id,
        title: title.unwrap_or_default(),
        content: content.unwrap_or_default(),
        category,
        image,
    };

    state
        .post_service
        .create_post(command)
        .await
        .map_err(ApiError::from)
        .map(|ref created| (StatusCode::CREATED, Json(created.into())))
}

fn bad_multipart(err: axum::extract::multipart::MultipartError) -> ApiError {
    ApiError::Validation(format!("Malformed multipart request: {}", err))
}
