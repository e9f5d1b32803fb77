use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::comment::models::Comment;
use crate::domain::post::models::PostWithComments;

/// Post as rendered on the wire, with its comments nested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostData {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: String,
    pub image: Option<String>,
    pub author_id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub comments: Vec<CommentData>,
}

impl From<&PostWithComments> for PostData {
    fn from(entry: &PostWithComments) -> Self {
        Self {
            id: entry.post.id.0,
            title: entry.post.title.clone(),
            content: entry.post.content.clone(),
            category: entry.post.category.as_str().to_string(),
            image: entry.post.image.as_ref().map(|i| i.as_str().to_string()),
            author_id: entry.post.author_id.0,
            username: entry.post.author_username.clone(),
            created_at: entry.post.created_at,
            comments: entry.comments.iter().map(CommentData::from).collect(),
        }
    }
}

/// Comment as rendered on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentData {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Comment> for CommentData {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.0,
            post_id: comment.post_id.0,
            author_id: comment.author_id.0,
            username: comment.author_username.clone(),
            content: comment.content.as_str().to_string(),
            created_at: comment.created_at,
        }
    }
}
