use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::comment::errors::CommentContentError;
use crate::domain::comment::errors::CommentIdError;
use crate::domain::post::models::PostId;
use crate::domain::user::models::UserId;

/// Comment entity.
///
/// A reply attached to a post, carried with the author username for read
/// models. Ordered by creation time ascending within a post.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub author_id: UserId,
    pub author_username: String,
    pub content: CommentContent,
    pub created_at: DateTime<Utc>,
}

/// Comment unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub Uuid);

impl CommentId {
    /// Generate a new random comment ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a comment ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, CommentIdError> {
        Uuid::parse_str(s)
            .map(CommentId)
            .map_err(|e| CommentIdError::InvalidFormat(e.to_string()))
    }

    /// Get a reference to the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Comment content value object.
///
/// Required and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentContent(String);

impl CommentContent {
    /// Create a new validated comment content.
    ///
    /// # Errors
    /// * `Empty` - Content is the empty string
    pub fn new(content: String) -> Result<Self, CommentContentError> {
        if content.is_empty() {
            return Err(CommentContentError::Empty);
        }
        Ok(Self(content))
    }

    /// Get content as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommentContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A fully-assembled comment record ready for insertion.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub id: CommentId,
    pub post_id: PostId,
    pub author_id: UserId,
    pub content: CommentContent,
    pub created_at: DateTime<Utc>,
}
