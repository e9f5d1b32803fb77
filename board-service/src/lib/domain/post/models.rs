use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::comment::models::Comment;
use crate::domain::post::errors::CategoryError;
use crate::domain::post::errors::PostIdError;
use crate::domain::user::models::UserId;

/// Post aggregate root entity.
///
/// A bulletin board publication, owned exclusively by its author. The author
/// username is carried alongside the id so read models never need a second
/// lookup.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub image: Option<ImageRef>,
    pub author_id: UserId,
    pub author_username: String,
    pub created_at: DateTime<Utc>,
}

/// A post together with its comments, oldest comment first.
#[derive(Debug, Clone)]
pub struct PostWithComments {
    pub post: Post,
    pub comments: Vec<Comment>,
}

/// Post unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(pub Uuid);

impl PostId {
    /// Generate a new random post ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a post ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, PostIdError> {
        Uuid::parse_str(s)
            .map(PostId)
            .map_err(|e| PostIdError::InvalidFormat(e.to_string()))
    }

    /// Get a reference to the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Post category value object.
///
/// Required and non-empty; no fixed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category(String);

impl Category {
    /// Create a new validated category.
    ///
    /// # Errors
    /// * `Empty` - Category is the empty string
    pub fn new(category: String) -> Result<Self, CategoryError> {
        if category.is_empty() {
            return Err(CategoryError::Empty);
        }
        Ok(Self(category))
    }

    /// Get category as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Reference to an uploaded image blob.
///
/// Stores the public path (`/uploads/<filename>`) the blob is served from;
/// the blob itself lives outside the relational store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Get the public path as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// An uploaded image waiting to be stored.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub data: Vec<u8>,
    /// File extension taken from the uploaded filename, if any
    pub extension: Option<String>,
}

/// Command to create a new post with domain types.
///
/// Title and content are free-form and may be empty; only the category is
/// mandatory.
#[derive(Debug)]
pub struct CreatePostCommand {
    pub author_id: UserId,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub image: Option<ImageUpload>,
}

/// A fully-assembled post record ready for insertion.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub image: Option<ImageRef>,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}
