use thiserror::Error;

use crate::domain::post::models::PostId;

/// Error for PostId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for Category validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CategoryError {
    #[error("Category must not be empty")]
    Empty,
}

/// Error for image blob store operations
#[derive(Debug, Clone, Error)]
pub enum ImageStoreError {
    #[error("Failed to write image blob: {0}")]
    WriteFailed(String),

    #[error("Failed to delete image blob: {0}")]
    DeleteFailed(String),
}

/// Top-level error for all post-related operations
#[derive(Debug, Clone, Error)]
pub enum PostError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid post ID: {0}")]
    InvalidPostId(#[from] PostIdError),

    #[error("Invalid category: {0}")]
    InvalidCategory(#[from] CategoryError),

    // Domain-level errors
    #[error("Post not found: {0}")]
    NotFound(PostId),

    #[error("User is not the author of post {0}")]
    NotAuthor(PostId),

    // Infrastructure errors
    #[error("Image store error: {0}")]
    ImageStore(#[from] ImageStoreError),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
