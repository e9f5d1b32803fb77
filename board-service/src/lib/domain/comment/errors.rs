use thiserror::Error;

use crate::domain::post::models::PostId;

/// Error for CommentId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for CommentContent validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentContentError {
    #[error("Comment content must not be empty")]
    Empty,
}

/// Top-level error for all comment-related operations
#[derive(Debug, Clone, Error)]
pub enum CommentError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid comment ID: {0}")]
    InvalidCommentId(#[from] CommentIdError),

    #[error("Invalid comment content: {0}")]
    InvalidContent(#[from] CommentContentError),

    // Domain-level errors
    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
