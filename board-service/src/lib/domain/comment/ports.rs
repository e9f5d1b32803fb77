use async_trait::async_trait;

use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentContent;
use crate::domain::comment::models::NewComment;
use crate::domain::post::models::PostId;
use crate::domain::user::models::UserId;

/// Port for comment domain service operations.
#[async_trait]
pub trait CommentServicePort: Send + Sync + 'static {
    /// Add a comment to an existing post.
    ///
    /// # Returns
    /// The created comment joined with the author username
    ///
    /// # Errors
    /// * `PostNotFound` - Post does not exist
    /// * `DatabaseError` - Database operation failed
    async fn add_comment(
        &self,
        post_id: PostId,
        author_id: UserId,
        content: CommentContent,
    ) -> Result<Comment, CommentError>;

    /// Retrieve the comments of a post, oldest first.
    ///
    /// An unknown post id yields an empty list.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_comments(&self, post_id: PostId) -> Result<Vec<Comment>, CommentError>;
}

/// Persistence operations for comments.
#[async_trait]
pub trait CommentRepository: Send + Sync + 'static {
    /// Persist a new comment and return it joined with the author username.
    ///
    /// # Errors
    /// * `PostNotFound` - Referenced post vanished before the insert
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, comment: NewComment) -> Result<Comment, CommentError>;

    /// Retrieve the comments of one post ordered by creation time ascending.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_post(&self, post_id: PostId) -> Result<Vec<Comment>, CommentError>;

    /// Retrieve the comments of a set of posts in one query, ordered by
    /// creation time ascending.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_posts(&self, post_ids: &[PostId]) -> Result<Vec<Comment>, CommentError>;
}
