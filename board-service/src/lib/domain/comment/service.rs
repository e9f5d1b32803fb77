use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentContent;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::models::NewComment;
use crate::domain::comment::ports::CommentRepository;
use crate::domain::comment::ports::CommentServicePort;
use crate::domain::post::models::PostId;
use crate::domain::post::ports::PostRepository;
use crate::domain::user::models::UserId;

/// Concrete implementation of CommentServicePort.
///
/// Uses the post repository to validate that the target post exists before
/// inserting.
pub struct CommentService<CR, PR>
where
    CR: CommentRepository,
    PR: PostRepository,
{
    comment_repository: Arc<CR>,
    post_repository: Arc<PR>,
}

impl<CR, PR> CommentService<CR, PR>
where
    CR: CommentRepository,
    PR: PostRepository,
{
    /// Create a new comment service with injected dependencies.
    pub fn new(comment_repository: Arc<CR>, post_repository: Arc<PR>) -> Self {
        Self {
            comment_repository,
            post_repository,
        }
    }
}

#[async_trait]
impl<CR, PR> CommentServicePort for CommentService<CR, PR>
where
    CR: CommentRepository,
    PR: PostRepository,
{
    async fn add_comment(
        &self,
        post_id: PostId,
        author_id: UserId,
        content: CommentContent,
    ) -> Result<Comment, CommentError> {
        // Verify the post exists
        self.post_repository
            .find_by_id(post_id)
            .await
            .map_err(|e| CommentError::DatabaseError(e.to_string()))?
            .ok_or(CommentError::PostNotFound(post_id))?;

        self.comment_repository
            .create(NewComment {
                id: CommentId::new(),
                post_id,
                author_id,
                content,
                created_at: Utc::now(),
            })
            .await
    }

    async fn list_comments(&self, post_id: PostId) -> Result<Vec<Comment>, CommentError> {
        self.comment_repository.find_by_post(post_id).await
    }
}
