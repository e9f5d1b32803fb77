use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::comment::models::Comment;
use crate::domain::comment::ports::CommentRepository;
use crate::domain::post::errors::PostError;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::NewPost;
use crate::domain::post::models::PostId;
use crate::domain::post::models::PostWithComments;
use crate::domain::post::ports::ImageStore;
use crate::domain::post::ports::PostRepository;
use crate::domain::post::ports::PostServicePort;
use crate::domain::user::models::UserId;

/// Concrete implementation of PostServicePort.
///
/// Coordinates the post repository, the comment repository (for attaching
/// comments to listings) and the image blob store.
pub struct PostService<PR, CR, IS>
where
    PR: PostRepository,
    CR: CommentRepository,
    IS: ImageStore,
{
    post_repository: Arc<PR>,
    comment_repository: Arc<CR>,
    image_store: Arc<IS>,
}

impl<PR, CR, IS> PostService<PR, CR, IS>
where
    PR: PostRepository,
    CR: CommentRepository,
    IS: ImageStore,
{
    /// Create a new post service with injected dependencies.
    pub fn new(post_repository: Arc<PR>, comment_repository: Arc<CR>, image_store: Arc<IS>) -> Self {
        Self {
            post_repository,
            comment_repository,
            image_store,
        }
    }
}

#[async_trait]
impl<PR, CR, IS> PostServicePort for PostService<PR, CR, IS>
where
    PR: PostRepository,
    CR: CommentRepository,
    IS: ImageStore,
{
    async fn create_post(
        &self,
        command: CreatePostCommand,
    ) -> Result<PostWithComments, PostError> {
        // Blob first, row second: a failure in between can orphan a blob but
        // never produce a row pointing at a missing file.
        let image = match command.image {
            Some(upload) => Some(self.image_store.save(upload).await?),
            None => None,
        };

        let post = self
            .post_repository
            .create(NewPost {
                id: PostId::new(),
                title: command.title,
                content: command.content,
                category: command.category,
                image,
                author_id: command.author_id,
                created_at: Utc::now(),
            })
            .await?;

        Ok(PostWithComments {
            post,
            comments: Vec::new(),
        })
    }

    async fn list_posts(&self) -> Result<Vec<PostWithComments>, PostError> {
        let posts = self.post_repository.list_all().await?;
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        // One batched query for the whole id set, grouped in memory
        let ids: Vec<PostId> = posts.iter().map(|post| post.id).collect();
        let comments = self
            .comment_repository
            .find_by_posts(&ids)
            .await
            .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        let mut grouped: HashMap<PostId, Vec<Comment>> = HashMap::new();
        for comment in comments {
            grouped.entry(comment.post_id).or_default().push(comment);
        }

        Ok(posts
            .into_iter()
            .map(|post| {
                let comments = grouped.remove(&post.id).unwrap_or_default();
                PostWithComments { post, comments }
            })
            .collect())
    }

    async fn delete_post(&self, post_id: PostId, caller_id: UserId) -> Result<(), PostError> {
        let post = self
            .post_repository
            .find_by_id(post_id)
            .await?
            .ok_or(PostError::NotFound(post_id))?;

        if post.author_id != caller_id {
            return Err(PostError::NotAuthor(post_id));
        }

        // Row removal is the user-visible contract; a stale blob is tolerable
        if let Some(image) = &post.image {
            if let Err(e) = self.image_store.delete(image).await {
                tracing::warn!(
                    "Failed to delete image {} for post {}: {}",
                    image,
                    post_id,
                    e
                );
            }
        }

        self.post_repository.delete(post_id).await
    }
}
