use async_trait::async_trait;

use crate::domain::post::errors::ImageStoreError;
use crate::domain::post::errors::PostError;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::ImageRef;
use crate::domain::post::models::ImageUpload;
use crate::domain::post::models::NewPost;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::models::PostWithComments;
use crate::domain::user::models::UserId;

/// Port for post domain service operations.
#[async_trait]
pub trait PostServicePort: Send + Sync + 'static {
    /// Create a new post, storing the uploaded image blob first if present.
    ///
    /// # Returns
    /// The created post joined with the author username, comments empty
    ///
    /// # Errors
    /// * `ImageStore` - Image blob could not be written
    /// * `DatabaseError` - Database operation failed
    async fn create_post(&self, command: CreatePostCommand)
        -> Result<PostWithComments, PostError>;

    /// Retrieve all posts, newest first, each with its comments attached.
    ///
    /// Comments for the whole result set are fetched in one batched query
    /// and grouped in memory, never one query per post.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_posts(&self) -> Result<Vec<PostWithComments>, PostError>;

    /// Delete a post on behalf of a caller.
    ///
    /// Only the author may delete. The row removal is the contract; the
    /// associated image blob is deleted best-effort and a failure there is
    /// logged, not surfaced.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `NotAuthor` - Caller does not own the post
    /// * `DatabaseError` - Database operation failed
    async fn delete_post(&self, post_id: PostId, caller_id: UserId) -> Result<(), PostError>;
}

/// Persistence operations for the post aggregate.
#[async_trait]
pub trait PostRepository: Send + Sync + 'static {
    /// Persist a new post and return it joined with the author username.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, post: NewPost) -> Result<Post, PostError>;

    /// Retrieve a post by identifier.
    ///
    /// # Returns
    /// Optional post entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, PostError>;

    /// Retrieve all posts ordered by creation time descending.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Post>, PostError>;

    /// Remove a post from storage.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: PostId) -> Result<(), PostError>;
}

/// Blob storage for uploaded images.
#[async_trait]
pub trait ImageStore: Send + Sync + 'static {
    /// Store an uploaded image under a generated filename, keeping the
    /// upload's file extension if it has one.
    ///
    /// # Returns
    /// Public reference the blob is served from
    ///
    /// # Errors
    /// * `WriteFailed` - Blob could not be written
    async fn save(&self, upload: ImageUpload) -> Result<ImageRef, ImageStoreError>;

    /// Delete a stored image blob.
    ///
    /// # Errors
    /// * `DeleteFailed` - Blob missing or not removable
    async fn delete(&self, image: &ImageRef) -> Result<(), ImageStoreError>;
}
