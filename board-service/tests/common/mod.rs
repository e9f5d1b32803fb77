use std::sync::Mutex;

use async_trait::async_trait;
use board_service::domain::comment::errors::CommentError;
use board_service::domain::comment::models::Comment;
use board_service::domain::comment::models::NewComment;
use board_service::domain::comment::ports::CommentRepository;
use board_service::domain::post::errors::ImageStoreError;
use board_service::domain::post::errors::PostError;
use board_service::domain::post::models::ImageRef;
use board_service::domain::post::models::ImageUpload;
use board_service::domain::post::models::NewPost;
use board_service::domain::post::models::Post;
use board_service::domain::post::models::PostId;
use board_service::domain::post::ports::ImageStore;
use board_service::domain::post::ports::PostRepository;
use board_service::domain::user::errors::UserError;
use board_service::domain::user::models::User;
use board_service::domain::user::models::UserId;
use board_service::domain::user::ports::UserRepository;
use uuid::Uuid;

/// In-memory stand-in for the Postgres and blob stores.
///
/// Implements every repository port plus the image store on one shared value
/// so a full register/login/post/comment flow can run without external
/// services. Ordering and uniqueness behave like the real schema.
#[derive(Default)]
pub struct InMemoryBoard {
    users: Mutex<Vec<User>>,
    posts: Mutex<Vec<NewPost>>,
    comments: Mutex<Vec<NewComment>>,
    blobs: Mutex<Vec<String>>,
    fail_blob_delete: bool,
}

impl InMemoryBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A board whose blob deletions always fail, for soft-failure tests.
    pub fn with_failing_blob_deletes() -> Self {
        Self {
            fail_blob_delete: true,
            ..Self::default()
        }
    }

    pub fn blob_count(&self) -> usize {
        self.blobs.lock().unwrap().len()
    }

    fn username_of(&self, author_id: UserId) -> Result<String, String> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.id == author_id)
            .map(|user| user.username.as_str().to_string())
            .ok_or_else(|| format!("No user with id {}", author_id))
    }

    fn joined_post(&self, record: &NewPost) -> Result<Post, String> {
        Ok(Post {
            id: record.id,
            title: record.title.clone(),
            content: record.content.clone(),
            category: record.category.clone(),
            image: record.image.clone(),
            author_id: record.author_id,
            author_username: self.username_of(record.author_id)?,
            created_at: record.created_at,
        })
    }

    fn joined_comment(&self, record: &NewComment) -> Result<Comment, String> {
        Ok(Comment {
            id: record.id,
            post_id: record.post_id,
            author_id: record.author_id,
            author_username: self.username_of(record.author_id)?,
            content: record.content.clone(),
            created_at: record.created_at,
        })
    }
}

#[async_trait]
impl UserRepository for InMemoryBoard {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == user.username) {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }
        if users.iter().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.email.as_str() == email)
            .cloned())
    }
}

#[async_trait]
impl PostRepository for InMemoryBoard {
    async fn create(&self, post: NewPost) -> Result<Post, PostError> {
        let joined = self.joined_post(&post).map_err(PostError::DatabaseError)?;
        self.posts.lock().unwrap().push(post);
        Ok(joined)
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, PostError> {
        let record = {
            let posts = self.posts.lock().unwrap();
            posts.iter().find(|post| post.id == id).cloned()
        };
        record
            .map(|record| self.joined_post(&record).map_err(PostError::DatabaseError))
            .transpose()
    }

    async fn list_all(&self) -> Result<Vec<Post>, PostError> {
        let mut records = self.posts.lock().unwrap().clone();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records
            .iter()
            .map(|record| self.joined_post(record).map_err(PostError::DatabaseError))
            .collect()
    }

    async fn delete(&self, id: PostId) -> Result<(), PostError> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|post| post.id != id);
        if posts.len() == before {
            return Err(PostError::NotFound(id));
        }
        // The schema cascades comment removal on post deletion
        self.comments
            .lock()
            .unwrap()
            .retain(|comment| comment.post_id != id);
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for InMemoryBoard {
    async fn create(&self, comment: NewComment) -> Result<Comment, CommentError> {
        if !self
            .posts
            .lock()
            .unwrap()
            .iter()
            .any(|post| post.id == comment.post_id)
        {
            return Err(CommentError::PostNotFound(comment.post_id));
        }
        let joined = self
            .joined_comment(&comment)
            .map_err(CommentError::DatabaseError)?;
        self.comments.lock().unwrap().push(comment);
        Ok(joined)
    }

    async fn find_by_post(&self, post_id: PostId) -> Result<Vec<Comment>, CommentError> {
        let mut records: Vec<NewComment> = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|comment| comment.post_id == post_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        records
            .iter()
            .map(|record| {
                self.joined_comment(record)
                    .map_err(CommentError::DatabaseError)
            })
            .collect()
    }

    async fn find_by_posts(&self, post_ids: &[PostId]) -> Result<Vec<Comment>, CommentError> {
        let mut records: Vec<NewComment> = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|comment| post_ids.contains(&comment.post_id))
            .cloned()
            .collect();
        records.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        records
            .iter()
            .map(|record| {
                self.joined_comment(record)
                    .map_err(CommentError::DatabaseError)
            })
            .collect()
    }
}

#[async_trait]
impl ImageStore for InMemoryBoard {
    async fn save(&self, upload: ImageUpload) -> Result<ImageRef, ImageStoreError> {
        let file_name = match upload.extension {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
            None => Uuid::new_v4().to_string(),
        };
        let path = format!("/uploads/{}", file_name);
        self.blobs.lock().unwrap().push(path.clone());
        Ok(ImageRef::new(path))
    }

    async fn delete(&self, image: &ImageRef) -> Result<(), ImageStoreError> {
        if self.fail_blob_delete {
            return Err(ImageStoreError::DeleteFailed(
                "blob store unavailable".to_string(),
            ));
        }
        let mut blobs = self.blobs.lock().unwrap();
        let before = blobs.len();
        blobs.retain(|path| path != image.as_str());
        if blobs.len() == before {
            return Err(ImageStoreError::DeleteFailed(format!(
                "No such blob: {}",
                image
            )));
        }
        Ok(())
    }
}
