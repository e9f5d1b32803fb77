use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentContent;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::models::NewComment;
use crate::domain::comment::ports::CommentRepository;
use crate::domain::post::models::PostId;
use crate::domain::user::models::UserId;

pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn comment_from_row(row: &PgRow) -> Result<Comment, CommentError> {
    Ok(Comment {
        id: CommentId(row.try_get("id").map_err(db_error)?),
        post_id: PostId(row.try_get("post_id").map_err(db_error)?),
        author_id: UserId(row.try_get("author_id").map_err(db_error)?),
        author_username: row.try_get("username").map_err(db_error)?,
        content: CommentContent::new(row.try_get("content").map_err(db_error)?)?,
        created_at: row.try_get("created_at").map_err(db_error)?,
    })
}

fn db_error(err: sqlx::Error) -> CommentError {
    CommentError::DatabaseError(err.to_string())
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn create(&self, comment: NewComment) -> Result<Comment, CommentError> {
        // Insert and re-fetch the joined row in one transaction so a
        // concurrent reader never sees the gap.
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        sqlx::query(
            r#"
            INSERT INTO comments (id, content, author_id, post_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(comment.id.0)
        .bind(comment.content.as_str())
        .bind(comment.author_id.0)
        .bind(comment.post_id.0)
        .bind(comment.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            // The post can vanish between the service's existence check and
            // this insert; the foreign key is the backstop.
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation()
                    && db_err.constraint() == Some("comments_post_id_fkey")
                {
                    return CommentError::PostNotFound(comment.post_id);
                }
            }
            CommentError::DatabaseError(e.to_string())
        })?;

        let row = sqlx::query(
            r#"
            SELECT c.id, c.content, c.author_id, c.post_id, c.created_at, u.username
            FROM comments c
            JOIN users u ON u.id = c.author_id
            WHERE c.id = $1
            "#,
        )
        .bind(comment.id.0)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_error)?;

        tx.commit().await.map_err(db_error)?;

        comment_from_row(&row)
    }

    async fn find_by_post(&self, post_id: PostId) -> Result<Vec<Comment>, CommentError> {
        let rows = sqlx::query(
            r#"
            SELECT c.id, c.content, c.author_id, c.post_id, c.created_at, u.username
            FROM comments c
            JOIN users u ON u.id = c.author_id
            WHERE c.post_id = $1
            ORDER BY c.created_at ASC
            "#,
        )
        .bind(post_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.iter().map(comment_from_row).collect()
    }

    async fn find_by_posts(&self, post_ids: &[PostId]) -> Result<Vec<Comment>, CommentError> {
        let uuids: Vec<Uuid> = post_ids.iter().map(|id| id.0).collect();

        let rows = sqlx::query(
            r#"
            SELECT c.id, c.content, c.author_id, c.post_id, c.created_at, u.username
            FROM comments c
            JOIN users u ON u.id = c.author_id
            WHERE c.post_id = ANY($1)
            ORDER BY c.created_at ASC
            "#,
        )
        .bind(&uuids)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.iter().map(comment_from_row).collect()
    }
}
