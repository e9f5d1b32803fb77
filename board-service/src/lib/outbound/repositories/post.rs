use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::Category;
use crate::domain::post::models::ImageRef;
use crate::domain::post::models::NewPost;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::ports::PostRepository;
use crate::domain::user::models::UserId;

pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn post_from_row(row: &PgRow) -> Result<Post, PostError> {
    let image: Option<String> = row.try_get("image").map_err(db_error)?;

    Ok(Post {
        id: PostId(row.try_get("id").map_err(db_error)?),
        title: row.try_get("title").map_err(db_error)?,
        content: row.try_get("content").map_err(db_error)?,
        category: Category::new(row.try_get("category").map_err(db_error)?)?,
        image: image.map(ImageRef::new),
        author_id: UserId(row.try_get("author_id").map_err(db_error)?),
        author_username: row.try_get("username").map_err(db_error)?,
        created_at: row.try_get("created_at").map_err(db_error)?,
    })
}

fn db_error(err: sqlx::Error) -> PostError {
    PostError::DatabaseError(err.to_string())
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, PostError> {
        // Insert and re-fetch the joined row in one transaction so a
        // concurrent reader never sees the gap.
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        sqlx::query(
            r#"
            INSERT INTO posts (id, title, content, category, image, author_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(post.id.0)
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.category.as_str())
        .bind(post.image.as_ref().map(|image| image.as_str()))
        .bind(post.author_id.0)
        .bind(post.created_at)
        .execute(&mut *tx)
        .await
        .map_err(db_error)?;

        let row = sqlx::query(
            r#"
            SELECT p.id, p.title, p.content, p.category, p.image, p.author_id, p.created_at,
                   u.username
            FROM posts p
            JOIN users u ON u.id = p.author_id
            WHERE p.id = $1
            "#,
        )
        .bind(post.id.0)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_error)?;

        tx.commit().await.map_err(db_error)?;

        post_from_row(&row)
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, PostError> {
        let row = sqlx::query(
            r#"
            SELECT p.id, p.title, p.content, p.category, p.image, p.author_id, p.created_at,
                   u.username
            FROM posts p
            JOIN users u ON u.id = p.author_id
            WHERE p.id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        row.as_ref().map(post_from_row).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Post>, PostError> {
        let rows = sqlx::query(
            r#"
            SELECT p.id, p.title, p.content, p.category, p.image, p.author_id, p.created_at,
                   u.username
            FROM posts p
            JOIN users u ON u.id = p.author_id
            ORDER BY p.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.iter().map(post_from_row).collect()
    }

    async fn delete(&self, id: PostId) -> Result<(), PostError> {
        let result = sqlx::query(
            r#"
            DELETE FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(PostError::NotFound(id));
        }

        Ok(())
    }
}
