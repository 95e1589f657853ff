use crate::error::StoreError;
use crate::models::post::{NewPost, Post};
use crate::utils::pagination::PaginationParams;

use super::Store;

impl Store {
    pub async fn create_post(&self, new_post: &NewPost) -> Result<Post, StoreError> {
        let post = sqlx::query_as::<_, Post>(
            "INSERT INTO posts (user_id, title, image_url) VALUES ($1, $2, $3) RETURNING id, user_id, title, image_url",
        )
        .bind(new_post.user_id)
        .bind(&new_post.title)
        .bind(&new_post.image_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    pub async fn post(&self, id: i64) -> Result<Option<Post>, StoreError> {
        let post = sqlx::query_as::<_, Post>(
            "SELECT id, user_id, title, image_url FROM posts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    /// A page of the global feed, newest first.
    pub async fn posts(&self, pagination: &PaginationParams) -> Result<Vec<Post>, StoreError> {
        let offset = pagination.offset.unwrap_or(0);
        let limit = pagination.limit.unwrap_or(10);

        let posts = sqlx::query_as::<_, Post>(
            "SELECT id, user_id, title, image_url FROM posts ORDER BY id DESC LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    pub async fn posts_by_user(&self, user_id: i64) -> Result<Vec<Post>, StoreError> {
        let posts = sqlx::query_as::<_, Post>(
            "SELECT id, user_id, title, image_url FROM posts WHERE user_id = $1 ORDER BY id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    pub async fn update_post(&self, id: i64, fields: &NewPost) -> Result<Option<Post>, StoreError> {
        let post = sqlx::query_as::<_, Post>(
            "UPDATE posts SET user_id = $1, title = $2, image_url = $3 WHERE id = $4 RETURNING id, user_id, title, image_url",
        )
        .bind(fields.user_id)
        .bind(&fields.title)
        .bind(&fields.image_url)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    pub async fn delete_post(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
