use crate::error::StoreError;
use crate::models::comment::{Comment, NewComment};

use super::Store;

impl Store {
    pub async fn create_comment(&self, new_comment: &NewComment) -> Result<Comment, StoreError> {
        let comment = sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (user_id, post_id, text) VALUES ($1, $2, $3) RETURNING id, user_id, post_id, text",
        )
        .bind(new_comment.user_id)
        .bind(new_comment.post_id)
        .bind(&new_comment.text)
        .fetch_one(&self.pool)
        .await?;

        Ok(comment)
    }

    pub async fn comment(&self, id: i64) -> Result<Option<Comment>, StoreError> {
        let comment = sqlx::query_as::<_, Comment>(
            "SELECT id, user_id, post_id, text FROM comments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(comment)
    }

    /// Comments under a post, oldest first.
    pub async fn comments_on_post(&self, post_id: i64) -> Result<Vec<Comment>, StoreError> {
        let comments = sqlx::query_as::<_, Comment>(
            "SELECT id, user_id, post_id, text FROM comments WHERE post_id = $1 ORDER BY id",
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    pub async fn comments_by_user(&self, user_id: i64) -> Result<Vec<Comment>, StoreError> {
        let comments = sqlx::query_as::<_, Comment>(
            "SELECT id, user_id, post_id, text FROM comments WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    pub async fn update_comment(
        &self,
        id: i64,
        fields: &NewComment,
    ) -> Result<Option<Comment>, StoreError> {
        let comment = sqlx::query_as::<_, Comment>(
            "UPDATE comments SET user_id = $1, post_id = $2, text = $3 WHERE id = $4 RETURNING id, user_id, post_id, text",
        )
        .bind(fields.user_id)
        .bind(fields.post_id)
        .bind(&fields.text)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(comment)
    }

    pub async fn delete_comment(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
