use crate::error::StoreError;
use crate::models::follower::{Follower, NewFollower};

use super::Store;

impl Store {
    /// Insert a follow edge. Duplicate edges for the same pair are accepted;
    /// nothing in the schema deduplicates them.
    pub async fn create_follower(
        &self,
        new_follower: &NewFollower,
    ) -> Result<Follower, StoreError> {
        let follower = sqlx::query_as::<_, Follower>(
            "INSERT INTO followers (followed_id, follower_id) VALUES ($1, $2) RETURNING id, followed_id, follower_id",
        )
        .bind(new_follower.followed_id)
        .bind(new_follower.follower_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(follower)
    }

    pub async fn follower(&self, id: i64) -> Result<Option<Follower>, StoreError> {
        let follower = sqlx::query_as::<_, Follower>(
            "SELECT id, followed_id, follower_id FROM followers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(follower)
    }

    /// Edges pointing at `user_id`: who follows this user.
    pub async fn followers_of(&self, user_id: i64) -> Result<Vec<Follower>, StoreError> {
        let followers = sqlx::query_as::<_, Follower>(
            "SELECT id, followed_id, follower_id FROM followers WHERE followed_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(followers)
    }

    /// Edges originating at `user_id`: who this user follows.
    pub async fn following_of(&self, user_id: i64) -> Result<Vec<Follower>, StoreError> {
        let followers = sqlx::query_as::<_, Follower>(
            "SELECT id, followed_id, follower_id FROM followers WHERE follower_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(followers)
    }

    pub async fn update_follower(
        &self,
        id: i64,
        fields: &NewFollower,
    ) -> Result<Option<Follower>, StoreError> {
        let follower = sqlx::query_as::<_, Follower>(
            "UPDATE followers SET followed_id = $1, follower_id = $2 WHERE id = $3 RETURNING id, followed_id, follower_id",
        )
        .bind(fields.followed_id)
        .bind(fields.follower_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(follower)
    }

    pub async fn delete_follower(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM followers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
