use crate::error::StoreError;
use crate::models::message::{Message, NewMessage};

use super::Store;

impl Store {
    pub async fn create_message(&self, new_message: &NewMessage) -> Result<Message, StoreError> {
        let message = sqlx::query_as::<_, Message>(
            "INSERT INTO messages (sender_id, receiver_id, content) VALUES ($1, $2, $3) RETURNING id, sender_id, receiver_id, content",
        )
        .bind(new_message.sender_id)
        .bind(new_message.receiver_id)
        .bind(&new_message.content)
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }

    pub async fn message(&self, id: i64) -> Result<Option<Message>, StoreError> {
        let message = sqlx::query_as::<_, Message>(
            "SELECT id, sender_id, receiver_id, content FROM messages WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(message)
    }

    pub async fn messages_sent(&self, user_id: i64) -> Result<Vec<Message>, StoreError> {
        let messages = sqlx::query_as::<_, Message>(
            "SELECT id, sender_id, receiver_id, content FROM messages WHERE sender_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    pub async fn messages_received(&self, user_id: i64) -> Result<Vec<Message>, StoreError> {
        let messages = sqlx::query_as::<_, Message>(
            "SELECT id, sender_id, receiver_id, content FROM messages WHERE receiver_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    /// Both directions of a conversation between two users, in insertion
    /// order.
    pub async fn conversation(&self, a: i64, b: i64) -> Result<Vec<Message>, StoreError> {
        let messages = sqlx::query_as::<_, Message>(
            "SELECT id, sender_id, receiver_id, content FROM messages WHERE (sender_id = $1 AND receiver_id = $2) OR (sender_id = $2 AND receiver_id = $1) ORDER BY id",
        )
        .bind(a)
        .bind(b)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    pub async fn update_message(
        &self,
        id: i64,
        fields: &NewMessage,
    ) -> Result<Option<Message>, StoreError> {
        let message = sqlx::query_as::<_, Message>(
            "UPDATE messages SET sender_id = $1, receiver_id = $2, content = $3 WHERE id = $4 RETURNING id, sender_id, receiver_id, content",
        )
        .bind(fields.sender_id)
        .bind(fields.receiver_id)
        .bind(&fields.content)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(message)
    }

    pub async fn delete_message(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
