use crate::error::StoreError;
use crate::models::user::{NewUser, User};

use super::Store;

impl Store {
    /// Insert an account. Fails with a constraint violation when the email is
    /// already taken.
    pub async fn create_user(&self, new_user: &NewUser) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password, is_active) VALUES ($1, $2, $3) RETURNING id, email, password, is_active",
        )
        .bind(&new_user.email)
        .bind(&new_user.password)
        .bind(new_user.is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn user(&self, id: i64) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, password, is_active FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, password, is_active FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Overwrite every column of the account. Returns `None` when no row has
    /// this id.
    pub async fn update_user(&self, id: i64, fields: &NewUser) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "UPDATE users SET email = $1, password = $2, is_active = $3 WHERE id = $4 RETURNING id, email, password, is_active",
        )
        .bind(&fields.email)
        .bind(&fields.password)
        .bind(fields.is_active)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Delete the account. Fails with a constraint violation while posts,
    /// comments, follow edges or messages still reference it.
    pub async fn delete_user(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
