//! The storage context.
//!
//! One [`Store`] is constructed at startup and handed to the request
//! handlers; it owns the connection pool and applies the table definitions
//! from the schema module before serving its first query. There is
//! no process-wide registry, no caching and no explicit transactions: every
//! operation is a single statement and the database settles concurrent
//! writes at its default isolation level.

mod comments;
mod followers;
mod messages;
mod posts;
mod users;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::error::StoreError;
use crate::schema;

#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open (creating if missing) the database at `url` and apply the schema.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.apply_schema().await?;
        info!("database ready at {url}");
        Ok(store)
    }

    /// In-memory database for tests. A single connection is kept alive for
    /// the lifetime of the pool; a second connection would see an empty
    /// database.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.apply_schema().await?;
        Ok(store)
    }

    async fn apply_schema(&self) -> Result<(), StoreError> {
        for table in schema::TABLES {
            sqlx::query(table).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// The underlying pool, for callers that need to issue their own queries.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
