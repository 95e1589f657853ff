//! Data layer for a small social network: users, posts, comments, follow
//! edges and direct messages, persisted in SQLite through [`Store`].
//!
//! The web layer builds on top of this crate; it owns routing, sessions and
//! validation. This crate only maps entities to tables and back, and exposes
//! the public (allowlisted) view of each entity via its `serialize` method.

pub mod error;
pub mod models;
mod schema;
pub mod store;
pub mod utils;

pub use error::StoreError;
pub use store::Store;
