//! Entity types, one file per table.
//!
//! Each entity comes with a `New*` struct carrying the insertable columns and
//! a `Public*` struct holding the fields the web layer is allowed to expose.
//! The `serialize` methods are the only sanctioned way to turn an entity into
//! a response body.

pub mod comment;
pub mod follower;
pub mod message;
pub mod post;
pub mod user;

pub use comment::{Comment, NewComment, PublicComment};
pub use follower::{Follower, NewFollower, PublicFollower};
pub use message::{Message, NewMessage, PublicMessage};
pub use post::{NewPost, Post, PublicPost};
pub use user::{NewUser, PublicUser, User};
