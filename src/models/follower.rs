use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A directed follow edge: `follower_id` follows `followed_id`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Deserialize)]
pub struct Follower {
    pub id: i64,
    pub followed_id: i64,
    pub follower_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct NewFollower {
    pub followed_id: i64,
    pub follower_id: i64,
}

#[derive(Debug, Serialize)]
pub struct PublicFollower {
    pub id: i64,
    pub followed_id: i64,
    pub follower_id: i64,
}

impl Follower {
    pub fn serialize(&self) -> PublicFollower {
        PublicFollower {
            id: self.id,
            followed_id: self.followed_id,
            follower_id: self.follower_id,
        }
    }
}
