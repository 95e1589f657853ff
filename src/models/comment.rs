use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub user_id: i64,
    pub post_id: i64,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct NewComment {
    pub user_id: i64,
    pub post_id: i64,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct PublicComment {
    pub id: i64,
    pub user_id: i64,
    pub post_id: i64,
    /// The comment body. The API has always shipped it under this key and
    /// clients parse it as such, so the name stays until the API is versioned.
    pub image_url: String,
}

impl Comment {
    pub fn serialize(&self) -> PublicComment {
        PublicComment {
            id: self.id,
            user_id: self.user_id,
            post_id: self.post_id,
            image_url: self.text.clone(),
        }
    }
}
