use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Deserialize)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub image_url: String,
}

#[derive(Debug, Deserialize)]
pub struct NewPost {
    pub user_id: i64,
    pub title: String,
    pub image_url: String,
}

#[derive(Debug, Serialize)]
pub struct PublicPost {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub image_url: String,
}

impl Post {
    pub fn serialize(&self) -> PublicPost {
        PublicPost {
            id: self.id,
            user_id: self.user_id,
            title: self.title.clone(),
            image_url: self.image_url.clone(),
        }
    }
}
