use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A direct message. There is no read/unread state; the receiving client
/// keeps track of what it has shown.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Deserialize)]
pub struct Message {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct NewMessage {
    pub sender_id: i64,
    pub receiver_id: i64,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct PublicMessage {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub content: String,
}

impl Message {
    pub fn serialize(&self) -> PublicMessage {
        PublicMessage {
            id: self.id,
            sender_id: self.sender_id,
            receiver_id: self.receiver_id,
            content: self.content.clone(),
        }
    }
}
