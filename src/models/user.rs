use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered account. `password` holds whatever the caller persisted;
/// hashing happens upstream, before the row is written.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: i64,
    pub email: String,
}

impl User {
    /// Public view of the account. The password never leaves this struct
    /// through a response body.
    pub fn serialize(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            email: self.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_never_exposes_the_password() {
        let user = User {
            id: 1,
            email: "a@x.com".to_string(),
            password: "h".to_string(),
            is_active: true,
        };

        let json = serde_json::to_value(user.serialize()).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("password"));
        assert_eq!(json["id"], 1);
        assert_eq!(json["email"], "a@x.com");
    }
}
