use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbUser {
    pub id: i64,
    pub username: String,
    /// bcrypt hash, never the plaintext.
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbImage {
    pub id: i64,
    pub url: String,
    pub name: String,
    pub user_fk: Option<i64>,
}

/// Image fields supplied by the caller; `id` is assigned on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewImage {
    pub url: String,
    pub name: String,
    pub user_fk: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}
