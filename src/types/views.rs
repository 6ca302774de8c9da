use serde::Serialize;

use crate::db::{DbImage, DbUser};

/// Serialized image: `{id, url, name, user_fk}`.
///
/// An absent record is sent as `Json(None::<ImageView>)`, i.e. JSON `null`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ImageView {
    pub id: i64,
    pub url: String,
    pub name: String,
    pub user_fk: Option<i64>,
}

impl From<DbImage> for ImageView {
    fn from(value: DbImage) -> Self {
        Self {
            id: value.id,
            url: value.url,
            name: value.name,
            user_fk: value.user_fk,
        }
    }
}

/// Serialized user with its images embedded.
///
/// `password` carries the stored bcrypt hash. It is kept in the payload for
/// compatibility with existing clients of `GET /user/get/{id}`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UserView {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub images: Vec<ImageView>,
}

impl UserView {
    /// Assemble a user with the images fetched for it separately.
    pub fn assemble(user: DbUser, images: Vec<DbImage>) -> Self {
        Self {
            id: user.id,
            username: user.username,
            password: user.password,
            images: images.into_iter().map(Into::into).collect(),
        }
    }
}
