use serde::Deserialize;

use crate::db::NewImage;

/// Body of `POST /image/add`.
#[derive(Debug, Clone, Deserialize)]
pub struct AddImageRequest {
    pub url: String,
    pub name: String,
    #[serde(default)]
    pub user_fk: Option<i64>,
}

impl From<AddImageRequest> for NewImage {
    fn from(value: AddImageRequest) -> Self {
        Self {
            url: value.url,
            name: value.name,
            user_fk: value.user_fk,
        }
    }
}

/// Body of `POST /user/add`. The password is plaintext until hashed by the handler.
#[derive(Debug, Clone, Deserialize)]
pub struct AddUserRequest {
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_fk_may_be_omitted_or_null() {
        let omitted: AddImageRequest =
            serde_json::from_str(r#"{"url":"http://x/1.png","name":"pic1"}"#).unwrap();
        let null: AddImageRequest =
            serde_json::from_str(r#"{"url":"http://x/1.png","name":"pic1","user_fk":null}"#)
                .unwrap();
        assert_eq!(omitted.user_fk, None);
        assert_eq!(null.user_fk, None);
    }

    #[test]
    fn missing_password_is_rejected() {
        let res = serde_json::from_str::<AddUserRequest>(r#"{"username":"alice"}"#);
        assert!(res.is_err());
    }
}
