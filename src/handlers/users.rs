use axum::{
    Json,
    extract::{Path, State},
};
use tracing::info;

use crate::db::{InsertUserOutcome, NewUser};
use crate::middleware::json_body::JsonBody;
use crate::router::ImagebookState;
use crate::service::password::hash_password;
use crate::types::{AddUserRequest, UserView};
use crate::ImagebookError;

pub const USER_CREATED: &str = "You have created a user! Welcome to our site!";
pub const USERNAME_TAKEN: &str = "Error: You must use another name. That one is taken!";

/// POST /user/add
///
/// The lookup is only a fast path that skips hashing for known names; the
/// UNIQUE index still settles concurrent requests for the same username.
pub async fn add_user(
    State(state): State<ImagebookState>,
    JsonBody(payload): JsonBody<AddUserRequest>,
) -> Result<Json<&'static str>, ImagebookError> {
    if state
        .storage
        .get_user_by_username(&payload.username)
        .await?
        .is_some()
    {
        info!(username = %payload.username, "username already taken");
        return Ok(Json(USERNAME_TAKEN));
    }

    let password_hash = hash_password(payload.password, state.bcrypt_cost).await?;
    let outcome = state
        .storage
        .insert_user(NewUser {
            username: payload.username,
            password_hash,
        })
        .await?;

    match outcome {
        InsertUserOutcome::Created(user) => {
            info!(user_id = user.id, username = %user.username, "user created");
            Ok(Json(USER_CREATED))
        }
        InsertUserOutcome::UsernameTaken => {
            info!("username taken by a concurrent request");
            Ok(Json(USERNAME_TAKEN))
        }
    }
}

/// GET /user/get/{id} -> the user with its images, or `null`.
pub async fn get_user(
    State(state): State<ImagebookState>,
    Path(id): Path<String>,
) -> Result<Json<Option<UserView>>, ImagebookError> {
    let Ok(id) = id.parse::<i64>() else {
        return Ok(Json(None));
    };
    let Some(user) = state.storage.get_user_by_id(id).await? else {
        return Ok(Json(None));
    };
    let images = state.storage.list_images_for_user(user.id).await?;
    Ok(Json(Some(UserView::assemble(user, images))))
}
