use axum::{
    Json,
    extract::{Path, State},
};
use tracing::info;

use crate::middleware::json_body::JsonBody;
use crate::router::ImagebookState;
use crate::types::{AddImageRequest, ImageView};
use crate::ImagebookError;

pub const IMAGE_ADDED: &str = "image item added successfully";

/// POST /image/add
pub async fn add_image(
    State(state): State<ImagebookState>,
    JsonBody(payload): JsonBody<AddImageRequest>,
) -> Result<Json<&'static str>, ImagebookError> {
    let image = state.storage.insert_image(payload.into()).await?;
    info!(image_id = image.id, user_fk = ?image.user_fk, "image added");
    Ok(Json(IMAGE_ADDED))
}

/// GET /images
pub async fn list_images(
    State(state): State<ImagebookState>,
) -> Result<Json<Vec<ImageView>>, ImagebookError> {
    let images = state.storage.list_images().await?;
    Ok(Json(images.into_iter().map(Into::into).collect()))
}

/// GET /image/{id} -> the image, or `null` when the id matches nothing.
pub async fn get_image(
    State(state): State<ImagebookState>,
    Path(id): Path<String>,
) -> Result<Json<Option<ImageView>>, ImagebookError> {
    let Ok(id) = id.parse::<i64>() else {
        return Ok(Json(None));
    };
    let image = state.storage.get_image_by_id(id).await?;
    Ok(Json(image.map(Into::into)))
}
