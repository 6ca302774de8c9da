use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::db::Storage;
use crate::handlers::{images, users};

/// State shared by every handler. The storage client is injected here at
/// startup rather than reached through a global.
#[derive(Clone)]
pub struct ImagebookState {
    pub storage: Storage,
    pub bcrypt_cost: u32,
}

impl ImagebookState {
    pub fn new(storage: Storage, bcrypt_cost: u32) -> Self {
        Self {
            storage,
            bcrypt_cost,
        }
    }
}

pub fn imagebook_router(state: ImagebookState) -> Router {
    Router::new()
        .route("/image/add", post(images::add_image))
        .route("/images", get(images::list_images))
        .route("/image/{id}", get(images::get_image))
        .route("/user/add", post(users::add_user))
        .route("/user/get/{id}", get(users::get_user))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
