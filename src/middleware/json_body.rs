use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use crate::error::ImagebookError;

/// `Json<T>` whose rejection is the crate's JSON error body rather than plain text.
/// Missing required fields and malformed payloads stop here and never reach storage.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(rejection_to_error(rejection).into_response()),
        }
    }
}

fn rejection_to_error(rejection: JsonRejection) -> ImagebookError {
    ImagebookError::InvalidBody(rejection.body_text())
}
