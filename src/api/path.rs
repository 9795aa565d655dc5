//! Percent-decoded path parameters with JSON rejections.

use crate::error::ApiError;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Like [`Path`], but rejects with [`ApiError::MalformedPath`] so that
/// clients receive a JSON body instead of axum's plain-text rejection.
pub struct EntityPath<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequestParts<S> for EntityPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => {
                debug!(path = %parts.uri.path(), error = %rejection, "Rejected request path");
                Err(ApiError::MalformedPath)
            }
        }
    }
}
