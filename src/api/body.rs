//! Raw command bodies that never reject.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use std::convert::Infallible;
use tracing::debug;

/// The request body as bytes. A body that cannot be buffered (too large,
/// broken stream) is treated as empty, which decodes to an empty bundle.
pub struct CommandBody(pub Bytes);

#[axum::async_trait]
impl<S> FromRequest<S> for CommandBody
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let path = req.uri().path().to_owned();
        match Bytes::from_request(req, state).await {
            Ok(bytes) => Ok(Self(bytes)),
            Err(rejection) => {
                debug!(path = %path, error = %rejection, "Discarded unreadable command body");
                Ok(Self(Bytes::new()))
            }
        }
    }
}
