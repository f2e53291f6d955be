use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::domain::errors::NetioError;
use crate::interface_adapters::body::decode_with_limit;
use crate::use_cases::decode::DEFAULT_MAX_BODY_BYTES;

// Body ceiling for `StrictJson`, installed with `Router::layer(Extension(..))`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BodyLimit(pub usize);

impl Default for BodyLimit {
    fn default() -> Self {
        Self(DEFAULT_MAX_BODY_BYTES)
    }
}

// Drop-in for `axum::Json` that decodes strictly: one JSON document, size
// ceiling enforced, unknown fields rejected.
// Rejections answer with the standard error envelope.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictJson<T>(pub T);

impl<T, S> FromRequest<S> for StrictJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = NetioError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let limit = req
            .extensions()
            .get::<BodyLimit>()
            .copied()
            .unwrap_or_default();

        decode_with_limit(req, limit.0).await.map(StrictJson)
    }
}
