use axum::body::Body;
use axum::extract::Request;
use axum::http::header::CONTENT_LENGTH;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::errors::{NetioError, NetioResult};
use crate::use_cases::decode::{DEFAULT_MAX_BODY_BYTES, decode_slice};

// Strictly decodes the request body into `T` under the default 1 MiB ceiling.
pub async fn decode<T>(request: Request) -> NetioResult<T>
where
    T: DeserializeOwned,
{
    decode_with_limit(request, DEFAULT_MAX_BODY_BYTES).await
}

pub async fn decode_with_limit<T>(request: Request, limit: usize) -> NetioResult<T>
where
    T: DeserializeOwned,
{
    // Reject on the declared length before reading anything.
    let declared = request
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<u64>().ok());
    if declared.is_some_and(|len| len > limit as u64) {
        debug!(?declared, limit, "declared content length over limit");
        return Err(NetioError::BodySizeExceeded { limit });
    }

    let body = read_limited(request.into_body(), limit).await?;
    decode_slice(&body, limit)
}

// Buffers the body, giving up as soon as more than `limit` bytes arrived.
async fn read_limited(body: Body, limit: usize) -> NetioResult<Vec<u8>> {
    let mut stream = body.into_data_stream();
    let mut buf = Vec::new();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|err| NetioError::DecodeFailure(err.to_string()))?;
        if buf.len() + chunk.len() > limit {
            debug!(limit, "request body over limit");
            return Err(NetioError::BodySizeExceeded { limit });
        }
        buf.extend_from_slice(&chunk);
    }

    Ok(buf)
}
