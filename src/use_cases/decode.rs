use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::errors::{NetioError, NetioResult};

// Request bodies larger than this are rejected before decoding.
pub const DEFAULT_MAX_BODY_BYTES: usize = 1_048_576;

// Decodes exactly one JSON document from `body` into `T`.
//
// Any key `T` does not declare fails with `UnknownField`, for every target
// type and at any depth. Anything other than whitespace after the first
// value, e.g. `{"a":1}{"b":2}`, fails with `MultipleValues` even though the
// first value decoded cleanly.
pub fn decode_slice<T>(body: &[u8], limit: usize) -> NetioResult<T>
where
    T: DeserializeOwned,
{
    if body.len() > limit {
        return Err(NetioError::BodySizeExceeded { limit });
    }

    let mut unknown: Option<String> = None;
    let mut deserializer = serde_json::Deserializer::from_slice(body);
    let value: T = serde_ignored::deserialize(&mut deserializer, |path| {
        unknown.get_or_insert_with(|| path.to_string());
    })
    .map_err(|err| {
        debug!(error = %err, "request body rejected");
        NetioError::DecodeFailure(err.to_string())
    })?;

    if let Some(field) = unknown {
        debug!(%field, "unknown field in request body");
        return Err(NetioError::UnknownField(field));
    }

    if let Err(err) = deserializer.end() {
        debug!(error = %err, "trailing content after json value");
        return Err(NetioError::MultipleValues);
    }

    Ok(value)
}
