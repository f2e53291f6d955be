use axum::http::header::{CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::domain::errors::{NetioError, NetioResult};
use crate::domain::ports::ResponseSink;

// Writes `data` as tab-indented JSON with a trailing newline.
//
// Baseline headers and the status are applied before serialization, so the
// sink carries the status even when marshalling fails. Extra headers replace
// same-named headers (including the baseline ones) and are applied together
// with the body only once serialization succeeded.
pub fn encode<S, T>(
    sink: &mut S,
    status: StatusCode,
    data: &T,
    headers: Option<&HeaderMap>,
) -> NetioResult<()>
where
    S: ResponseSink + ?Sized,
    T: Serialize + ?Sized,
{
    let defaults = sink.headers_mut();
    defaults.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    defaults.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    defaults.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    sink.set_status(status);

    let body = to_indented_json(data).inspect_err(|err| {
        debug!(error = %err, %status, "response payload rejected");
    })?;

    if let Some(headers) = headers {
        apply_headers(sink.headers_mut(), headers);
    }
    sink.write_body(body);

    Ok(())
}

fn to_indented_json<T>(data: &T) -> NetioResult<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    let mut buf = Vec::with_capacity(128);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    data.serialize(&mut serializer)
        .map_err(|err| NetioError::MarshalFailure(err.to_string()))?;

    // Terminal friendly output for curl and friends.
    buf.push(b'\n');
    Ok(buf)
}

fn apply_headers(target: &mut HeaderMap, extra: &HeaderMap) {
    for name in extra.keys() {
        target.remove(name);
        for value in extra.get_all(name) {
            target.append(name.clone(), value.clone());
        }
    }
}
