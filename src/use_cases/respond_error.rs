use axum::http::StatusCode;
use serde::Serialize;
use tracing::{error, warn};

use crate::domain::envelope::{Envelope, error_fallback};
use crate::domain::error_response::ErrorResponse;
use crate::domain::errors::NetioResult;
use crate::domain::ports::{Clock, ResponseSink, SystemClock};
use crate::domain::validator::Validator;
use crate::use_cases::encode::encode;

pub const DEFAULT_ERROR_KEY: &str = "error";

// Sends `{key: ErrorResponse}` with the reason phrase as message.
pub fn respond_error<S>(sink: &mut S, key: &str, status: u16, validator: Option<&Validator>)
where
    S: ResponseSink + ?Sized,
{
    RespondErrorUseCase { clock: SystemClock }.execute(sink, key, status, None, validator);
}

// Same as `respond_error`, but with a caller supplied message.
pub fn respond_error_with_message<S>(
    sink: &mut S,
    key: &str,
    status: u16,
    message: &str,
    validator: Option<&Validator>,
) where
    S: ResponseSink + ?Sized,
{
    RespondErrorUseCase { clock: SystemClock }.execute(sink, key, status, Some(message), validator);
}

// Error responder with an injected time source.
pub struct RespondErrorUseCase<C> {
    pub clock: C,
}

impl<C> RespondErrorUseCase<C>
where
    C: Clock,
{
    pub fn execute<S>(
        &self,
        sink: &mut S,
        key: &str,
        status: u16,
        message: Option<&str>,
        validator: Option<&Validator>,
    ) where
        S: ResponseSink + ?Sized,
    {
        let status = normalize_status(status);
        let key = if key.is_empty() { DEFAULT_ERROR_KEY } else { key };

        let response = match message {
            Some(message) => ErrorResponse::with_message(status, message, self.clock.now()),
            None => ErrorResponse::new(status, self.clock.now()),
        }
        .with_validation(validator);

        send_or_fallback(sink, key, status, &response);
    }
}

// Codes outside 100..=599 are answered as 500.
pub fn normalize_status(status: u16) -> StatusCode {
    if !(100..=599).contains(&status) {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

fn send_or_fallback<S, T>(sink: &mut S, key: &str, status: StatusCode, payload: &T)
where
    S: ResponseSink + ?Sized,
    T: Serialize + ?Sized,
{
    if let Err(err) = send(sink, key, status, payload) {
        warn!(error = %err, %status, "failed to write error response; sending fallback");

        // Last resort; a failure here is logged and dropped.
        if let Err(err) = encode(sink, StatusCode::INTERNAL_SERVER_ERROR, &error_fallback(), None) {
            error!(error = %err, "failed to write fallback error response");
        }
    }
}

fn send<S, T>(sink: &mut S, key: &str, status: StatusCode, payload: &T) -> NetioResult<()>
where
    S: ResponseSink + ?Sized,
    T: Serialize + ?Sized,
{
    let mut envelope = Envelope::new();
    envelope.insert_serialized(key, payload)?;
    encode(sink, status, &envelope, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{FixedClock, RecordingSink, body_json};
    use axum::response::Response;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn responder() -> RespondErrorUseCase<FixedClock> {
        RespondErrorUseCase {
            clock: FixedClock::sample(),
        }
    }

    #[tokio::test]
    async fn when_status_is_valid_then_message_is_reason_phrase() {
        let mut response = Response::default();

        responder().execute(&mut response, "error", 404, None, None);

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({
                "error": {
                    "status": 404,
                    "message": "Not Found",
                    "timestamp": "2025-01-08T18:46:33.536576+11:00"
                }
            })
        );
    }

    #[tokio::test]
    async fn when_status_is_out_of_range_then_normalizes_to_500() {
        let mut response = Response::default();

        responder().execute(&mut response, "error", 700, None, None);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let payload = body_json(response).await;
        assert_eq!(payload["error"]["status"], 500);
        assert_eq!(payload["error"]["message"], "Internal Server Error");
    }

    #[tokio::test]
    async fn when_status_is_below_range_then_normalizes_to_500() {
        let mut response = Response::default();

        responder().execute(&mut response, "error", 42, None, None);

        assert_eq!(body_json(response).await["error"]["status"], 500);
    }

    #[tokio::test]
    async fn when_key_is_empty_then_defaults_to_error() {
        let mut response = Response::default();

        responder().execute(&mut response, "", 400, None, None);

        let payload = body_json(response).await;
        assert_eq!(payload["error"]["status"], 400);
        assert_eq!(payload.as_object().map(|object| object.len()), Some(1));
    }

    #[tokio::test]
    async fn when_key_is_custom_then_payload_is_nested_under_it() {
        let mut response = Response::default();

        responder().execute(&mut response, "error_response", 401, None, None);

        let payload = body_json(response).await;
        assert_eq!(payload["error_response"]["message"], "Unauthorized");
        assert!(payload.get("error").is_none());
    }

    #[tokio::test]
    async fn when_validator_has_errors_then_validation_is_attached_and_message_kept() {
        let mut validator = Validator::new();
        validator.check(false, "email", "invalid format");
        validator.check(false, "age", "must be over 18");
        let mut response = Response::default();

        responder().execute(&mut response, "error", 422, None, Some(&validator));

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await,
            json!({
                "error": {
                    "status": 422,
                    "message": "Unprocessable Entity",
                    "validation": {"email": "invalid format", "age": "must be over 18"},
                    "timestamp": "2025-01-08T18:46:33.536576+11:00"
                }
            })
        );
    }

    // An empty validator is treated like no validator: no validation block.
    #[tokio::test]
    async fn when_validator_is_empty_then_validation_is_omitted() {
        let validator = Validator::new();
        let mut response = Response::default();

        responder().execute(&mut response, "error", 400, None, Some(&validator));

        let payload = body_json(response).await;
        assert!(payload["error"].get("validation").is_none());
    }

    #[tokio::test]
    async fn when_message_is_supplied_then_it_replaces_reason_phrase() {
        let mut response = Response::default();

        responder().execute(
            &mut response,
            "error",
            400,
            Some("something went wrong"),
            None,
        );

        assert_eq!(
            body_json(response).await["error"]["message"],
            "something went wrong"
        );
    }

    #[tokio::test]
    async fn when_primary_write_fails_then_sends_fallback_500() {
        let mut unserializable = BTreeMap::new();
        unserializable.insert((1, 2), "tuple keys cannot be json object keys");
        let mut response = Response::default();

        send_or_fallback(
            &mut response,
            "error",
            StatusCode::BAD_REQUEST,
            &unserializable,
        );

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"error": "internal server error"})
        );
    }

    #[test]
    fn when_primary_write_fails_then_exactly_one_fallback_body_is_written() {
        let mut unserializable = BTreeMap::new();
        unserializable.insert((1, 2), "tuple keys cannot be json object keys");
        let mut sink = RecordingSink::default();

        send_or_fallback(
            &mut sink,
            "error",
            StatusCode::UNPROCESSABLE_ENTITY,
            &unserializable,
        );

        assert_eq!(sink.statuses, vec![StatusCode::INTERNAL_SERVER_ERROR]);
        assert_eq!(sink.bodies.len(), 1);
        let body: serde_json::Value =
            serde_json::from_slice(&sink.bodies[0]).expect("expected json body");
        assert_eq!(body, json!({"error": "internal server error"}));
    }

    #[test]
    fn when_primary_write_succeeds_then_no_fallback_is_written() {
        let mut sink = RecordingSink::default();

        responder().execute(&mut sink, "error", 409, None, None);

        assert_eq!(sink.statuses, vec![StatusCode::CONFLICT]);
        assert_eq!(sink.bodies.len(), 1);
    }

    #[tokio::test]
    async fn system_clock_responder_emits_rfc3339_timestamp() {
        let mut response = Response::default();

        respond_error(&mut response, "error", 503, None);

        let payload = body_json(response).await;
        let timestamp = payload["error"]["timestamp"]
            .as_str()
            .expect("expected timestamp string");
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
        assert_eq!(payload["error"]["message"], "Service Unavailable");
    }

    #[test]
    fn normalize_status_keeps_registered_and_unregistered_codes_in_range() {
        assert_eq!(normalize_status(100), StatusCode::CONTINUE);
        assert_eq!(normalize_status(599).as_u16(), 599);
        assert_eq!(normalize_status(600), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(normalize_status(0), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
