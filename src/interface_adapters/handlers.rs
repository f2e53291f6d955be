use axum::extract::Query;
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::sync::LazyLock;
use tracing::{info, warn};

use crate::domain::envelope::{Envelope, error_fallback};
use crate::domain::errors::NetioResult;
use crate::domain::validator::{Pattern, Validator, has_duplicates, is_in, matches_pattern};
use crate::interface_adapters::extract::StrictJson;
use crate::interface_adapters::protocol::{CreateUserRequest, ErrorsQuery, ExampleRequest};
use crate::use_cases::encode::encode;
use crate::use_cases::respond_error::{
    DEFAULT_ERROR_KEY, respond_error, respond_error_with_message,
};

const ALLOWED_ROLES: [&str; 3] = ["admin", "user", "moderator"];
const MIN_AGE: u32 = 18;

static EMAIL: LazyLock<Result<Pattern, regex::Error>> =
    LazyLock::new(|| Pattern::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"));

// Echoes the decoded payload back with a few custom headers.
pub async fn example(StrictJson(input): StrictJson<ExampleRequest>) -> Response {
    let mut headers = HeaderMap::new();
    let some_header = HeaderName::from_static("x-some-header");
    headers.append(some_header.clone(), HeaderValue::from_static("Value-1"));
    headers.append(some_header, HeaderValue::from_static("Value-2"));
    headers.insert("x-api-version", HeaderValue::from_static("1.0"));
    headers.append("x-new-header", HeaderValue::from_static("New-Header-Value"));

    write_json(StatusCode::OK, "example response", &input, Some(&headers))
}

// Showcases the error responder: `simple`, `validation`, or the fallback.
pub async fn errors(Query(query): Query<ErrorsQuery>) -> Response {
    let mut response = Response::default();

    match query.kind.as_deref() {
        Some("simple") => respond_error_with_message(
            &mut response,
            DEFAULT_ERROR_KEY,
            StatusCode::BAD_REQUEST.as_u16(),
            "something went wrong",
            None,
        ),
        Some("validation") => {
            let mut v = Validator::new();
            v.check(false, "email", "invalid email format");
            v.check(false, "age", "must be over 18");
            respond_error(
                &mut response,
                DEFAULT_ERROR_KEY,
                StatusCode::UNPROCESSABLE_ENTITY.as_u16(),
                Some(&v),
            );
        }
        _ => {
            if let Err(err) = encode(
                &mut response,
                StatusCode::INTERNAL_SERVER_ERROR,
                &error_fallback(),
                None,
            ) {
                return err.into_response();
            }
        }
    }

    response
}

// Registers a user after validating every field.
pub async fn create_user(StrictJson(input): StrictJson<CreateUserRequest>) -> Response {
    let v = validate_user(&input);
    if !v.valid() {
        warn!(fields = v.errors().len(), "user payload failed validation");
        let mut response = Response::default();
        respond_error(
            &mut response,
            DEFAULT_ERROR_KEY,
            StatusCode::UNPROCESSABLE_ENTITY.as_u16(),
            Some(&v),
        );
        return response;
    }

    info!(role = %input.role, "user accepted");
    write_json(StatusCode::CREATED, "user", &input, None)
}

fn validate_user(input: &CreateUserRequest) -> Validator {
    let email_ok = EMAIL
        .as_ref()
        .is_ok_and(|email| matches_pattern(&input.email, email));

    let mut v = Validator::new();
    v.check(!input.email.is_empty(), "email", "must be provided");
    v.check(email_ok, "email", "invalid email format");
    v.check(input.age >= MIN_AGE, "age", "must be 18 or older");
    v.check(
        is_in(&input.role.as_str(), &ALLOWED_ROLES),
        "role",
        "invalid role",
    );
    v.check(
        !has_duplicates(&input.interests),
        "interests",
        "duplicate interests found",
    );
    v
}

fn write_json<T>(status: StatusCode, key: &str, data: &T, headers: Option<&HeaderMap>) -> Response
where
    T: Serialize + ?Sized,
{
    let mut response = Response::default();
    match try_write_json(&mut response, status, key, data, headers) {
        Ok(()) => response,
        Err(err) => err.into_response(),
    }
}

fn try_write_json<T>(
    response: &mut Response,
    status: StatusCode,
    key: &str,
    data: &T,
    headers: Option<&HeaderMap>,
) -> NetioResult<()>
where
    T: Serialize + ?Sized,
{
    let mut envelope = Envelope::new();
    envelope.insert_serialized(key, data)?;
    encode(response, status, &envelope, headers)
}
