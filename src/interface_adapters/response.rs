use axum::body::Body;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::domain::errors::NetioError;
use crate::domain::ports::ResponseSink;
use crate::use_cases::respond_error::{DEFAULT_ERROR_KEY, respond_error_with_message};

// Adapter so an axum response can be handed to the codec directly.
impl ResponseSink for Response {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        Response::headers_mut(self)
    }

    fn set_status(&mut self, status: StatusCode) {
        *self.status_mut() = status;
    }

    fn write_body(&mut self, body: Vec<u8>) {
        *self.body_mut() = Body::from(body);
    }
}

// Codec errors answer with the standard error envelope, using the error's
// diagnostic as the message.
impl IntoResponse for NetioError {
    fn into_response(self) -> Response {
        let mut response = Response::default();
        respond_error_with_message(
            &mut response,
            DEFAULT_ERROR_KEY,
            self.status_code().as_u16(),
            &self.to_string(),
            None,
        );
        response
    }
}
