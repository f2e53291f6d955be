use axum::http::StatusCode;
use thiserror::Error;

pub type NetioResult<T> = Result<T, NetioError>;

// Failure kinds surfaced by the codec. Every variant keeps the underlying
// diagnostic so handlers can log or echo it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetioError {
    #[error("error marshalling data: {0}")]
    MarshalFailure(String),

    #[error("body must not be larger than {limit} bytes")]
    BodySizeExceeded { limit: usize },

    #[error("body contains unknown field: {0}")]
    UnknownField(String),

    #[error("body can only contain a single json value")]
    MultipleValues,

    #[error("body contains badly-formed json: {0}")]
    DecodeFailure(String),
}

impl NetioError {
    // HTTP status a handler should answer with when it gives up on this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            NetioError::MarshalFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            NetioError::BodySizeExceeded { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            NetioError::UnknownField(_)
            | NetioError::MultipleValues
            | NetioError::DecodeFailure(_) => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_side_errors_map_to_client_statuses() {
        assert_eq!(
            NetioError::BodySizeExceeded { limit: 8 }.status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(NetioError::MultipleValues.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            NetioError::UnknownField("extra".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            NetioError::DecodeFailure("EOF".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn marshal_failure_is_a_server_error() {
        let err = NetioError::MarshalFailure("key must be a string".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "error marshalling data: key must be a string");
    }
}
