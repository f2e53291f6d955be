//! Helpers for JSON HTTP handlers: strict request decoding, pretty JSON
//! responses, field validation, and a uniform error envelope.

pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use domain::envelope::{Envelope, error_fallback};
pub use domain::error_response::ErrorResponse;
pub use domain::errors::{NetioError, NetioResult};
pub use domain::ports::{Clock, ResponseSink, SystemClock};
pub use domain::validator::{Pattern, Validator, has_duplicates, is_in, matches_pattern};
pub use frameworks::server::run;
pub use interface_adapters::body::{decode, decode_with_limit};
pub use interface_adapters::extract::{BodyLimit, StrictJson};
pub use use_cases::decode::{DEFAULT_MAX_BODY_BYTES, decode_slice};
pub use use_cases::encode::encode;
pub use use_cases::respond_error::{
    DEFAULT_ERROR_KEY, RespondErrorUseCase, normalize_status, respond_error,
    respond_error_with_message,
};
