pub mod envelope;
pub mod error_response;
pub mod errors;
pub mod ports;
pub mod validator;
