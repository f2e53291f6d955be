use std::env;

use crate::use_cases::decode::DEFAULT_MAX_BODY_BYTES;

// Runtime settings for the demo server.
pub fn http_port() -> u16 {
    env::var("NETIO_HTTP_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8080)
}

pub fn max_body_bytes() -> usize {
    env::var("NETIO_MAX_BODY_BYTES")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|&value| value > 0)
        .unwrap_or(DEFAULT_MAX_BODY_BYTES)
}
