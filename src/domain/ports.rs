use axum::http::{HeaderMap, StatusCode};
use chrono::{DateTime, FixedOffset, Local};

// Port for the outbound HTTP response owned by the transport layer.
pub trait ResponseSink {
    fn headers_mut(&mut self) -> &mut HeaderMap;
    fn set_status(&mut self, status: StatusCode);
    fn write_body(&mut self, body: Vec<u8>);
}

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

// Wall clock in the host's local offset.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}
