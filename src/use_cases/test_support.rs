use axum::body::to_bytes;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use chrono::{DateTime, FixedOffset};
use serde_json::Value;

use crate::domain::ports::{Clock, ResponseSink};

// Shared fixed time source for deterministic use-case tests.
pub(crate) struct FixedClock(pub(crate) DateTime<FixedOffset>);

impl FixedClock {
    pub(crate) fn sample() -> Self {
        let timestamp = DateTime::parse_from_rfc3339("2025-01-08T18:46:33.536576+11:00")
            .expect("expected valid timestamp");
        Self(timestamp)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

// Sink that keeps every status and body it was handed, in order.
#[derive(Default)]
pub(crate) struct RecordingSink {
    pub(crate) headers: HeaderMap,
    pub(crate) statuses: Vec<StatusCode>,
    pub(crate) bodies: Vec<Vec<u8>>,
}

impl ResponseSink for RecordingSink {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    fn set_status(&mut self, status: StatusCode) {
        self.statuses.push(status);
    }

    fn write_body(&mut self, body: Vec<u8>) {
        self.bodies.push(body);
    }
}

pub(crate) async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("expected response body");
    String::from_utf8(bytes.to_vec()).expect("expected utf-8 body")
}

pub(crate) async fn body_json(response: Response) -> Value {
    let text = body_text(response).await;
    serde_json::from_str(&text).expect("expected json body")
}
