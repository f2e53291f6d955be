use axum::http::StatusCode;
use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

use crate::domain::validator::Validator;

// Standardized error payload embedded in an envelope before sending.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<BTreeMap<String, String>>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<FixedOffset>,
}

impl ErrorResponse {
    // Message defaults to the reason phrase; codes without one get an empty
    // message.
    pub fn new(status: StatusCode, timestamp: DateTime<FixedOffset>) -> Self {
        let message = status.canonical_reason().unwrap_or_default().to_string();
        Self::with_message(status, message, timestamp)
    }

    pub fn with_message(
        status: StatusCode,
        message: impl Into<String>,
        timestamp: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            validation: None,
            timestamp,
        }
    }

    // Attaches the validator's errors, but only when it recorded at least one.
    pub fn with_validation(mut self, validator: Option<&Validator>) -> Self {
        self.validation = validator
            .filter(|validator| !validator.valid())
            .map(|validator| validator.errors().clone());
        self
    }
}

fn serialize_timestamp<S>(timestamp: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Micros, false))
}
