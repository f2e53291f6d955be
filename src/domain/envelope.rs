use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::errors::{NetioError, NetioResult};

// Top-level JSON object wrapping every response payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Envelope(Map<String, Value>);

impl Envelope {
    pub fn new() -> Self {
        Self::default()
    }

    // Builder form, e.g. `Envelope::new().with("status", "ok")`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    // Serializes `value` up front, so a payload that cannot become JSON is
    // rejected here instead of at write time.
    pub fn insert_serialized<T>(&mut self, key: impl Into<String>, value: &T) -> NetioResult<()>
    where
        T: Serialize + ?Sized,
    {
        let value =
            serde_json::to_value(value).map_err(|err| NetioError::MarshalFailure(err.to_string()))?;
        self.0.insert(key.into(), value);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Last-resort payload sent when writing an error response fails.
pub fn error_fallback() -> Envelope {
    Envelope::new().with("error", "internal server error")
}
