use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// Request payload for the echo example.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ExampleRequest {
    pub username: String,
    pub user_data: Map<String, Value>,
}

// Request payload for user registration.
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub age: u32,
    pub role: String,
    #[serde(default)]
    pub interests: Vec<String>,
}

// Query string for the error showcase route.
#[derive(Debug, Deserialize)]
pub struct ErrorsQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}
