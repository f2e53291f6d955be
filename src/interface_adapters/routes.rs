use crate::interface_adapters::extract::BodyLimit;
use crate::interface_adapters::handlers::{create_user, errors, example};
use axum::{
    Extension, Router,
    routing::{get, post},
};

pub fn app(limit: BodyLimit) -> Router {
    Router::new()
        .route("/example", post(example))
        .route("/errors", get(errors))
        .route("/users", post(create_user))
        .layer(Extension(limit))
}
