pub mod body;
pub mod extract;
pub mod handlers;
pub mod protocol;
pub mod response;
pub mod routes;
