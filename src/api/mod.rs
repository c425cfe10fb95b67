pub mod client;
pub mod endpoints;
pub mod models;
pub mod response;

pub use client::{BackendClient, Timed, USER_ID_HEADER};
pub use endpoints::Endpoint;
pub use models::{ChatRequest, CreateUserRequest};
pub use response::BackendReply;
