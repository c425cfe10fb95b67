use serde::Serialize;

/// Body of `POST tool_call_handler`. `thread_id` is sent as `null` until the
/// backend has issued one.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub message: String,
    pub user_id: String,
    pub thread_id: Option<String>,
    pub temperature: f32,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CreateUserRequest {
    pub user_id: String,
}
