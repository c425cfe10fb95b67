use crate::error::Result;
use serde_json::Value;

/// Decoded answer of the chat endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendReply {
    Success {
        response: String,
        thread_id: Option<String>,
        tool_calls_count: u32,
    },
    Failure {
        message: String,
    },
}

impl BackendReply {
    pub fn from_result(result: Result<Value>) -> Self {
        match result {
            Ok(value) => Self::decode(&value),
            Err(e) => BackendReply::Failure {
                message: e.to_string(),
            },
        }
    }

    /// A payload counts as a success whenever it carries a `response` key.
    /// A null `response` decodes to an empty reply.
    pub fn decode(value: &Value) -> Self {
        match value.get("response") {
            Some(response) => BackendReply::Success {
                response: if response.is_null() {
                    String::new()
                } else {
                    value_to_text(response)
                },
                thread_id: value
                    .get("thread_id")
                    .and_then(|t| t.as_str())
                    .map(|s| s.to_string()),
                tool_calls_count: value
                    .get("tool_calls_count")
                    .and_then(|c| c.as_u64())
                    .map(|c| u32::try_from(c).unwrap_or(u32::MAX))
                    .unwrap_or(0),
            },
            _ => BackendReply::Failure {
                message: value
                    .get("error")
                    .map(value_to_text)
                    .unwrap_or_else(|| "Unknown error".to_string()),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, BackendReply::Success { .. })
    }
}

/// Extract an array field, treating a missing or non-array value as empty.
pub fn extract_array(value: &Value, key: &str) -> Vec<Value> {
    value
        .get(key)
        .and_then(|v| v.as_array())
        .cloned()
        .unwrap_or_default()
}

/// Extract a human readable message from a backend payload, if any.
pub fn extract_message(value: &Value) -> Option<String> {
    value
        .get("message")
        .or_else(|| value.get("status"))
        .map(value_to_text)
}

pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
