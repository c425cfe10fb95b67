use omniflow::api::response::{extract_array, extract_message};
use omniflow::api::BackendReply;
use omniflow::error::OmniflowError;
use serde_json::json;

#[test]
fn test_decode_success_with_all_fields() {
    let body = json!({
        "response": "Here are your tasks.",
        "thread_id": "thread_abc",
        "tool_calls_count": 3
    });

    let reply = BackendReply::decode(&body);
    assert_eq!(
        reply,
        BackendReply::Success {
            response: "Here are your tasks.".to_string(),
            thread_id: Some("thread_abc".to_string()),
            tool_calls_count: 3,
        }
    );
}

#[test]
fn test_decode_success_defaults_tool_calls_to_zero() {
    let body = json!({ "response": "Hi", "thread_id": "t1" });

    match BackendReply::decode(&body) {
        BackendReply::Success {
            tool_calls_count, ..
        } => assert_eq!(tool_calls_count, 0),
        other => panic!("expected success, got {:?}", other),
    }
}

#[test]
fn test_decode_success_without_thread_id() {
    let body = json!({ "response": "Hi" });

    match BackendReply::decode(&body) {
        BackendReply::Success { thread_id, .. } => assert_eq!(thread_id, None),
        other => panic!("expected success, got {:?}", other),
    }
}

#[test]
fn test_decode_non_string_response_is_rendered() {
    let body = json!({ "response": { "items": [1, 2] } });

    match BackendReply::decode(&body) {
        BackendReply::Success { response, .. } => assert_eq!(response, r#"{"items":[1,2]}"#),
        other => panic!("expected success, got {:?}", other),
    }
}

#[test]
fn test_decode_error_payload() {
    let body = json!({ "error": "model overloaded" });

    assert_eq!(
        BackendReply::decode(&body),
        BackendReply::Failure {
            message: "model overloaded".to_string()
        }
    );
}

#[test]
fn test_decode_missing_response_is_failure() {
    let reply = BackendReply::decode(&json!({ "thread_id": "t1" }));
    assert_eq!(
        reply,
        BackendReply::Failure {
            message: "Unknown error".to_string()
        }
    );
    assert!(!reply.is_success());
}

#[test]
fn test_null_response_is_empty_success() {
    let reply = BackendReply::decode(&json!({ "response": null, "thread_id": "t1" }));
    assert_eq!(
        reply,
        BackendReply::Success {
            response: String::new(),
            thread_id: Some("t1".to_string()),
            tool_calls_count: 0,
        }
    );
}

#[test]
fn test_from_result_maps_errors_to_failure() {
    let reply = BackendReply::from_result(Err(OmniflowError::Transport(
        "connection refused".to_string(),
    )));

    match reply {
        BackendReply::Failure { message } => assert!(message.contains("connection refused")),
        other => panic!("expected failure, got {:?}", other),
    }
}

#[test]
fn test_extract_array_missing_key_is_empty() {
    assert!(extract_array(&json!({}), "blobs").is_empty());
    assert!(extract_array(&json!({ "blobs": "nope" }), "blobs").is_empty());
    assert_eq!(extract_array(&json!({ "blobs": ["a", "b"] }), "blobs").len(), 2);
}

#[test]
fn test_extract_message() {
    assert_eq!(
        extract_message(&json!({ "message": "created" })),
        Some("created".to_string())
    );
    assert_eq!(extract_message(&json!({})), None);
}
