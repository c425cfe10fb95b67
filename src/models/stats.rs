use chrono::{DateTime, Local};
use serde::Serialize;

/// Telemetry for one completed turn.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TurnStatistics {
    /// Wall-clock seconds spent on the backend call, failures included.
    pub response_time: f64,
    pub timestamp: DateTime<Local>,
    pub has_error: bool,
    pub tool_calls_count: u32,
    pub thread_id: Option<String>,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
}

/// Aggregates shown in the debug panel.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SessionSummary {
    pub total_exchanges: usize,
    pub total_tool_calls: u64,
    pub error_count: usize,
    pub last_response_time: Option<f64>,
    pub average_response_time: Option<f64>,
}
