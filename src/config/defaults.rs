pub const DEFAULT_BACKEND_URL: &str =
    "https://agentbackendservice-dfcpcudzeah4b6ae.northeurope-01.azurewebsites.net/api";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_USER_ID: &str = "default_user";

pub const DEFAULT_HISTORY_LIMIT: u32 = 10;

pub fn default_history_limit() -> u32 {
    DEFAULT_HISTORY_LIMIT
}

pub fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "1" | "yes")
}
