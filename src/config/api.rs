use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub backend_url: Option<String>,
    #[serde(default)]
    pub function_key: Option<String>,
    #[serde(default)]
    pub request_timeout: Option<u64>,
}
