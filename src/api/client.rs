use crate::api::{BackendReply, ChatRequest, Endpoint};
use crate::config::Config;
use crate::error::{OmniflowError, Result};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde_json::{Map, Value};
use std::time::{Duration, Instant};

pub const USER_ID_HEADER: &str = "X-User-Id";

/// A value paired with the wall-clock time it took to produce.
#[derive(Debug)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// HTTP client for the assistant backend. One attempt per call, no retries.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    function_key: Option<String>,
    timeout: Duration,
}

impl BackendClient {
    pub fn new(
        base_url: impl Into<String>,
        function_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            function_key,
            timeout,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.backend_url.clone(),
            config.function_key.clone(),
            Duration::from_secs(config.request_timeout),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Issue a single request and time it. The elapsed time is measured up to
    /// the point of failure when the call does not succeed.
    pub async fn call(
        &self,
        user_id: &str,
        endpoint: &str,
        payload: Option<&Value>,
        method: Method,
    ) -> Timed<Result<Value>> {
        let started = Instant::now();
        let value = self.dispatch(user_id, endpoint, payload, method).await;
        let elapsed = started.elapsed();

        match &value {
            Ok(_) => tracing::debug!(
                endpoint,
                elapsed_ms = elapsed.as_millis() as u64,
                "backend call succeeded"
            ),
            Err(e) => tracing::warn!(
                endpoint,
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "backend call failed"
            ),
        }

        Timed { value, elapsed }
    }

    pub async fn call_endpoint(
        &self,
        user_id: &str,
        endpoint: Endpoint,
        payload: Option<&Value>,
    ) -> Timed<Result<Value>> {
        self.call(user_id, endpoint.path(), payload, endpoint.method())
            .await
    }

    /// Send one chat turn and decode the reply at the boundary.
    pub async fn chat(&self, user_id: &str, request: &ChatRequest) -> Timed<BackendReply> {
        let payload = match serde_json::to_value(request) {
            Ok(payload) => payload,
            Err(e) => {
                return Timed {
                    value: BackendReply::Failure {
                        message: e.to_string(),
                    },
                    elapsed: Duration::ZERO,
                }
            }
        };

        let timed = self
            .call_endpoint(user_id, Endpoint::ToolCallHandler, Some(&payload))
            .await;

        Timed {
            value: BackendReply::from_result(timed.value),
            elapsed: timed.elapsed,
        }
    }

    async fn dispatch(
        &self,
        user_id: &str,
        endpoint: &str,
        payload: Option<&Value>,
        method: Method,
    ) -> Result<Value> {
        let user_header = HeaderValue::from_str(user_id).map_err(|e| {
            OmniflowError::MalformedPayload(format!("Invalid user id header: {}", e))
        })?;

        let mut request = self
            .http
            .request(method.clone(), self.url_for(endpoint))
            .header(USER_ID_HEADER, user_header);

        if let Some(key) = &self.function_key {
            request = request.query(&[("code", key.as_str())]);
        }

        if let Some(payload) = payload {
            request = if method == Method::GET {
                request.query(&query_pairs(payload)?)
            } else {
                request.json(payload)
            };
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(OmniflowError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Value::Object(Map::new()));
        }

        serde_json::from_str(&body).map_err(|e| OmniflowError::Backend {
            status: status.as_u16(),
            message: format!("invalid JSON response: {}", e),
        })
    }
}

/// Flatten a JSON object into query parameters; nulls are dropped.
fn query_pairs(payload: &Value) -> Result<Vec<(String, String)>> {
    let object = payload.as_object().ok_or_else(|| {
        OmniflowError::MalformedPayload("GET parameters must be a JSON object".to_string())
    })?;

    Ok(object
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| {
            let rendered = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.clone(), rendered)
        })
        .collect())
}
