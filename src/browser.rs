//! Read access to the user's backend files and interaction history, plus the
//! manual data-entry forms.

use crate::api::response::{extract_array, value_to_text};
use crate::api::{BackendClient, Endpoint};
use crate::error::{OmniflowError, Result};
use crate::models::Category;
use serde_json::{json, Map, Value};

pub struct Browser<'a> {
    client: &'a BackendClient,
}

/// Parse a manually entered record. Only JSON objects are accepted.
pub fn parse_entry(raw: &str) -> Result<Map<String, Value>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(OmniflowError::MalformedPayload("entry is empty".to_string()));
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(OmniflowError::MalformedPayload(
            "entry must be a JSON object".to_string(),
        )),
        Err(e) => Err(OmniflowError::MalformedPayload(e.to_string())),
    }
}

/// Display name of a blob listing entry.
pub fn blob_name(entry: &Value) -> String {
    entry
        .get("name")
        .or_else(|| entry.get("file_name"))
        .map(value_to_text)
        .unwrap_or_else(|| value_to_text(entry))
}

impl<'a> Browser<'a> {
    pub fn new(client: &'a BackendClient) -> Self {
        Self { client }
    }

    pub async fn list_files(&self, user_id: &str) -> Result<Vec<String>> {
        let payload = json!({ "user_id": user_id });
        let body = self.request(user_id, Endpoint::ListBlobs, &payload).await?;

        Ok(extract_array(&body, "blobs").iter().map(blob_name).collect())
    }

    pub async fn read_file(&self, user_id: &str, file_name: &str) -> Result<Value> {
        let payload = json!({ "file_name": file_name, "user_id": user_id });
        let body = self.request(user_id, Endpoint::ReadBlobFile, &payload).await?;

        Ok(body.get("data").cloned().unwrap_or_else(|| json!([])))
    }

    pub async fn interaction_history(&self, user_id: &str, limit: u32) -> Result<Vec<Value>> {
        let payload = json!({ "limit": limit, "user_id": user_id });
        let body = self
            .request(user_id, Endpoint::InteractionHistory, &payload)
            .await?;

        Ok(extract_array(&body, "history"))
    }

    /// Submit a manual entry. Nothing is sent when `raw_json` is malformed.
    pub async fn add_data(
        &self,
        user_id: &str,
        file_name: &str,
        raw_json: &str,
        category: Category,
    ) -> Result<Value> {
        let mut data = parse_entry(raw_json)?;
        data.entry("category")
            .or_insert_with(|| Value::String(category.code().to_string()));

        let payload = json!({
            "user_id": user_id,
            "file_name": file_name,
            "data": Value::Object(data),
        });
        self.request(user_id, Endpoint::AddNewData, &payload).await
    }

    pub async fn filtered_data(
        &self,
        user_id: &str,
        file_name: &str,
        raw_filter: &str,
    ) -> Result<Vec<Value>> {
        let filters = parse_entry(raw_filter)?;

        let payload = json!({
            "user_id": user_id,
            "file_name": file_name,
            "filters": Value::Object(filters),
        });
        let body = self
            .request(user_id, Endpoint::GetFilteredData, &payload)
            .await?;

        Ok(extract_array(&body, "data"))
    }

    async fn request(&self, user_id: &str, endpoint: Endpoint, payload: &Value) -> Result<Value> {
        self.client
            .call_endpoint(user_id, endpoint, Some(payload))
            .await
            .value
    }
}
