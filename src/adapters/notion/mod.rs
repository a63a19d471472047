pub mod extract;
pub mod filters;

use crate::utils::error::{Result, SyncError};
use reqwest::Client;
use serde_json::Value;

pub const NOTION_VERSION: &str = "2022-06-28";

/// Thin authenticated client for the two Notion endpoints this tool touches:
/// database query and block children. Single page of results only.
pub struct NotionClient {
    client: Client,
    api_url: String,
    secret: String,
}

impl NotionClient {
    pub fn new(api_url: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into(),
            secret: secret.into(),
        }
    }

    pub async fn query_database(&self, database_id: &str, payload: &Value) -> Result<Vec<Value>> {
        let url = format!("{}/databases/{}/query", self.api_url, database_id);
        tracing::debug!("Querying Notion database: {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.secret)
            .header("Notion-Version", NOTION_VERSION)
            .json(payload)
            .send()
            .await?;

        Self::results(response).await
    }

    pub async fn block_children(&self, block_id: &str) -> Result<Vec<Value>> {
        let url = format!("{}/blocks/{}/children", self.api_url, block_id);
        tracing::debug!("Fetching Notion block children: {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.secret)
            .header("Notion-Version", NOTION_VERSION)
            .send()
            .await?;

        Self::results(response).await
    }

    async fn results(response: reqwest::Response) -> Result<Vec<Value>> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SyncError::RemoteError {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        let data: Value = serde_json::from_str(&text)?;

        Ok(data
            .get("results")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default())
    }
}
