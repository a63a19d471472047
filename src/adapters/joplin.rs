use crate::utils::error::{Result, SyncError};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct CreatedNote {
    id: String,
}

/// Client for the note-creation endpoint of the Joplin Data API. The token
/// travels as a query parameter, which is how the clipper service wants it.
pub struct JoplinClient {
    client: Client,
    base_url: String,
    token: String,
}

impl JoplinClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Create a markdown note in the given notebook and return its id.
    pub async fn create_note(&self, title: &str, body: &str, parent_id: &str) -> Result<String> {
        let url = format!("{}/notes", self.base_url);
        let payload = json!({
            "title": title,
            "body": body,
            "parent_id": parent_id
        });

        let response = self
            .client
            .post(&url)
            .query(&[("token", self.token.as_str())])
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(SyncError::RemoteError {
                status: status.as_u16(),
                body: text,
            });
        }

        let text = response.text().await?;
        let note: CreatedNote = serde_json::from_str(&text)?;
        Ok(note.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_create_note_sends_token_and_payload() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/notes")
                .query_param("token", "joplin-token")
                .json_body(json!({
                    "title": "Daily digest",
                    "body": "Pending Actions:\n\n- [ ] Call dentist",
                    "parent_id": "folder-1"
                }));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({ "id": "note-123" }));
        });

        let client = JoplinClient::new(server.base_url(), "joplin-token");
        let note_id = client
            .create_note(
                "Daily digest",
                "Pending Actions:\n\n- [ ] Call dentist",
                "folder-1",
            )
            .await
            .unwrap();

        mock.assert();
        assert_eq!(note_id, "note-123");
    }

    #[tokio::test]
    async fn test_create_note_surfaces_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/notes");
            then.status(403).body("invalid token");
        });

        let client = JoplinClient::new(server.base_url(), "bad-token");
        let err = client.create_note("t", "b", "folder-1").await.unwrap_err();

        match err {
            SyncError::RemoteError { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body, "invalid token");
            }
            other => panic!("expected RemoteError, got: {:?}", other),
        }
    }
}
