use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct SyncEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SyncEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Run one extract → transform → load pass. Returns the created note id,
    /// or `None` when there was nothing to report or the publish failed.
    pub async fn run(&self) -> Result<Option<String>> {
        tracing::info!("Fetching data from Notion...");
        let data = self.pipeline.extract().await?;

        match self.pipeline.transform(data).await? {
            Some(digest) => {
                tracing::info!("Publishing digest to Joplin...");
                self.pipeline.load(digest).await
            }
            None => {
                tracing::info!("ℹ️ No actions or CRM items to send to Joplin today.");
                Ok(None)
            }
        }
    }
}
