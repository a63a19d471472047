use crate::domain::model::{Digest, DigestData};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn notion_api_url(&self) -> &str;
    fn notion_secret(&self) -> &str;
    fn action_database_id(&self) -> &str;
    fn projects_database_id(&self) -> &str;
    fn contacts_database_id(&self) -> &str;
    fn interactions_database_id(&self) -> &str;
    fn action_zone_page_id(&self) -> &str;
    fn joplin_base_url(&self) -> &str;
    fn joplin_token(&self) -> &str;
    fn todo_folder_id(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<DigestData>;
    async fn transform(&self, data: DigestData) -> Result<Option<Digest>>;
    async fn load(&self, digest: Digest) -> Result<Option<String>>;
}
