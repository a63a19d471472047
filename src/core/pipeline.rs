use crate::adapters::joplin::JoplinClient;
use crate::adapters::notion::{extract, filters, NotionClient};
use crate::core::digest;
use crate::domain::model::{Digest, DigestData, FetchOutcome};
use crate::domain::ports::{ConfigProvider, Pipeline};
use crate::utils::error::Result;
use serde_json::Value;

/// The one pipeline this tool runs: fetch every category from Notion, compose
/// the digest, publish it to Joplin.
pub struct DigestPipeline<C: ConfigProvider> {
    config: C,
    notion: NotionClient,
    joplin: JoplinClient,
}

impl<C: ConfigProvider> DigestPipeline<C> {
    pub fn new(config: C) -> Self {
        let notion = NotionClient::new(config.notion_api_url(), config.notion_secret());
        let joplin = JoplinClient::new(config.joplin_base_url(), config.joplin_token());
        Self {
            config,
            notion,
            joplin,
        }
    }

    async fn fetch_action_names(&self, payload: &Value, context: &str) -> FetchOutcome<Vec<String>> {
        match self
            .notion
            .query_database(self.config.action_database_id(), payload)
            .await
        {
            Ok(results) => FetchOutcome::Data(extract::extract_action_names(&results)),
            Err(e) => {
                tracing::error!("❌ Error querying Notion database for {}: {}", context, e);
                FetchOutcome::Failed
            }
        }
    }

    async fn count_matches(
        &self,
        database_id: &str,
        payload: &Value,
        context: &str,
    ) -> FetchOutcome<usize> {
        match self.notion.query_database(database_id, payload).await {
            Ok(results) => FetchOutcome::Data(results.len()),
            Err(e) => {
                tracing::error!("❌ Error querying {}: {}", context, e);
                FetchOutcome::Failed
            }
        }
    }

    /// A project is stalled when it is in progress and no open action is
    /// flagged as its next step. One dependent query per project, serially.
    async fn fetch_stalled_projects(&self) -> FetchOutcome<Vec<String>> {
        let projects = match self
            .notion
            .query_database(
                self.config.projects_database_id(),
                &filters::in_progress_projects(),
            )
            .await
        {
            Ok(results) => results,
            Err(e) => {
                tracing::error!(
                    "❌ Error querying Notion database for in-progress projects: {}",
                    e
                );
                return FetchOutcome::Failed;
            }
        };

        let mut stalled = Vec::new();
        for project in &projects {
            let Some(project_id) = project.get("id").and_then(Value::as_str) else {
                continue;
            };

            match self
                .notion
                .query_database(
                    self.config.action_database_id(),
                    &filters::project_next_step(project_id),
                )
                .await
            {
                Ok(matches) if matches.is_empty() => {
                    if let Some(name) = extract::extract_title(project) {
                        stalled.push(name);
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    // Skip this project rather than drop the whole category
                    tracing::error!(
                        "❌ Error querying next-step actions for project {}: {}",
                        project_id,
                        e
                    );
                }
            }
        }

        FetchOutcome::Data(stalled)
    }

    async fn fetch_weekly_goals(&self) -> FetchOutcome<Option<String>> {
        let blocks = match self
            .notion
            .block_children(self.config.action_zone_page_id())
            .await
        {
            Ok(blocks) => blocks,
            Err(e) => {
                tracing::error!("❌ Error fetching Action Zone blocks: {}", e);
                return FetchOutcome::Failed;
            }
        };

        let Some(block_id) = extract::find_weekly_goals_block(&blocks) else {
            return FetchOutcome::Data(None);
        };

        match self.notion.block_children(&block_id).await {
            Ok(children) => FetchOutcome::Data(extract::weekly_goals_markdown(&children)),
            Err(e) => {
                tracing::error!("❌ Error fetching Weekly Goals child blocks: {}", e);
                FetchOutcome::Failed
            }
        }
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Pipeline for DigestPipeline<C> {
    async fn extract(&self) -> Result<DigestData> {
        // One date for every query in this run
        let today = filters::today_utc();

        let weekly_goals = self.fetch_weekly_goals().await;
        let pending_actions = self
            .fetch_action_names(&filters::pending_actions(&today), "pending actions")
            .await;
        let waiting_actions = self
            .fetch_action_names(&filters::waiting_actions(&today), "waiting items")
            .await;
        let stalled_projects = self.fetch_stalled_projects().await;
        let unscheduled = self
            .count_matches(
                self.config.action_database_id(),
                &filters::unscheduled_actions(),
                "Notion database for unscheduled actions",
            )
            .await;
        let contacts_needing_review = self
            .count_matches(
                self.config.contacts_database_id(),
                &filters::needs_review("Needs Review"),
                "Contacts needing review",
            )
            .await;
        let interactions_project_review = self
            .count_matches(
                self.config.interactions_database_id(),
                &filters::needs_review("Project Review"),
                "Interactions for project review",
            )
            .await;

        Ok(DigestData {
            weekly_goals,
            pending_actions,
            waiting_actions,
            stalled_projects,
            unscheduled,
            contacts_needing_review,
            interactions_project_review,
        })
    }

    async fn transform(&self, data: DigestData) -> Result<Option<Digest>> {
        Ok(digest::assemble(&data).map(|body| Digest {
            title: digest::note_title(chrono::Local::now().date_naive()),
            body,
        }))
    }

    async fn load(&self, digest: Digest) -> Result<Option<String>> {
        // 建立 Joplin 筆記
        match self
            .joplin
            .create_note(&digest.title, &digest.body, self.config.todo_folder_id())
            .await
        {
            Ok(note_id) => {
                tracing::info!("✅ Created Joplin note with id: {}", note_id);
                Ok(Some(note_id))
            }
            Err(e) => {
                // Publish failure is terminal for this run but not fatal
                tracing::error!("❌ Error creating Joplin note: {}", e);
                Ok(None)
            }
        }
    }
}
