use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SyncError};
use crate::utils::validation::{validate_url, Validate};

pub const DEFAULT_NOTION_API_URL: &str = "https://api.notion.com/v1";
pub const DEFAULT_JOPLIN_BASE_URL: &str = "http://127.0.0.1:41184";

// Historical "To Dos" notebook id, overridable via JOPLIN_TODO_FOLDER_ID.
const DEFAULT_TODO_FOLDER_ID: &str = "9bd030cb7cda47a5beac41da29a149db";

const REQUIRED_VARS: [&str; 7] = [
    "NOTION_SECRET",
    "NOTION_ACTION_DATABASE_ID",
    "NOTION_PROJECTS_DATABASE_ID",
    "NOTION_CONTACTS_DATABASE_ID",
    "NOTION_INTERACTIONS_DATABASE_ID",
    "NOTION_ACTION_ZONE_PAGE_ID",
    "JOPLIN_TOKEN",
];

/// All runtime configuration, built once at process entry and handed to the
/// pipeline. No component reads the environment on its own.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub notion_api_url: String,
    pub notion_secret: String,
    pub action_database_id: String,
    pub projects_database_id: String,
    pub contacts_database_id: String,
    pub interactions_database_id: String,
    pub action_zone_page_id: String,
    pub joplin_base_url: String,
    pub joplin_token: String,
    pub todo_folder_id: String,
}

impl EnvConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary lookup so tests can inject values
    /// without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let missing: Vec<String> = REQUIRED_VARS
            .iter()
            .filter(|name| lookup(name).map_or(true, |value| value.trim().is_empty()))
            .map(|name| (*name).to_string())
            .collect();

        if !missing.is_empty() {
            return Err(SyncError::MissingConfigError { vars: missing });
        }

        let required = |name: &str| lookup(name).unwrap_or_default();
        let optional = |name: &str, default: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Self {
            notion_api_url: optional("NOTION_API_URL", DEFAULT_NOTION_API_URL),
            notion_secret: required("NOTION_SECRET"),
            action_database_id: required("NOTION_ACTION_DATABASE_ID"),
            projects_database_id: required("NOTION_PROJECTS_DATABASE_ID"),
            contacts_database_id: required("NOTION_CONTACTS_DATABASE_ID"),
            interactions_database_id: required("NOTION_INTERACTIONS_DATABASE_ID"),
            action_zone_page_id: required("NOTION_ACTION_ZONE_PAGE_ID"),
            joplin_base_url: optional("JOPLIN_BASE_URL", DEFAULT_JOPLIN_BASE_URL),
            joplin_token: required("JOPLIN_TOKEN"),
            todo_folder_id: optional("JOPLIN_TODO_FOLDER_ID", DEFAULT_TODO_FOLDER_ID),
        })
    }
}

impl Validate for EnvConfig {
    fn validate(&self) -> Result<()> {
        validate_url("NOTION_API_URL", &self.notion_api_url)?;
        validate_url("JOPLIN_BASE_URL", &self.joplin_base_url)?;
        Ok(())
    }
}

impl ConfigProvider for EnvConfig {
    fn notion_api_url(&self) -> &str {
        &self.notion_api_url
    }

    fn notion_secret(&self) -> &str {
        &self.notion_secret
    }

    fn action_database_id(&self) -> &str {
        &self.action_database_id
    }

    fn projects_database_id(&self) -> &str {
        &self.projects_database_id
    }

    fn contacts_database_id(&self) -> &str {
        &self.contacts_database_id
    }

    fn interactions_database_id(&self) -> &str {
        &self.interactions_database_id
    }

    fn action_zone_page_id(&self) -> &str {
        &self.action_zone_page_id
    }

    fn joplin_base_url(&self) -> &str {
        &self.joplin_base_url
    }

    fn joplin_token(&self) -> &str {
        &self.joplin_token
    }

    fn todo_folder_id(&self) -> &str {
        &self.todo_folder_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_env() -> HashMap<String, String> {
        [
            ("NOTION_SECRET", "secret_abc"),
            ("NOTION_ACTION_DATABASE_ID", "db-actions"),
            ("NOTION_PROJECTS_DATABASE_ID", "db-projects"),
            ("NOTION_CONTACTS_DATABASE_ID", "db-contacts"),
            ("NOTION_INTERACTIONS_DATABASE_ID", "db-interactions"),
            ("NOTION_ACTION_ZONE_PAGE_ID", "page-action-zone"),
            ("JOPLIN_TOKEN", "joplin-token"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_from_lookup_with_full_environment() {
        let env = full_env();
        let config = EnvConfig::from_lookup(|name| env.get(name).cloned()).unwrap();

        assert_eq!(config.notion_secret, "secret_abc");
        assert_eq!(config.action_database_id, "db-actions");
        assert_eq!(config.notion_api_url, DEFAULT_NOTION_API_URL);
        assert_eq!(config.joplin_base_url, DEFAULT_JOPLIN_BASE_URL);
        assert_eq!(config.todo_folder_id, DEFAULT_TODO_FOLDER_ID);
    }

    #[test]
    fn test_from_lookup_lists_every_missing_variable() {
        let mut env = full_env();
        env.remove("NOTION_SECRET");
        env.remove("JOPLIN_TOKEN");
        env.insert("NOTION_ACTION_ZONE_PAGE_ID".to_string(), "   ".to_string());

        let err = EnvConfig::from_lookup(|name| env.get(name).cloned()).unwrap_err();
        match err {
            SyncError::MissingConfigError { vars } => {
                assert_eq!(
                    vars,
                    vec![
                        "NOTION_SECRET".to_string(),
                        "NOTION_ACTION_ZONE_PAGE_ID".to_string(),
                        "JOPLIN_TOKEN".to_string(),
                    ]
                );
            }
            other => panic!("expected MissingConfigError, got: {:?}", other),
        }
    }

    #[test]
    fn test_from_lookup_overrides_defaults() {
        let mut env = full_env();
        env.insert(
            "JOPLIN_BASE_URL".to_string(),
            "http://localhost:9999".to_string(),
        );
        env.insert("JOPLIN_TODO_FOLDER_ID".to_string(), "folder-42".to_string());

        let config = EnvConfig::from_lookup(|name| env.get(name).cloned()).unwrap();
        assert_eq!(config.joplin_base_url, "http://localhost:9999");
        assert_eq!(config.todo_folder_id, "folder-42");
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        let mut env = full_env();
        env.insert("JOPLIN_BASE_URL".to_string(), "not-a-url".to_string());

        let config = EnvConfig::from_lookup(|name| env.get(name).cloned()).unwrap();
        assert!(config.validate().is_err());
    }
}
