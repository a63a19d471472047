pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::joplin::JoplinClient;
pub use adapters::notion::NotionClient;
pub use config::EnvConfig;
pub use core::{engine::SyncEngine, pipeline::DigestPipeline};
pub use domain::model::{Digest, DigestData, FetchOutcome};
pub use utils::error::{Result, SyncError};
