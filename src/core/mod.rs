pub mod digest;
pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{Digest, DigestData, FetchOutcome};
pub use crate::domain::ports::{ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
