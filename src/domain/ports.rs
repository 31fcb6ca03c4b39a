use crate::domain::model::ProjectRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Somewhere the project list can be loaded from at startup.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    fn describe(&self) -> String;
    async fn load_records(&self) -> Result<Vec<ProjectRecord>>;
}
