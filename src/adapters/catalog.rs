use crate::core::catalog::ProjectCatalog;
use crate::domain::model::ProjectRecord;
use crate::domain::ports::CatalogSource;
use crate::utils::error::{PortfolioError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;

/// The projects compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

#[async_trait]
impl CatalogSource for BuiltinCatalog {
    fn describe(&self) -> String {
        "built-in project list".to_string()
    }

    async fn load_records(&self) -> Result<Vec<ProjectRecord>> {
        Ok(ProjectCatalog::builtin().records().to_vec())
    }
}

/// A TOML file of `[[projects]]` tables.
#[derive(Debug, Clone)]
pub struct TomlCatalogFile {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    projects: Vec<ProjectRecord>,
}

impl TomlCatalogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn parse(content: &str) -> Result<Vec<ProjectRecord>> {
        let document: CatalogDocument =
            toml::from_str(content).map_err(|e| PortfolioError::ConfigValidationError {
                field: "projects".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;
        Ok(document.projects)
    }
}

#[async_trait]
impl CatalogSource for TomlCatalogFile {
    fn describe(&self) -> String {
        format!("catalog file {}", self.path.display())
    }

    async fn load_records(&self) -> Result<Vec<ProjectRecord>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        Self::parse(&content)
    }
}

/// 依設定選擇目錄來源
pub fn source_for(catalog_path: Option<&str>) -> Box<dyn CatalogSource> {
    match catalog_path {
        Some(path) => Box::new(TomlCatalogFile::new(path)),
        None => Box::new(BuiltinCatalog),
    }
}
