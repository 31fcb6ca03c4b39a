pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod web;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::SiteConfig;
pub use crate::core::{catalog::ProjectCatalog, filter::filter_projects, grid::ProjectGrid};
pub use utils::error::{PortfolioError, Result};
pub use web::{create_router, AppState};
