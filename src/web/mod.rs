pub mod error;
pub mod handlers;
pub mod params;
pub mod views;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::adapters::catalog::source_for;
use crate::config::SiteConfig;
use crate::core::catalog::ProjectCatalog;
use crate::core::content::SiteContent;
use crate::utils::error::Result;
use handlers::{api, pages};

// ============================================================================
// Application State
// ============================================================================

/// Shared, read-only state. Cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub content: Arc<SiteContent>,
    pub catalog: Arc<ProjectCatalog>,
}

impl AppState {
    pub fn new(config: SiteConfig, catalog: ProjectCatalog) -> Self {
        let content = SiteContent::from_config(&config);
        Self {
            config: Arc::new(config),
            content: Arc::new(content),
            catalog: Arc::new(catalog),
        }
    }

    /// 依設定載入專案目錄並建立狀態
    pub async fn load(config: SiteConfig) -> Result<Self> {
        let source = source_for(config.projects.catalog_path.as_deref());
        let catalog = ProjectCatalog::from_source(source.as_ref()).await?;
        Ok(Self::new(config, catalog))
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Sections
        .route("/", get(pages::home_page))
        .route("/about", get(pages::about_page))
        .route("/skills", get(pages::skills_page))
        .route("/projects", get(pages::projects_page))
        .route(
            "/contact",
            get(pages::contact_page).post(pages::submit_contact),
        )
        // Machine-readable
        .route("/health", get(api::health_check))
        .route("/api/projects", get(api::search_projects))
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(state: AppState) -> anyhow::Result<()> {
    let addr = state.config.bind_address()?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Portfolio listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
