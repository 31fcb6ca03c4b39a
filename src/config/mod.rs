pub mod toml_config;

pub use toml_config::{SiteConfig, SkillGroup};

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "portfolio-site")]
#[command(about = "Serve a personal portfolio site")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Address to bind, overrides server.host
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on, overrides server.port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// TOML file with [[projects]] entries, overrides projects.catalog_path
    #[arg(long)]
    pub catalog: Option<String>,

    /// Projects shown per page, overrides projects.page_size
    #[arg(long)]
    pub page_size: Option<usize>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 讀取設定檔（若有），再套用命令列覆蓋
    pub fn load_site_config(&self) -> crate::utils::error::Result<SiteConfig> {
        let mut site = match &self.config {
            Some(path) => SiteConfig::from_file(path)?,
            None => SiteConfig::default(),
        };
        self.apply_overrides(&mut site);
        Ok(site)
    }

    pub fn apply_overrides(&self, site: &mut SiteConfig) {
        if let Some(host) = &self.host {
            site.server.host = host.clone();
            tracing::info!("🔧 server.host overridden to: {}", host);
        }
        if let Some(port) = self.port {
            site.server.port = port;
            tracing::info!("🔧 server.port overridden to: {}", port);
        }
        if let Some(catalog) = &self.catalog {
            site.projects.catalog_path = Some(catalog.clone());
            tracing::info!("🔧 projects.catalog_path overridden to: {}", catalog);
        }
        if let Some(page_size) = self.page_size {
            site.projects.page_size = Some(page_size);
            tracing::info!("🔧 projects.page_size overridden to: {}", page_size);
        }
    }
}
