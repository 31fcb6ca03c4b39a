use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub contact: ContactSection,
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub projects: ProjectsSection,
    #[serde(default)]
    pub skills: Option<Vec<SkillGroup>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub page_title: String,
    pub page_icon: String,
    pub layout: String,
    pub nav_title: String,
    pub owner_name: String,
    pub headline: String,
    pub profile_image_url: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            page_title: "Alex Rivera - Portfolio".to_string(),
            page_icon: "💻".to_string(),
            layout: "wide".to_string(),
            nav_title: "Portfolio Navigation".to_string(),
            owner_name: "Alex Rivera".to_string(),
            headline: "Software Engineer".to_string(),
            profile_image_url: "https://via.placeholder.com/300".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSection {
    pub email: String,
    pub website: String,
    pub linkedin: String,
}

impl Default for ContactSection {
    fn default() -> Self {
        Self {
            email: "alex.rivera@example.com".to_string(),
            website: "https://www.alexrivera.com".to_string(),
            linkedin: "https://linkedin.com/in/alexrivera".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectsSection {
    pub page_size: Option<usize>,
    pub catalog_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub skills: Vec<String>,
}

const VALID_LAYOUTS: [&str; 2] = ["wide", "centered"];

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PortfolioError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PortfolioError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SITE_OWNER})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PortfolioError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_display_text("site.page_title", &self.site.page_title)?;
        validation::validate_display_text("site.nav_title", &self.site.nav_title)?;
        validation::validate_display_text("site.owner_name", &self.site.owner_name)?;

        if !VALID_LAYOUTS.contains(&self.site.layout.as_str()) {
            return Err(PortfolioError::InvalidConfigValueError {
                field: "site.layout".to_string(),
                value: self.site.layout.clone(),
                reason: format!("Valid layouts: {}", VALID_LAYOUTS.join(", ")),
            });
        }
        validation::validate_link("site.profile_image_url", &self.site.profile_image_url)?;

        validation::validate_email("contact.email", &self.contact.email)?;
        validation::validate_link("contact.website", &self.contact.website)?;
        validation::validate_link("contact.linkedin", &self.contact.linkedin)?;

        validation::validate_host("server.host", &self.server.host)?;
        validation::validate_port("server.port", self.server.port)?;

        if let Some(page_size) = self.projects.page_size {
            validation::validate_page_size("projects.page_size", page_size)?;
        }
        if let Some(path) = &self.projects.catalog_path {
            validation::validate_catalog_path("projects.catalog_path", path)?;
        }

        if let Some(groups) = &self.skills {
            for group in groups {
                validation::validate_display_text("skills.name", &group.name)?;
            }
        }

        Ok(())
    }

    pub fn bind_address(&self) -> Result<std::net::SocketAddr> {
        let ip: std::net::IpAddr =
            self.server
                .host
                .parse()
                .map_err(|_| PortfolioError::InvalidConfigValueError {
                    field: "server.host".to_string(),
                    value: self.server.host.clone(),
                    reason: "Host must be an IPv4 or IPv6 address".to_string(),
                })?;
        Ok(std::net::SocketAddr::new(ip, self.server.port))
    }

    pub fn is_wide_layout(&self) -> bool {
        self.site.layout == "wide"
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
