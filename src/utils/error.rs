use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Template rendering error: {0}")]
    TemplateError(#[from] askama::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Catalog error in project '{project}': {reason}")]
    CatalogError { project: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Catalog,
    Rendering,
    System,
}

impl PortfolioError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PortfolioError::ConfigValidationError { .. }
            | PortfolioError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PortfolioError::CatalogError { .. } => ErrorCategory::Catalog,
            PortfolioError::TemplateError(_) => ErrorCategory::Rendering,
            PortfolioError::IoError(_) => ErrorCategory::System,
        }
    }

    /// 給使用者看的錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            PortfolioError::IoError(e) => format!("Could not read a required file: {}", e),
            PortfolioError::ConfigValidationError { field, message } => {
                format!("The configuration is invalid ({}): {}", field, message)
            }
            PortfolioError::InvalidConfigValueError { field, value, .. } => {
                format!("'{}' is not an acceptable value for {}", value, field)
            }
            PortfolioError::CatalogError { project, reason } => {
                format!("The project catalog is invalid at '{}': {}", project, reason)
            }
            PortfolioError::TemplateError(_) => "The page could not be rendered".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the TOML configuration file and command line flags"
            }
            ErrorCategory::Catalog => {
                "Make sure every project has a unique, non-empty name and a category other than 'All'"
            }
            ErrorCategory::Rendering => "Check the server logs for the failing template",
            ErrorCategory::System => "Check that the file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
