use std::net::IpAddr;
use std::path::Path;

use crate::utils::error::{PortfolioError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> PortfolioError {
    PortfolioError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Text shown in the page title, headings or navigation: one non-blank line.
pub fn validate_display_text(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field_name, value, "Value cannot be empty or whitespace-only"));
    }
    if value.contains(['\n', '\r']) {
        return Err(invalid(field_name, value, "Value must fit on a single line"));
    }
    Ok(())
}

/// 外部連結必須是 http(s) 且有主機名稱，才能直接放進 `href`
pub fn validate_link(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "Link cannot be empty"));
    }

    let url = Url::parse(url_str)
        .map_err(|e| invalid(field_name, url_str, format!("Invalid URL format: {}", e)))?;
    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(invalid(
                field_name,
                url_str,
                format!("Links must use http or https, not {}", scheme),
            ))
        }
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid(field_name, url_str, "Link has no host name"));
    }
    Ok(())
}

/// Shown as a `mailto:` address, so it needs a local part and a domain.
pub fn validate_email(field_name: &str, email: &str) -> Result<()> {
    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && !domain.is_empty() && !email.contains(char::is_whitespace) =>
        {
            Ok(())
        }
        _ => Err(invalid(field_name, email, "Expected an address like name@example.com")),
    }
}

pub fn validate_host(field_name: &str, host: &str) -> Result<()> {
    if host.parse::<IpAddr>().is_err() {
        return Err(invalid(field_name, host, "Host must be an IPv4 or IPv6 address"));
    }
    Ok(())
}

pub fn validate_port(field_name: &str, port: u16) -> Result<()> {
    if port == 0 {
        return Err(invalid(field_name, port, "Port 0 would bind a random port"));
    }
    Ok(())
}

pub fn validate_page_size(field_name: &str, page_size: usize) -> Result<()> {
    if page_size == 0 {
        return Err(invalid(
            field_name,
            page_size,
            "Page size must be at least 1; omit it to show every project on one page",
        ));
    }
    Ok(())
}

/// The catalog file is parsed as TOML, so anything else is a mistake.
pub fn validate_catalog_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }
    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    let is_toml = Path::new(path)
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("toml"));
    if !is_toml {
        return Err(invalid(field_name, path, "Catalog must be a .toml file"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_display_text() {
        assert!(validate_display_text("site.page_title", "Alex Rivera - Portfolio").is_ok());
        assert!(validate_display_text("site.page_title", "   ").is_err());
        assert!(validate_display_text("site.page_title", "Alex\nRivera").is_err());
    }

    #[test]
    fn test_validate_link() {
        assert!(validate_link("contact.website", "https://www.alexrivera.com").is_ok());
        assert!(validate_link("contact.linkedin", "http://linkedin.com/in/alexrivera").is_ok());
        assert!(validate_link("contact.website", "").is_err());
        assert!(validate_link("contact.website", "invalid-url").is_err());
        assert!(validate_link("contact.website", "ftp://example.com").is_err());
        assert!(validate_link("contact.website", "javascript:alert(1)").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("contact.email", "alex.rivera@example.com").is_ok());
        assert!(validate_email("contact.email", "alex.rivera").is_err());
        assert!(validate_email("contact.email", "@example.com").is_err());
        assert!(validate_email("contact.email", "alex rivera@example.com").is_err());
    }

    #[test]
    fn test_validate_host_and_port() {
        assert!(validate_host("server.host", "127.0.0.1").is_ok());
        assert!(validate_host("server.host", "::1").is_ok());
        assert!(validate_host("server.host", "localhost").is_err());
        assert!(validate_host("server.host", "  ").is_err());

        assert!(validate_port("server.port", 8501).is_ok());
        assert!(validate_port("server.port", 0).is_err());
    }

    #[test]
    fn test_validate_page_size() {
        assert!(validate_page_size("projects.page_size", 4).is_ok());
        let err = validate_page_size("projects.page_size", 0).unwrap_err();
        assert!(err.to_string().contains("projects.page_size"));
    }

    #[test]
    fn test_validate_catalog_path() {
        assert!(validate_catalog_path("projects.catalog_path", "projects.toml").is_ok());
        assert!(validate_catalog_path("projects.catalog_path", "data/Projects.TOML").is_ok());
        assert!(validate_catalog_path("projects.catalog_path", "").is_err());
        assert!(validate_catalog_path("projects.catalog_path", "a\0b.toml").is_err());
        assert!(validate_catalog_path("projects.catalog_path", "projects.json").is_err());
        assert!(validate_catalog_path("projects.catalog_path", "projects").is_err());
    }
}
