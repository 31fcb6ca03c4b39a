use serde::{Deserialize, Serialize};
use std::fmt;

/// 類別篩選器中代表「不限類別」的選項
pub const ALL_CATEGORIES: &str = "All";

/// A single entry of the project catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub details: Vec<String>,
    pub link: String,
    pub category: String,
}

impl ProjectRecord {
    pub fn technologies_line(&self) -> String {
        self.technologies.join(" | ")
    }
}

/// Category restriction chosen in the projects view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelection {
    #[default]
    All,
    Only(String),
}

impl CategorySelection {
    /// 解析表單送來的類別字串，空字串與 "All" 都視為不限類別
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == ALL_CATEGORIES {
            CategorySelection::All
        } else {
            CategorySelection::Only(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategorySelection::All => ALL_CATEGORIES,
            CategorySelection::Only(category) => category,
        }
    }

    pub fn admits(&self, record: &ProjectRecord) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(category) => record.category == *category,
        }
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields collected by the contact form. Never stored or sent anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "message")]
    pub body: String,
}

/// The five navigable views of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    AboutMe,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::AboutMe,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::AboutMe => "About Me",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Section::Home => "/",
            Section::AboutMe => "/about",
            Section::Skills => "/skills",
            Section::Projects => "/projects",
            Section::Contact => "/contact",
        }
    }

    /// Accepts either the navigation label ("About Me") or the path slug
    /// ("about"), case-insensitively.
    pub fn from_choice(choice: &str) -> Option<Section> {
        let wanted = choice.trim().to_lowercase();
        Section::ALL.into_iter().find(|section| {
            section.label().to_lowercase() == wanted
                || section.path().trim_start_matches('/') == wanted
        })
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str) -> ProjectRecord {
        ProjectRecord {
            name: "Custom Transformer Model".to_string(),
            description: "Transformer for domain-specific NLP tasks.".to_string(),
            technologies: vec!["Transformers".to_string(), "NLP".to_string()],
            details: vec![],
            link: "https://github.com/username/custom-transformer".to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_category_selection_parse() {
        assert_eq!(CategorySelection::parse("All"), CategorySelection::All);
        assert_eq!(CategorySelection::parse(""), CategorySelection::All);
        assert_eq!(
            CategorySelection::parse("Machine Learning"),
            CategorySelection::Only("Machine Learning".to_string())
        );
        // 類別比對大小寫敏感
        assert_eq!(
            CategorySelection::parse("all"),
            CategorySelection::Only("all".to_string())
        );
    }

    #[test]
    fn test_category_selection_admits_exact_match_only() {
        let ml = record("Machine Learning");
        assert!(CategorySelection::All.admits(&ml));
        assert!(CategorySelection::parse("Machine Learning").admits(&ml));
        assert!(!CategorySelection::parse("machine learning").admits(&ml));
        assert!(!CategorySelection::parse("Machine").admits(&ml));
    }

    #[test]
    fn test_technologies_line() {
        assert_eq!(record("ML").technologies_line(), "Transformers | NLP");
    }

    #[test]
    fn test_section_from_choice() {
        assert_eq!(Section::from_choice("About Me"), Some(Section::AboutMe));
        assert_eq!(Section::from_choice("about"), Some(Section::AboutMe));
        assert_eq!(Section::from_choice("PROJECTS"), Some(Section::Projects));
        assert_eq!(Section::from_choice("home"), Some(Section::Home));
        assert_eq!(Section::from_choice("blog"), None);
    }

    #[test]
    fn test_contact_message_uses_message_field_name() {
        let msg: ContactMessage =
            serde_json::from_str(r#"{"name":"Sam","email":"","message":"Hi"}"#).unwrap();
        assert_eq!(msg.body, "Hi");
        assert_eq!(msg.email, "");
    }
}
