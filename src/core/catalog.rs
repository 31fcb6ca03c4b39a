use crate::domain::model::{ProjectRecord, ALL_CATEGORIES};
use crate::domain::ports::CatalogSource;
use crate::utils::error::{PortfolioError, Result};
use std::collections::HashSet;

/// Read-only, ordered list of projects shown in the projects view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCatalog {
    records: Vec<ProjectRecord>,
}

impl ProjectCatalog {
    /// 建立目錄並檢查名稱唯一、類別合法
    pub fn from_records(records: Vec<ProjectRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());

        for record in &records {
            if record.name.trim().is_empty() {
                return Err(PortfolioError::CatalogError {
                    project: record.name.clone(),
                    reason: "project name cannot be empty".to_string(),
                });
            }
            if !seen.insert(record.name.as_str()) {
                return Err(PortfolioError::CatalogError {
                    project: record.name.clone(),
                    reason: "project name must be unique".to_string(),
                });
            }
            if record.category.trim().is_empty() {
                return Err(PortfolioError::CatalogError {
                    project: record.name.clone(),
                    reason: "category cannot be empty".to_string(),
                });
            }
            if record.category == ALL_CATEGORIES {
                return Err(PortfolioError::CatalogError {
                    project: record.name.clone(),
                    reason: format!("'{}' is reserved for the unfiltered view", ALL_CATEGORIES),
                });
            }
        }

        Ok(Self { records })
    }

    pub async fn from_source(source: &dyn CatalogSource) -> Result<Self> {
        tracing::info!("📂 Loading project catalog from {}", source.describe());
        let records = source.load_records().await?;
        let catalog = Self::from_records(records)?;
        tracing::info!(
            "✅ Loaded {} projects in {} categories",
            catalog.len(),
            catalog.category_options().len() - 1
        );
        Ok(catalog)
    }

    /// The eight projects the site ships with.
    pub fn builtin() -> Self {
        Self {
            records: builtin_records(),
        }
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Filter options: "All" followed by every distinct category in order of
    /// first appearance.
    pub fn category_options(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut options = vec![ALL_CATEGORIES.to_string()];
        for record in &self.records {
            if seen.insert(record.category.as_str()) {
                options.push(record.category.clone());
            }
        }
        options
    }
}

fn project(
    name: &str,
    description: &str,
    technologies: &[&str],
    details: &[&str],
    link: &str,
    category: &str,
) -> ProjectRecord {
    ProjectRecord {
        name: name.to_string(),
        description: description.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        details: details.iter().map(|d| d.to_string()).collect(),
        link: link.to_string(),
        category: category.to_string(),
    }
}

fn builtin_records() -> Vec<ProjectRecord> {
    vec![
        project(
            "LLM-Based Research Agent",
            "CrewAI-based agent for academic content generation.",
            &["CrewAI", "Python", "Large Language Models"],
            &[
                "Developed an autonomous research agent using CrewAI framework",
                "Implemented multi-agent collaboration for content generation",
                "Automated literature review and synthesis processes",
            ],
            "https://github.com/username/llm-research-agent",
            "AI Research",
        ),
        project(
            "Finance Trading Bot",
            "AI-powered trading bot using Django, CrewAI, and CCXT.",
            &["Django", "CrewAI", "CCXT", "Machine Learning"],
            &[
                "Created an intelligent trading algorithm with AI decision-making",
                "Integrated multiple cryptocurrency exchanges via CCXT",
                "Implemented risk management and portfolio optimization strategies",
            ],
            "https://github.com/username/ai-trading-bot",
            "Financial Technology",
        ),
        project(
            "MultiHQA Dataset",
            "A dataset for multi-hop question answering in STEM.",
            &["NLP", "Data Collection", "Question Answering"],
            &[
                "Curated a specialized dataset for complex STEM questions",
                "Developed multi-hop reasoning capabilities",
                "Contributed to advancing NLP research in scientific domains",
            ],
            "https://github.com/username/multihqa-dataset",
            "Academic Research",
        ),
        project(
            "AI-Powered Chatbot",
            "Django-based chatbot trained on Investopedia instruction-tuning dataset.",
            &["Django", "NLP", "Machine Learning"],
            &[
                "Built a context-aware financial knowledge chatbot",
                "Fine-tuned on domain-specific financial instruction data",
                "Implemented advanced conversational AI techniques",
            ],
            "https://github.com/username/financial-chatbot",
            "Conversational AI",
        ),
        project(
            "Streamlit Chrome Extension Integration",
            "Added Chrome extension support for Streamlit web applications.",
            &["Streamlit", "Chrome Extensions", "Web Development"],
            &[
                "Developed a novel integration method for Streamlit apps",
                "Created a bridge between browser extensions and web applications",
                "Enhanced user interaction and browser-based tool capabilities",
            ],
            "https://github.com/username/streamlit-chrome-extension",
            "Web Technology",
        ),
        project(
            "Human-Centered AI Data Generation",
            "Created sample data for pivot tables related to AI augmenting human capabilities.",
            &["Data Science", "AI", "Data Visualization"],
            &[
                "Generated comprehensive datasets highlighting AI's collaborative potential",
                "Developed innovative pivot table methodologies",
                "Explored human-AI interaction data modeling",
            ],
            "https://github.com/username/human-ai-data-gen",
            "Data Research",
        ),
        project(
            "Custom Transformer Model",
            "Developed a transformer-based model for domain-specific NLP tasks.",
            &["Transformers", "NLP", "Machine Learning"],
            &[
                "Designed a specialized transformer architecture",
                "Achieved state-of-the-art performance in domain-specific tasks",
                "Implemented custom tokenization and training strategies",
            ],
            "https://github.com/username/custom-transformer",
            "Machine Learning",
        ),
        project(
            "Portfolio & Blogging Website",
            "Built a personal website using Streamlit and Docker, integrating previous data.",
            &["Streamlit", "Docker", "Web Development"],
            &[
                "Created a dynamic personal portfolio platform",
                "Implemented containerized deployment with Docker",
                "Developed a responsive and interactive web presence",
            ],
            "https://github.com/username/personal-portfolio",
            "Web Development",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_passes_validation() {
        let builtin = ProjectCatalog::builtin();
        assert_eq!(builtin.len(), 8);
        let validated = ProjectCatalog::from_records(builtin.records().to_vec()).unwrap();
        assert_eq!(validated, builtin);
    }

    #[test]
    fn test_category_options_start_with_all_and_cover_every_record() {
        let catalog = ProjectCatalog::builtin();
        let options = catalog.category_options();

        assert_eq!(options[0], "All");
        assert_eq!(options[1], "AI Research");
        assert_eq!(options.len(), 9);
        for record in catalog.records() {
            assert!(options.contains(&record.category));
        }
    }

    #[test]
    fn test_category_options_are_distinct() {
        let mut records = ProjectCatalog::builtin().records().to_vec();
        records[1].category = "AI Research".to_string();
        let catalog = ProjectCatalog::from_records(records).unwrap();

        let options = catalog.category_options();
        assert_eq!(options.iter().filter(|o| *o == "AI Research").count(), 1);
        assert_eq!(options.len(), 8);
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let mut records = ProjectCatalog::builtin().records().to_vec();
        records[3].name = records[0].name.clone();

        let err = ProjectCatalog::from_records(records).unwrap_err();
        assert!(matches!(err, PortfolioError::CatalogError { ref reason, .. } if reason.contains("unique")));
    }

    #[test]
    fn test_reserved_and_empty_categories_are_rejected() {
        let mut records = ProjectCatalog::builtin().records().to_vec();
        records[0].category = "All".to_string();
        assert!(ProjectCatalog::from_records(records).is_err());

        let mut records = ProjectCatalog::builtin().records().to_vec();
        records[0].category = " ".to_string();
        assert!(ProjectCatalog::from_records(records).is_err());
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = ProjectCatalog::from_records(vec![]).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.category_options(), vec!["All".to_string()]);
    }
}
