use crate::domain::model::{CategorySelection, ProjectRecord};

/// Category + free-text criteria of the projects view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub category: CategorySelection,
    pub query: String,
}

impl ProjectFilter {
    pub fn new(category: CategorySelection, query: impl Into<String>) -> Self {
        Self {
            category,
            query: query.into(),
        }
    }

    pub fn apply<'a, I>(&self, records: I) -> Vec<&'a ProjectRecord>
    where
        I: IntoIterator<Item = &'a ProjectRecord>,
    {
        filter_projects(records, &self.category, &self.query)
    }
}

/// Keeps the records in the selected category whose name or description
/// contains `query`, ignoring case. Order is preserved.
///
/// The query is used as given: surrounding whitespace is significant and
/// `technologies` / `details` are never searched.
pub fn filter_projects<'a, I>(
    records: I,
    category: &CategorySelection,
    query: &str,
) -> Vec<&'a ProjectRecord>
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|record| category.admits(record) && matches_query(record, &needle))
        .collect()
}

fn matches_query(record: &ProjectRecord, needle: &str) -> bool {
    needle.is_empty()
        || record.name.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

/// Splits `items` into pages of `page_size` and returns page `requested`
/// (1-based, clamped into range). Without a page size everything is on one
/// page. An empty input still yields page 1 of 1.
pub fn paginate<T>(items: Vec<T>, page_size: Option<usize>, requested: usize) -> Page<T> {
    let total_items = items.len();
    let size = match page_size {
        Some(size) if size > 0 => size,
        _ => total_items.max(1),
    };
    let total_pages = total_items.div_ceil(size).max(1);
    let number = requested.clamp(1, total_pages);

    let items = items
        .into_iter()
        .skip((number - 1) * size)
        .take(size)
        .collect();

    Page {
        items,
        number,
        total_pages,
        total_items,
    }
}

/// 解析網址上的頁碼，非數字或 0 一律回到第一頁
pub fn parse_page_number(raw: Option<&str>) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|page| *page > 0)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::ProjectCatalog;

    fn names(records: &[&ProjectRecord]) -> Vec<String> {
        records.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_all_with_empty_query_returns_everything_in_order() {
        let catalog = ProjectCatalog::builtin();
        let result = filter_projects(catalog.records(), &CategorySelection::All, "");
        let expected: Vec<&ProjectRecord> = catalog.records().iter().collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = ProjectCatalog::builtin();
        let lower = filter_projects(catalog.records(), &CategorySelection::All, "chatbot");
        let upper = filter_projects(catalog.records(), &CategorySelection::All, "CHATBOT");
        assert_eq!(lower, upper);
        assert_eq!(names(&lower), vec!["AI-Powered Chatbot"]);
    }

    #[test]
    fn test_search_ignores_technologies_and_details() {
        let catalog = ProjectCatalog::builtin();
        // technology-only phrases
        assert!(filter_projects(catalog.records(), &CategorySelection::All, "large language models").is_empty());
        assert!(filter_projects(catalog.records(), &CategorySelection::All, "data visualization").is_empty());
        // details-only phrase
        assert!(filter_projects(catalog.records(), &CategorySelection::All, "tokenization").is_empty());
        assert_eq!(
            names(&filter_projects(catalog.records(), &CategorySelection::All, "ccxt")),
            vec!["Finance Trading Bot"]
        );
    }

    #[test]
    fn test_query_whitespace_is_not_trimmed() {
        let catalog = ProjectCatalog::builtin();
        assert_eq!(
            filter_projects(catalog.records(), &CategorySelection::All, "ccxt").len(),
            1
        );
        assert!(filter_projects(catalog.records(), &CategorySelection::All, " ccxt ").is_empty());
    }

    #[test]
    fn test_unknown_category_yields_empty_result() {
        let catalog = ProjectCatalog::builtin();
        let result = filter_projects(
            catalog.records(),
            &CategorySelection::parse("Quantum Computing"),
            "",
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_project_filter_apply() {
        let catalog = ProjectCatalog::builtin();
        let filter = ProjectFilter::new(CategorySelection::parse("Web Development"), "docker");
        assert_eq!(
            names(&filter.apply(catalog.records())),
            vec!["Portfolio & Blogging Website"]
        );
    }

    #[test]
    fn test_paginate_splits_and_clamps() {
        let page = paginate((1..=5).collect::<Vec<_>>(), Some(2), 2);
        assert_eq!(page.items, vec![3, 4]);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_previous());
        assert!(page.has_next());

        let last = paginate((1..=5).collect::<Vec<_>>(), Some(2), 99);
        assert_eq!(last.number, 3);
        assert_eq!(last.items, vec![5]);
        assert!(!last.has_next());
    }

    #[test]
    fn test_paginate_without_page_size_is_single_page() {
        let page = paginate(vec!['a', 'b', 'c'], None, 4);
        assert_eq!(page.number, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.items.len(), 3);
    }

    #[test]
    fn test_paginate_empty_input() {
        let page: Page<u8> = paginate(vec![], Some(4), 3);
        assert_eq!(page.number, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_items, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_parse_page_number() {
        assert_eq!(parse_page_number(None), 1);
        assert_eq!(parse_page_number(Some("3")), 3);
        assert_eq!(parse_page_number(Some("0")), 1);
        assert_eq!(parse_page_number(Some("two")), 1);
        assert_eq!(parse_page_number(Some("-1")), 1);
    }
}
