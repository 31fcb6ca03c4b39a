// Lenient urlencoded parsing for query strings and form bodies.
//
// Repeated keys keep their first value and unknown keys are ignored, so no
// query string or form body is ever rejected.

use std::collections::HashMap;

use url::form_urlencoded;

use crate::core::filter::{parse_page_number, ProjectFilter};
use crate::domain::model::{CategorySelection, ContactMessage};

#[derive(Debug, Default)]
pub struct UrlEncodedFields {
    values: HashMap<String, String>,
}

impl UrlEncodedFields {
    pub fn parse(input: &[u8]) -> Self {
        let mut values = HashMap::new();
        for (key, value) in form_urlencoded::parse(input) {
            values
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }
        Self { values }
    }

    pub fn from_query(raw: Option<&str>) -> Self {
        raw.map(|query| Self::parse(query.as_bytes()))
            .unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn take(&mut self, key: &str) -> String {
        self.values.remove(key).unwrap_or_default()
    }
}

/// `category`, `q` and `page` of the projects view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectsParams {
    pub filter: ProjectFilter,
    pub page: usize,
}

impl ProjectsParams {
    pub fn from_query(raw: Option<&str>) -> Self {
        let fields = UrlEncodedFields::from_query(raw);
        Self {
            filter: ProjectFilter::new(
                CategorySelection::parse(fields.get("category").unwrap_or_default()),
                fields.get("q").unwrap_or_default(),
            ),
            page: parse_page_number(fields.get("page")),
        }
    }
}

/// 聯絡表單欄位，缺少的欄位視為空字串
pub fn contact_message(body: &[u8]) -> ContactMessage {
    let mut fields = UrlEncodedFields::parse(body);
    ContactMessage {
        name: fields.take("name"),
        email: fields.take("email"),
        body: fields.take("message"),
    }
}
