// Askama view models and the single place where a ViewState becomes HTML

use askama::Template;
use chrono::SecondsFormat;
use url::form_urlencoded;

use crate::core::contact::ContactAcknowledgment;
use crate::core::content::SiteContent;
use crate::core::filter::{paginate, ProjectFilter};
use crate::core::grid::ProjectGrid;
use crate::core::router::{NavItem, SectionRouter, ViewState};
use crate::domain::model::{ProjectRecord, Section};
use crate::utils::error::Result;
use crate::web::AppState;

// ============================================================================
// Shared page chrome
// ============================================================================

pub struct PageChrome {
    pub page_title: String,
    pub page_icon: String,
    pub nav_title: String,
    pub layout_class: &'static str,
    pub nav: Vec<NavItem>,
}

impl PageChrome {
    fn new(state: &AppState, current: Section) -> Self {
        let site = &state.config.site;
        Self {
            page_title: site.page_title.clone(),
            page_icon: site.page_icon.clone(),
            nav_title: site.nav_title.clone(),
            layout_class: if state.config.is_wide_layout() {
                "layout-wide"
            } else {
                "layout-centered"
            },
            nav: SectionRouter::navigation(current),
        }
    }
}

// ============================================================================
// Static sections
// ============================================================================

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate<'a> {
    pub chrome: PageChrome,
    pub content: &'a SiteContent,
}

#[derive(Template)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate<'a> {
    pub chrome: PageChrome,
    pub content: &'a SiteContent,
}

pub struct SkillRow {
    pub name: String,
    pub line: String,
}

#[derive(Template)]
#[template(path = "pages/skills.html")]
pub struct SkillsTemplate {
    pub chrome: PageChrome,
    pub groups: Vec<SkillRow>,
}

#[derive(Template)]
#[template(path = "pages/contact.html")]
pub struct ContactTemplate<'a> {
    pub chrome: PageChrome,
    pub content: &'a SiteContent,
    pub acknowledgment: Option<AcknowledgmentView>,
}

pub struct AcknowledgmentView {
    pub text: &'static str,
    pub datetime: String,
    pub received: String,
}

impl From<&ContactAcknowledgment> for AcknowledgmentView {
    fn from(ack: &ContactAcknowledgment) -> Self {
        Self {
            text: ack.message,
            datetime: ack.received_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            received: ack.received_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        }
    }
}

// ============================================================================
// Projects
// ============================================================================

pub struct CategoryOption {
    pub value: String,
    pub selected: bool,
}

pub struct Pager {
    pub number: usize,
    pub total_pages: usize,
    pub prev_href: Option<String>,
    pub next_href: Option<String>,
}

impl Pager {
    pub fn is_paged(&self) -> bool {
        self.total_pages > 1
    }
}

#[derive(Template)]
#[template(path = "pages/projects.html")]
pub struct ProjectsTemplate {
    pub chrome: PageChrome,
    pub options: Vec<CategoryOption>,
    pub query: String,
    pub total_matches: usize,
    pub grid: ProjectGrid,
    pub pager: Pager,
}

/// `/projects?category=..&q=..&page=..` for the given filter and page.
pub fn projects_href(filter: &ProjectFilter, page: usize) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("category", filter.category.as_str());
    query.append_pair("q", &filter.query);
    query.append_pair("page", &page.to_string());
    format!("{}?{}", Section::Projects.path(), query.finish())
}

fn projects_template(state: &AppState, view: &ViewState) -> ProjectsTemplate {
    let filtered = view.filter.apply(state.catalog.records());
    let page = paginate(filtered, state.config.projects.page_size, view.page);
    let grid = ProjectGrid::layout(&page.items);

    tracing::debug!(
        category = %view.filter.category,
        query = %view.filter.query,
        matches = page.total_items,
        page = page.number,
        "Filtered projects"
    );

    let selected = view.filter.category.as_str();
    let options = state
        .catalog
        .category_options()
        .into_iter()
        .map(|value| CategoryOption {
            selected: value == selected,
            value,
        })
        .collect();

    let pager = Pager {
        number: page.number,
        total_pages: page.total_pages,
        prev_href: page
            .has_previous()
            .then(|| projects_href(&view.filter, page.number - 1)),
        next_href: page
            .has_next()
            .then(|| projects_href(&view.filter, page.number + 1)),
    };

    ProjectsTemplate {
        chrome: PageChrome::new(state, Section::Projects),
        options,
        query: view.filter.query.clone(),
        total_matches: page.total_items,
        grid,
        pager,
    }
}

/// Filtered records for the JSON endpoint, unpaged.
pub fn filtered_records<'a>(state: &'a AppState, filter: &ProjectFilter) -> Vec<&'a ProjectRecord> {
    filter.apply(state.catalog.records())
}

// ============================================================================
// Section dispatch
// ============================================================================

pub fn render_view(state: &AppState, view: &ViewState) -> Result<String> {
    let chrome = PageChrome::new(state, view.section);
    let content = state.content.as_ref();

    let html = match view.section {
        Section::Home => HomeTemplate { chrome, content }.render()?,
        Section::AboutMe => AboutTemplate { chrome, content }.render()?,
        Section::Skills => SkillsTemplate {
            chrome,
            groups: content
                .skills
                .iter()
                .map(|group| SkillRow {
                    name: group.name.clone(),
                    line: group.skills.join(" | "),
                })
                .collect(),
        }
        .render()?,
        Section::Projects => projects_template(state, view).render()?,
        Section::Contact => ContactTemplate {
            chrome,
            content,
            acknowledgment: view
                .acknowledgment
                .as_ref()
                .map(AcknowledgmentView::from),
        }
        .render()?,
    };

    Ok(html)
}
