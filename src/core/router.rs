use crate::core::contact::ContactAcknowledgment;
use crate::core::filter::ProjectFilter;
use crate::domain::model::Section;

/// Per-request view state. Built from the incoming request, handed to the
/// renderer, then dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub section: Section,
    pub filter: ProjectFilter,
    pub page: usize,
    pub acknowledgment: Option<ContactAcknowledgment>,
}

impl ViewState {
    pub fn for_section(section: Section) -> Self {
        Self {
            section,
            page: 1,
            ..Self::default()
        }
    }

    pub fn projects(filter: ProjectFilter, page: usize) -> Self {
        Self {
            section: Section::Projects,
            filter,
            page,
            acknowledgment: None,
        }
    }

    pub fn contact_submitted(acknowledgment: ContactAcknowledgment) -> Self {
        Self {
            acknowledgment: Some(acknowledgment),
            ..Self::for_section(Section::Contact)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub selected: bool,
}

/// Side navigation: exactly one of the five sections is selected at a time.
pub struct SectionRouter;

impl SectionRouter {
    /// 未知或空白的選項回到首頁
    pub fn select(choice: Option<&str>) -> Section {
        match choice.and_then(Section::from_choice) {
            Some(section) => section,
            None => {
                if let Some(raw) = choice {
                    tracing::debug!("Unknown section '{}', falling back to Home", raw);
                }
                Section::Home
            }
        }
    }

    pub fn navigation(current: Section) -> Vec<NavItem> {
        Section::ALL
            .into_iter()
            .map(|section| NavItem {
                label: section.label(),
                path: section.path(),
                selected: section == current,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_known_and_unknown_choices() {
        assert_eq!(SectionRouter::select(Some("Skills")), Section::Skills);
        assert_eq!(SectionRouter::select(Some("contact")), Section::Contact);
        assert_eq!(SectionRouter::select(Some("nope")), Section::Home);
        assert_eq!(SectionRouter::select(None), Section::Home);
    }

    #[test]
    fn test_navigation_marks_exactly_one_section() {
        for current in Section::ALL {
            let nav = SectionRouter::navigation(current);
            assert_eq!(nav.len(), 5);
            let selected: Vec<_> = nav.iter().filter(|item| item.selected).collect();
            assert_eq!(selected.len(), 1);
            assert_eq!(selected[0].label, current.label());
        }
    }

    #[test]
    fn test_navigation_order_matches_sidebar() {
        let labels: Vec<_> = SectionRouter::navigation(Section::Home)
            .into_iter()
            .map(|item| item.label)
            .collect();
        assert_eq!(labels, vec!["Home", "About Me", "Skills", "Projects", "Contact"]);
    }

    #[test]
    fn test_view_state_constructors() {
        let state = ViewState::for_section(Section::AboutMe);
        assert_eq!(state.section, Section::AboutMe);
        assert_eq!(state.page, 1);
        assert!(state.acknowledgment.is_none());
    }
}
