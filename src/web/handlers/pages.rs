// Page handlers for HTML rendering with Askama

use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::core::contact::ContactFormHandler;
use crate::core::router::{SectionRouter, ViewState};
use crate::domain::model::Section;
use crate::web::error::HandlerResult;
use crate::web::params::{contact_message, ProjectsParams, UrlEncodedFields};
use crate::web::views::render_view;
use crate::web::AppState;

fn render(state: &AppState, view: &ViewState) -> HandlerResult<Html<String>> {
    Ok(Html(render_view(state, view)?))
}

// ============================================================================
// Home + side navigation
// ============================================================================

/// `GET /` renders Home, or redirects when the side navigation picked
/// another section.
pub async fn home_page(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> HandlerResult<Response> {
    let fields = UrlEncodedFields::from_query(query.as_deref());
    let section = SectionRouter::select(fields.get("section"));
    if section != Section::Home {
        return Ok(Redirect::to(section.path()).into_response());
    }
    Ok(render(&state, &ViewState::for_section(Section::Home))?.into_response())
}

pub async fn about_page(State(state): State<AppState>) -> HandlerResult<Html<String>> {
    render(&state, &ViewState::for_section(Section::AboutMe))
}

pub async fn skills_page(State(state): State<AppState>) -> HandlerResult<Html<String>> {
    render(&state, &ViewState::for_section(Section::Skills))
}

// ============================================================================
// Projects
// ============================================================================

pub async fn projects_page(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> HandlerResult<Html<String>> {
    let params = ProjectsParams::from_query(query.as_deref());
    render(&state, &ViewState::projects(params.filter, params.page))
}

// ============================================================================
// Contact
// ============================================================================

pub async fn contact_page(State(state): State<AppState>) -> HandlerResult<Html<String>> {
    render(&state, &ViewState::for_section(Section::Contact))
}

/// Any body is accepted, whatever its content type.
pub async fn submit_contact(
    State(state): State<AppState>,
    body: Bytes,
) -> HandlerResult<Html<String>> {
    let acknowledgment = ContactFormHandler::new().submit(contact_message(&body));
    render(&state, &ViewState::contact_submitted(acknowledgment))
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html("<h1>Page not found</h1>".to_string()))
}
