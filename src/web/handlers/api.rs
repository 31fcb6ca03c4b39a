use axum::extract::{RawQuery, State};
use axum::response::Json;
use serde_json::{json, Value};

use crate::domain::model::ProjectRecord;
use crate::web::params::ProjectsParams;
use crate::web::views::filtered_records;
use crate::web::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "projects": state.catalog.len(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Same filter as the projects page, unpaged, as JSON.
pub async fn search_projects(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Json<Vec<ProjectRecord>> {
    let params = ProjectsParams::from_query(query.as_deref());
    let records = filtered_records(&state, &params.filter)
        .into_iter()
        .cloned()
        .collect();
    Json(records)
}
