//! Project REST API handlers
//!
//! Read-only handler for listing portfolio projects.

use crate::{ApiResult, AppState, ProjectDto};

use axum::{Json, extract::State};

/// GET /api/projects
///
/// List all projects as a bare JSON array. Query parameters are ignored.
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<ProjectDto>>> {
    let projects = state.store.find_all()?;

    Ok(Json(projects.into_iter().map(ProjectDto::from).collect()))
}
