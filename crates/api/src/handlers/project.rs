//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use scenesync_core::project::validate_title;
use scenesync_db::models::project::{CreateProject, ProjectResponse};
use scenesync_db::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

/// POST /projects
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProject>,
) -> AppResult<(StatusCode, Json<ProjectResponse>)> {
    validate_title(&input.title)?;

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, "Created project");
    Ok((StatusCode::CREATED, Json(project.into())))
}

/// GET /projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectResponse>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects.into_iter().map(ProjectResponse::from).collect()))
}
