use axum::{extract::{Path, State}, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use tracing::info;

use models::project::{NewProject, ProjectChanges, ProjectWithSkills};

use crate::{errors::JsonApiError, routes::required, state::ServerState};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateProjectInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub details: Option<String>,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    /// Required; may be empty
    pub skill_ids: Option<Vec<i32>>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateProjectInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub details: Option<String>,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    /// Replaces the whole skill set when present
    pub skill_ids: Option<Vec<i32>>,
}

#[utoipa::path(get, path = "/api/projects", tag = "projects", responses((status = 200, description = "All projects with their skills, ordered by id")))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ProjectWithSkills>>, JsonApiError> {
    let projects = state.projects.list().await?;
    info!(count = projects.len(), "list projects");
    Ok(Json(projects))
}

#[utoipa::path(
    get, path = "/api/projects/{id}", tag = "projects",
    params(("id" = i32, Path, description = "Project ID")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found"))
)]
pub async fn get(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, JsonApiError>,
) -> Result<Json<ProjectWithSkills>, JsonApiError> {
    Ok(Json(state.projects.get(id).await?))
}

#[utoipa::path(
    post, path = "/api/projects", tag = "projects",
    request_body = CreateProjectInput,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    WithRejection(Json(input), _): WithRejection<Json<CreateProjectInput>, JsonApiError>,
) -> Result<(StatusCode, Json<ProjectWithSkills>), JsonApiError> {
    let title = required("title", &input.title)?.to_string();
    let description = required("description", &input.description)?.to_string();
    let skill_ids = input
        .skill_ids
        .ok_or_else(|| JsonApiError::bad_request("'skill_ids' is required"))?;
    let created = state
        .projects
        .create(NewProject {
            title,
            description,
            details: input.details,
            image_url: input.image_url,
            github_url: input.github_url,
            demo_url: input.demo_url,
            skill_ids,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    patch, path = "/api/projects/{id}", tag = "projects",
    params(("id" = i32, Path, description = "Project ID")),
    request_body = UpdateProjectInput,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, JsonApiError>,
    WithRejection(Json(input), _): WithRejection<Json<UpdateProjectInput>, JsonApiError>,
) -> Result<Json<ProjectWithSkills>, JsonApiError> {
    let changes = ProjectChanges {
        title: input.title,
        description: input.description,
        details: input.details,
        image_url: input.image_url,
        github_url: input.github_url,
        demo_url: input.demo_url,
        skill_ids: input.skill_ids,
    };
    Ok(Json(state.projects.update(id, changes).await?))
}

#[utoipa::path(
    delete, path = "/api/projects/{id}", tag = "projects",
    params(("id" = i32, Path, description = "Project ID")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found"))
)]
pub async fn delete(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, JsonApiError>,
) -> Result<Json<bool>, JsonApiError> {
    state.projects.delete(id).await?;
    Ok(Json(true))
}
