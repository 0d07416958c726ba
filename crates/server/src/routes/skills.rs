use axum::{extract::{Path, State}, Json};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use tracing::info;

use models::skill::{self, SkillChanges};

use crate::{errors::JsonApiError, routes::{images::DeleteByNameInput, required}, state::ServerState};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateSkillInput {
    pub name: Option<String>,
    #[serde(rename = "iconUrl")]
    pub icon_url: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateSkillInput {
    pub name: Option<String>,
    #[serde(rename = "iconUrl")]
    pub icon_url: Option<String>,
    pub category: Option<String>,
}

#[utoipa::path(get, path = "/api/skills", tag = "skills", responses((status = 200, description = "All skills in random order")))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<skill::Model>>, JsonApiError> {
    let skills = state.skills.list().await?;
    info!(count = skills.len(), "list skills");
    Ok(Json(skills))
}

#[utoipa::path(
    post, path = "/api/skills", tag = "skills",
    request_body = CreateSkillInput,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Name already taken")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    WithRejection(Json(input), _): WithRejection<Json<CreateSkillInput>, JsonApiError>,
) -> Result<Json<skill::Model>, JsonApiError> {
    let name = required("name", &input.name)?;
    let icon_url = required("iconUrl", &input.icon_url)?;
    let category = required("category", &input.category)?;
    let created = state.skills.add(name, icon_url, category).await?;
    Ok(Json(created))
}

#[utoipa::path(
    patch, path = "/api/skills/{id}", tag = "skills",
    params(("id" = i32, Path, description = "Skill ID")),
    request_body = UpdateSkillInput,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Name already taken")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, JsonApiError>,
    WithRejection(Json(input), _): WithRejection<Json<UpdateSkillInput>, JsonApiError>,
) -> Result<Json<skill::Model>, JsonApiError> {
    let changes = SkillChanges { name: input.name, icon_url: input.icon_url, category: input.category };
    let updated = state.skills.update(id, changes).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/skills", tag = "skills",
    request_body = DeleteByNameInput,
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found"))
)]
pub async fn delete(
    State(state): State<ServerState>,
    WithRejection(Json(input), _): WithRejection<Json<DeleteByNameInput>, JsonApiError>,
) -> Result<Json<bool>, JsonApiError> {
    let name = required("name", &input.name)?;
    state.skills.delete(name).await?;
    Ok(Json(true))
}
