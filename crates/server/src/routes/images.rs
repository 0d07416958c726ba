use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use tracing::info;

use models::image;

use crate::{errors::JsonApiError, routes::required, state::ServerState};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateImageInput {
    pub name: Option<String>,
    /// Standard base64, optionally prefixed with `data:<mime>;base64,`
    pub blob: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct DeleteByNameInput {
    pub name: Option<String>,
}

#[utoipa::path(get, path = "/api/images", tag = "images", responses((status = 200, description = "All images, blobs base64-encoded")))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<image::Model>>, JsonApiError> {
    let images = state.images.list().await?;
    info!(count = images.len(), "list images");
    Ok(Json(images))
}

#[utoipa::path(
    post, path = "/api/images", tag = "images",
    request_body = CreateImageInput,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Name already taken")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    WithRejection(Json(input), _): WithRejection<Json<CreateImageInput>, JsonApiError>,
) -> Result<Json<image::Model>, JsonApiError> {
    let name = required("name", &input.name)?;
    let blob = models::blob::decode(required("blob", &input.blob)?)?;
    let created = state.images.add(name, blob).await?;
    Ok(Json(created))
}

#[utoipa::path(
    delete, path = "/api/images", tag = "images",
    request_body = DeleteByNameInput,
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found"))
)]
pub async fn delete(
    State(state): State<ServerState>,
    WithRejection(Json(input), _): WithRejection<Json<DeleteByNameInput>, JsonApiError>,
) -> Result<Json<bool>, JsonApiError> {
    let name = required("name", &input.name)?;
    state.images.delete(name).await?;
    Ok(Json(true))
}
