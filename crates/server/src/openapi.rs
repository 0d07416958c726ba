use utoipa::OpenApi;

use crate::routes::{images, projects, skills};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        images::list,
        images::create,
        images::delete,
        skills::list,
        skills::create,
        skills::update,
        skills::delete,
        projects::list,
        projects::get,
        projects::create,
        projects::update,
        projects::delete,
    ),
    components(
        schemas(
            images::CreateImageInput,
            images::DeleteByNameInput,
            skills::CreateSkillInput,
            skills::UpdateSkillInput,
            projects::CreateProjectInput,
            projects::UpdateProjectInput,
        )
    ),
    tags(
        (name = "health"),
        (name = "images"),
        (name = "skills"),
        (name = "projects")
    )
)]
pub struct ApiDoc;
