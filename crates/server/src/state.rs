use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::{
    image::{repository::SeaOrmImageRepository, service::ImageService},
    project::{repository::SeaOrmProjectRepository, service::ProjectService},
    skill::{repository::SeaOrmSkillRepository, service::SkillService},
};

#[derive(Clone)]
pub struct ServerAuthConfig {
    /// `None` rejects every mutating request.
    pub api_secret_key: Option<String>,
}

#[derive(Clone)]
pub struct ServerState {
    pub auth: ServerAuthConfig,
    pub images: Arc<ImageService<SeaOrmImageRepository>>,
    pub skills: Arc<SkillService<SeaOrmSkillRepository>>,
    pub projects: Arc<ProjectService<SeaOrmProjectRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection, auth: ServerAuthConfig) -> Self {
        Self {
            auth,
            images: Arc::new(ImageService::new(Arc::new(SeaOrmImageRepository { db: db.clone() }))),
            skills: Arc::new(SkillService::new(Arc::new(SeaOrmSkillRepository { db: db.clone() }))),
            projects: Arc::new(ProjectService::new(Arc::new(SeaOrmProjectRepository { db }))),
        }
    }
}
