use std::sync::Arc;
use tracing::{info, instrument};

use models::image;

use crate::errors::ServiceError;
use crate::image::repository::ImageRepository;

/// Image business rules: one image per normalized name.
pub struct ImageService<R: ImageRepository> {
    repo: Arc<R>,
}

impl<R: ImageRepository> ImageService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<image::Model>, ServiceError> {
        self.repo.list().await
    }

    #[instrument(skip(self, blob), fields(bytes = blob.len()))]
    pub async fn add(&self, name: &str, blob: Vec<u8>) -> Result<image::Model, ServiceError> {
        let name = image::normalize_name(name)?;
        if self.repo.find_by_name(&name).await?.is_some() {
            return Err(ServiceError::Conflict(format!("image '{name}' already exists")));
        }
        let created = self.repo.create(&name, blob).await?;
        info!(name = %created.name, "image_added");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, name: &str) -> Result<(), ServiceError> {
        let name = image::normalize_name(name)?;
        info!(%name, "deleting image");
        if !self.repo.delete(&name).await? {
            return Err(ServiceError::NotFound(format!("image '{name}' not found")));
        }
        Ok(())
    }
}
