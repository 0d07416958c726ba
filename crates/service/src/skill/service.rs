use std::sync::Arc;
use tracing::{info, instrument};

use models::skill::{self, SkillChanges, SkillFields};

use crate::errors::ServiceError;
use crate::skill::repository::SkillRepository;

/// Skill business rules: names are unique regardless of case.
pub struct SkillService<R: SkillRepository> {
    repo: Arc<R>,
}

impl<R: SkillRepository> SkillService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<skill::Model>, ServiceError> {
        self.repo.list().await
    }

    #[instrument(skip(self))]
    pub async fn add(&self, name: &str, icon_url: &str, category: &str) -> Result<skill::Model, ServiceError> {
        let fields = SkillFields::new(name, icon_url, category)?;
        if self.repo.find_by_name(&fields.name).await?.is_some() {
            return Err(ServiceError::Conflict(format!("skill '{}' already exists", fields.name)));
        }
        let created = self.repo.create(fields).await?;
        info!(id = created.id, name = %created.name, "skill_added");
        Ok(created)
    }

    #[instrument(skip(self, changes))]
    pub async fn update(&self, id: i32, changes: SkillChanges) -> Result<skill::Model, ServiceError> {
        let changes = changes.normalized()?;
        if let Some(name) = &changes.name {
            if let Some(other) = self.repo.find_by_name(name).await? {
                if other.id != id {
                    return Err(ServiceError::Conflict(format!("skill '{name}' already exists")));
                }
            }
        }
        let updated = self
            .repo
            .update(id, changes)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("skill {id} not found")))?;
        info!(id = updated.id, "skill_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, name: &str) -> Result<(), ServiceError> {
        let name = skill::normalize_name(name)?;
        if !self.repo.delete(&name).await? {
            return Err(ServiceError::NotFound(format!("skill '{name}' not found")));
        }
        info!(%name, "skill_deleted");
        Ok(())
    }
}
