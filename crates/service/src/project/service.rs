use std::sync::Arc;
use tracing::{info, instrument};

use models::project::{NewProject, ProjectChanges, ProjectWithSkills};

use crate::errors::ServiceError;
use crate::project::repository::ProjectRepository;

/// Application service encapsulating project rules.
pub struct ProjectService<R: ProjectRepository> {
    repo: Arc<R>,
}

impl<R: ProjectRepository> ProjectService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<ProjectWithSkills>, ServiceError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: i32) -> Result<ProjectWithSkills, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("project {id} not found")))
    }

    #[instrument(skip(self, input), fields(title = %input.title, skills = input.skill_ids.len()))]
    pub async fn create(&self, input: NewProject) -> Result<ProjectWithSkills, ServiceError> {
        input.validate()?;
        let created = self.repo.create(input).await?;
        info!(id = created.id, "project_created");
        Ok(created)
    }

    #[instrument(skip(self, changes))]
    pub async fn update(&self, id: i32, changes: ProjectChanges) -> Result<ProjectWithSkills, ServiceError> {
        changes.validate()?;
        let updated = self
            .repo
            .update(id, changes)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("project {id} not found")))?;
        info!(id, "project_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::NotFound(format!("project {id} not found or could not be deleted")));
        }
        info!(id, "project_deleted");
        Ok(())
    }
}
