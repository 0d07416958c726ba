use std::collections::BTreeSet;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use models::project::{self, NewProject, ProjectChanges, ProjectWithSkills};
use models::{project_skill, skill};

use crate::errors::ServiceError;

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Every project ordered by id, each with its skills.
    async fn list(&self) -> Result<Vec<ProjectWithSkills>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<ProjectWithSkills>, ServiceError>;
    /// Inserts the project row and its skill links atomically.
    async fn create(&self, input: NewProject) -> Result<ProjectWithSkills, ServiceError>;
    /// Applies field changes and, when given, replaces the whole skill set. `None` if no such project.
    async fn update(&self, id: i32, changes: ProjectChanges) -> Result<Option<ProjectWithSkills>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmProjectRepository {
    pub db: DatabaseConnection,
}

async fn load_one<C: ConnectionTrait>(conn: &C, id: i32) -> Result<Option<ProjectWithSkills>, DbErr> {
    let rows = project::Entity::find_by_id(id)
        .find_with_related(skill::Entity)
        .all(conn)
        .await?;
    Ok(rows.into_iter().next().map(ProjectWithSkills::from))
}

/// Rejects the request when any id has no matching skill row.
async fn ensure_skills_exist<C: ConnectionTrait>(conn: &C, skill_ids: &[i32]) -> Result<(), ServiceError> {
    let wanted: BTreeSet<i32> = skill_ids.iter().copied().collect();
    if wanted.is_empty() {
        return Ok(());
    }
    let found: BTreeSet<i32> = skill::Entity::find()
        .filter(skill::Column::Id.is_in(wanted.iter().copied()))
        .all(conn)
        .await?
        .into_iter()
        .map(|s| s.id)
        .collect();
    let missing: Vec<String> = wanted.difference(&found).map(|id| id.to_string()).collect();
    if !missing.is_empty() {
        return Err(ServiceError::Validation(format!("unknown skill id(s): {}", missing.join(", "))));
    }
    Ok(())
}

async fn link_skills<C: ConnectionTrait>(conn: &C, project_id: i32, skill_ids: &[i32]) -> Result<(), DbErr> {
    let rows = project_skill::links(project_id, skill_ids);
    if rows.is_empty() {
        return Ok(());
    }
    project_skill::Entity::insert_many(rows).exec_without_returning(conn).await?;
    Ok(())
}

async fn unlink_skills<C: ConnectionTrait>(conn: &C, project_id: i32) -> Result<(), DbErr> {
    project_skill::Entity::delete_many()
        .filter(project_skill::Column::ProjectId.eq(project_id))
        .exec(conn)
        .await?;
    Ok(())
}

#[async_trait]
impl ProjectRepository for SeaOrmProjectRepository {
    async fn list(&self) -> Result<Vec<ProjectWithSkills>, ServiceError> {
        let rows = project::Entity::find()
            .order_by_asc(project::Column::Id)
            .find_with_related(skill::Entity)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(ProjectWithSkills::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProjectWithSkills>, ServiceError> {
        Ok(load_one(&self.db, id).await?)
    }

    async fn create(&self, input: NewProject) -> Result<ProjectWithSkills, ServiceError> {
        let skill_ids = input.skill_ids.clone();
        // Dropping `txn` on an early return rolls everything back
        let txn = self.db.begin().await?;
        ensure_skills_exist(&txn, &skill_ids).await?;
        let created = input.into_active_model().insert(&txn).await?;
        link_skills(&txn, created.id, &skill_ids).await?;
        let loaded = load_one(&txn, created.id)
            .await?
            .ok_or_else(|| ServiceError::Db(format!("project {} vanished after insert", created.id)))?;
        txn.commit().await?;
        Ok(loaded)
    }

    async fn update(&self, id: i32, mut changes: ProjectChanges) -> Result<Option<ProjectWithSkills>, ServiceError> {
        let skill_ids = changes.skill_ids.take();
        let txn = self.db.begin().await?;
        let Some(found) = project::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };
        if changes.touches_row() {
            let mut am: project::ActiveModel = found.into();
            changes.apply(&mut am);
            am.update(&txn).await?;
        }
        if let Some(ids) = skill_ids {
            ensure_skills_exist(&txn, &ids).await?;
            unlink_skills(&txn, id).await?;
            link_skills(&txn, id, &ids).await?;
        }
        let loaded = load_one(&txn, id).await?;
        txn.commit().await?;
        Ok(loaded)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let txn = self.db.begin().await?;
        unlink_skills(&txn, id).await?;
        let res = project::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        Ok(res.rows_affected > 0)
    }
}
