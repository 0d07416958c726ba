use async_trait::async_trait;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};

use models::{project_skill, skill::{self, SkillChanges, SkillFields}};

use crate::errors::ServiceError;

#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// All skills in random order.
    async fn list(&self) -> Result<Vec<skill::Model>, ServiceError>;
    /// Case-insensitive lookup.
    async fn find_by_name(&self, name: &str) -> Result<Option<skill::Model>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<skill::Model>, ServiceError>;
    async fn create(&self, fields: SkillFields) -> Result<skill::Model, ServiceError>;
    /// `None` when no skill has this id.
    async fn update(&self, id: i32, changes: SkillChanges) -> Result<Option<skill::Model>, ServiceError>;
    /// Removes the skill and its project links; `false` when nothing matched.
    async fn delete(&self, name: &str) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmSkillRepository {
    pub db: DatabaseConnection,
}

fn name_matches(name: &str) -> sea_orm::sea_query::SimpleExpr {
    Expr::expr(Func::lower(Expr::col(skill::Column::Name))).eq(name.trim().to_lowercase())
}

#[async_trait]
impl SkillRepository for SeaOrmSkillRepository {
    async fn list(&self) -> Result<Vec<skill::Model>, ServiceError> {
        Ok(skill::Entity::find()
            .order_by(Expr::cust("RANDOM()"), Order::Asc)
            .all(&self.db)
            .await?)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<skill::Model>, ServiceError> {
        Ok(skill::Entity::find().filter(name_matches(name)).one(&self.db).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<skill::Model>, ServiceError> {
        Ok(skill::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn create(&self, fields: SkillFields) -> Result<skill::Model, ServiceError> {
        let am = skill::ActiveModel {
            name: Set(fields.name),
            icon_url: Set(fields.icon_url),
            category: Set(fields.category),
            ..Default::default()
        };
        Ok(am.insert(&self.db).await?)
    }

    async fn update(&self, id: i32, changes: SkillChanges) -> Result<Option<skill::Model>, ServiceError> {
        let Some(found) = skill::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let mut am: skill::ActiveModel = found.into();
        changes.apply(&mut am);
        Ok(Some(am.update(&self.db).await?))
    }

    async fn delete(&self, name: &str) -> Result<bool, ServiceError> {
        let txn = self.db.begin().await?;
        let Some(found) = skill::Entity::find().filter(name_matches(name)).one(&txn).await? else {
            return Ok(false);
        };
        project_skill::Entity::delete_many()
            .filter(project_skill::Column::SkillId.eq(found.id))
            .exec(&txn)
            .await?;
        let res = skill::Entity::delete_by_id(found.id).exec(&txn).await?;
        txn.commit().await?;
        Ok(res.rows_affected > 0)
    }
}
