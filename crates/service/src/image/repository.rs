use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use models::image;

use crate::errors::ServiceError;

/// Names passed in are already normalized by the caller.
#[async_trait]
pub trait ImageRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<image::Model>, ServiceError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<image::Model>, ServiceError>;
    async fn create(&self, name: &str, blob: Vec<u8>) -> Result<image::Model, ServiceError>;
    async fn delete(&self, name: &str) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmImageRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ImageRepository for SeaOrmImageRepository {
    async fn list(&self) -> Result<Vec<image::Model>, ServiceError> {
        Ok(image::Entity::find()
            .order_by_asc(image::Column::Name)
            .all(&self.db)
            .await?)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<image::Model>, ServiceError> {
        Ok(image::Entity::find_by_id(name.to_string()).one(&self.db).await?)
    }

    async fn create(&self, name: &str, blob: Vec<u8>) -> Result<image::Model, ServiceError> {
        let am = image::ActiveModel { name: Set(name.to_string()), blob: Set(blob) };
        Ok(am.insert(&self.db).await?)
    }

    async fn delete(&self, name: &str) -> Result<bool, ServiceError> {
        let res = image::Entity::delete_by_id(name.to_string()).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
