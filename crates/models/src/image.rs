use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::{self, ModelError};

/// Stored image. `blob` travels as a standard base64 string on the wire.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "images")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    #[serde(with = "crate::blob")]
    pub blob: Vec<u8>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Image names are keyed trimmed and lowercase.
pub fn normalize_name(name: &str) -> Result<String, ModelError> {
    errors::require("name", name)?;
    Ok(name.trim().to_lowercase())
}
