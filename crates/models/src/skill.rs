use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors::{self, ModelError}, project, project_skill};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[serde(rename = "iconUrl")]
    pub icon_url: String,
    pub category: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { ProjectSkill }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::ProjectSkill => Entity::has_many(project_skill::Entity).into(),
        }
    }
}

impl Related<project_skill::Entity> for Entity {
    fn to() -> RelationDef { Relation::ProjectSkill.def() }
}

impl Related<project::Entity> for Entity {
    fn to() -> RelationDef { project_skill::Relation::Project.def() }
    fn via() -> Option<RelationDef> { Some(project_skill::Relation::Skill.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

/// Skill fields after trimming; category is lowercased.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillFields {
    pub name: String,
    pub icon_url: String,
    pub category: String,
}

pub fn normalize_name(name: &str) -> Result<String, ModelError> {
    errors::require("name", name)?;
    Ok(name.trim().to_string())
}

pub fn normalize_icon_url(icon_url: &str) -> Result<String, ModelError> {
    errors::require("iconUrl", icon_url)?;
    Ok(icon_url.trim().to_string())
}

pub fn normalize_category(category: &str) -> Result<String, ModelError> {
    errors::require("category", category)?;
    Ok(category.trim().to_lowercase())
}

impl SkillFields {
    pub fn new(name: &str, icon_url: &str, category: &str) -> Result<Self, ModelError> {
        Ok(Self {
            name: normalize_name(name)?,
            icon_url: normalize_icon_url(icon_url)?,
            category: normalize_category(category)?,
        })
    }
}

/// Partial update; each present field is normalized like on create.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillChanges {
    pub name: Option<String>,
    pub icon_url: Option<String>,
    pub category: Option<String>,
}

impl SkillChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.icon_url.is_none() && self.category.is_none()
    }

    pub fn normalized(self) -> Result<Self, ModelError> {
        if self.is_empty() {
            return Err(ModelError::Validation("at least one field must be provided".into()));
        }
        Ok(Self {
            name: self.name.as_deref().map(normalize_name).transpose()?,
            icon_url: self.icon_url.as_deref().map(normalize_icon_url).transpose()?,
            category: self.category.as_deref().map(normalize_category).transpose()?,
        })
    }

    pub fn apply(self, am: &mut ActiveModel) {
        if let Some(n) = self.name { am.name = sea_orm::Set(n); }
        if let Some(i) = self.icon_url { am.icon_url = sea_orm::Set(i); }
        if let Some(c) = self.category { am.category = sea_orm::Set(c); }
    }
}
