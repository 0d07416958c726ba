use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::{errors::{self, ModelError}, project_skill, skill};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub details: Option<String>,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
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

impl Related<skill::Entity> for Entity {
    fn to() -> RelationDef { project_skill::Relation::Skill.def() }
    fn via() -> Option<RelationDef> { Some(project_skill::Relation::Project.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

/// Project as served to clients: the row plus its skills ordered by id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectWithSkills {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub details: Option<String>,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub skills: Vec<skill::Model>,
}

impl From<(Model, Vec<skill::Model>)> for ProjectWithSkills {
    fn from((p, mut skills): (Model, Vec<skill::Model>)) -> Self {
        skills.sort_by_key(|s| s.id);
        skills.dedup_by_key(|s| s.id);
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            details: p.details,
            image_url: p.image_url,
            github_url: p.github_url,
            demo_url: p.demo_url,
            skills,
        }
    }
}

/// Validated input for a new project.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub details: Option<String>,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub skill_ids: Vec<i32>,
}

impl NewProject {
    pub fn validate(&self) -> Result<(), ModelError> {
        errors::require("title", &self.title)?;
        errors::require("description", &self.description)?;
        Ok(())
    }

    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            title: Set(self.title.trim().to_string()),
            description: Set(self.description),
            details: Set(optional_text(self.details)),
            image_url: Set(optional_text(self.image_url)),
            github_url: Set(optional_text(self.github_url)),
            demo_url: Set(optional_text(self.demo_url)),
            ..Default::default()
        }
    }
}

/// Partial update. `None` leaves a field alone; an empty optional text clears it.
/// `skill_ids: Some(_)` replaces the whole skill set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub details: Option<String>,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub skill_ids: Option<Vec<i32>>,
}

impl ProjectChanges {
    pub fn is_empty(&self) -> bool {
        !self.touches_row() && self.skill_ids.is_none()
    }

    /// Whether any column of the `projects` row changes.
    pub fn touches_row(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.details.is_some()
            || self.image_url.is_some()
            || self.github_url.is_some()
            || self.demo_url.is_some()
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.is_empty() {
            return Err(ModelError::Validation("at least one field must be provided".into()));
        }
        if let Some(t) = &self.title { errors::require("title", t)?; }
        if let Some(d) = &self.description { errors::require("description", d)?; }
        Ok(())
    }

    pub fn apply(self, am: &mut ActiveModel) {
        if let Some(t) = self.title { am.title = Set(t.trim().to_string()); }
        if let Some(d) = self.description { am.description = Set(d); }
        if self.details.is_some() { am.details = Set(optional_text(self.details)); }
        if self.image_url.is_some() { am.image_url = Set(optional_text(self.image_url)); }
        if self.github_url.is_some() { am.github_url = Set(optional_text(self.github_url)); }
        if self.demo_url.is_some() { am.demo_url = Set(optional_text(self.demo_url)); }
    }
}

/// Blank text is stored as NULL.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
