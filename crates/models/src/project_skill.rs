use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{project, skill};

/// Join row linking a project to one of its skills.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project_skills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub project_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub skill_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Project, Skill }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Project => Entity::belongs_to(project::Entity)
                .from(Column::ProjectId)
                .to(project::Column::Id)
                .into(),
            Relation::Skill => Entity::belongs_to(skill::Entity)
                .from(Column::SkillId)
                .to(skill::Column::Id)
                .into(),
        }
    }
}

impl Related<project::Entity> for Entity {
    fn to() -> RelationDef { Relation::Project.def() }
}

impl Related<skill::Entity> for Entity {
    fn to() -> RelationDef { Relation::Skill.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// One active model per distinct skill id, in ascending id order.
pub fn links(project_id: i32, skill_ids: &[i32]) -> Vec<ActiveModel> {
    let unique: std::collections::BTreeSet<i32> = skill_ids.iter().copied().collect();
    unique
        .into_iter()
        .map(|skill_id| ActiveModel {
            project_id: sea_orm::Set(project_id),
            skill_id: sea_orm::Set(skill_id),
        })
        .collect()
}
