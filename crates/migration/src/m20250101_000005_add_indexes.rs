use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Join rows are looked up by skill when a skill is deleted
        manager
            .create_index(
                Index::create()
                    .name("idx_project_skills_skill")
                    .table(ProjectSkills::Table)
                    .col(ProjectSkills::SkillId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_skills_category")
                    .table(Skills::Table)
                    .col(Skills::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_project_skills_skill").table(ProjectSkills::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_skills_category").table(Skills::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectSkills { Table, SkillId }

#[derive(DeriveIden)]
enum Skills { Table, Category }
