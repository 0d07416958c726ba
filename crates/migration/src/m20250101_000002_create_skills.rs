//! Create `skills` table.
use sea_orm_migration::{prelude::*, schema::*, sea_orm::ConnectionTrait};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(pk_auto(Skills::Id))
                    .col(string_len(Skills::Name, 128).not_null())
                    .col(string_len(Skills::IconUrl, 512).not_null())
                    .col(string_len(Skills::Category, 64).not_null())
                    .to_owned(),
            )
            .await?;

        // Names are unique regardless of case. Expression indexes are not
        // expressible through the index builder, so this one is raw SQL that
        // both Postgres and SQLite accept.
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_skills_name_lower ON skills (LOWER(name))",
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Skills::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
    Name,
    IconUrl,
    Category,
}
