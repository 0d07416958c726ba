use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(pk_auto(Projects::Id))
                    .col(string_len(Projects::Title, 255).not_null())
                    .col(text(Projects::Description).not_null())
                    .col(text_null(Projects::Details))
                    .col(string_len_null(Projects::ImageUrl, 512))
                    .col(string_len_null(Projects::GithubUrl, 512))
                    .col(string_len_null(Projects::DemoUrl, 512))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Projects::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Title,
    Description,
    Details,
    ImageUrl,
    GithubUrl,
    DemoUrl,
}
