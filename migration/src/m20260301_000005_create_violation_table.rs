use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Violation::Table)
                    .if_not_exists()
                    .col(pk_auto(Violation::Id))
                    .col(string(Violation::GuildId))
                    .col(string(Violation::UserId))
                    .col(string(Violation::Reason))
                    .col(text(Violation::Content))
                    .col(timestamp(Violation::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Violation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Violation {
    Table,
    Id,
    GuildId,
    UserId,
    Reason,
    Content,
    CreatedAt,
}
