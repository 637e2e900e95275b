use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CommandLog::Table)
                    .if_not_exists()
                    .col(pk_auto(CommandLog::Id))
                    .col(string(CommandLog::GuildId))
                    .col(string(CommandLog::Command))
                    .col(string(CommandLog::UserTag))
                    .col(boolean(CommandLog::Success))
                    .col(timestamp(CommandLog::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CommandLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CommandLog {
    Table,
    Id,
    GuildId,
    Command,
    UserTag,
    Success,
    CreatedAt,
}
