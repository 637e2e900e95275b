use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mute::Table)
                    .if_not_exists()
                    .col(pk_auto(Mute::Id))
                    .col(string(Mute::GuildId))
                    .col(string(Mute::UserId))
                    .col(timestamp(Mute::ExpiresAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_mute_guild_user")
                    .table(Mute::Table)
                    .col(Mute::GuildId)
                    .col(Mute::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mute::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Mute {
    Table,
    Id,
    GuildId,
    UserId,
    ExpiresAt,
}
