use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WelcomeConfig::Table)
                    .if_not_exists()
                    .col(pk_auto(WelcomeConfig::Id))
                    .col(string_uniq(WelcomeConfig::GuildId))
                    .col(boolean(WelcomeConfig::Enabled))
                    .col(string_null(WelcomeConfig::ChannelId))
                    .col(string(WelcomeConfig::Title))
                    .col(text(WelcomeConfig::Description))
                    .col(string(WelcomeConfig::Color))
                    .col(string_null(WelcomeConfig::Footer))
                    .col(boolean(WelcomeConfig::ShowAvatar))
                    .col(string_null(WelcomeConfig::Image))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WelcomeConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WelcomeConfig {
    Table,
    Id,
    GuildId,
    Enabled,
    ChannelId,
    Title,
    Description,
    Color,
    Footer,
    ShowAvatar,
    Image,
}
