use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildConfig::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildConfig::Id))
                    .col(string_uniq(GuildConfig::GuildId))
                    .col(string(GuildConfig::Prefix))
                    .col(boolean(GuildConfig::ErrorLogging))
                    .col(string(GuildConfig::StatusMessage))
                    .col(string_null(GuildConfig::ModLogChannelId))
                    .col(string_null(GuildConfig::MutedRoleId))
                    .col(string_null(GuildConfig::TicketCategoryId))
                    .col(string_null(GuildConfig::StaffRoleId))
                    .col(integer(GuildConfig::TicketCount))
                    .col(boolean(GuildConfig::FeatureModeration))
                    .col(boolean(GuildConfig::FeatureAutomod))
                    .col(boolean(GuildConfig::FeatureEconomy))
                    .col(boolean(GuildConfig::FeatureMusic))
                    .col(boolean(GuildConfig::FeatureClear))
                    .col(boolean(GuildConfig::FeatureMute))
                    .col(boolean(GuildConfig::FeatureLockdown))
                    .col(boolean(GuildConfig::FeatureInvite))
                    .col(boolean(GuildConfig::FeaturePing))
                    .col(boolean(GuildConfig::FeatureInfo))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildConfig {
    Table,
    Id,
    GuildId,
    Prefix,
    ErrorLogging,
    StatusMessage,
    ModLogChannelId,
    MutedRoleId,
    TicketCategoryId,
    StaffRoleId,
    TicketCount,
    FeatureModeration,
    FeatureAutomod,
    FeatureEconomy,
    FeatureMusic,
    FeatureClear,
    FeatureMute,
    FeatureLockdown,
    FeatureInvite,
    FeaturePing,
    FeatureInfo,
}
