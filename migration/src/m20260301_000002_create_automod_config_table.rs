use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AutomodConfig::Table)
                    .if_not_exists()
                    .col(pk_auto(AutomodConfig::Id))
                    .col(string_uniq(AutomodConfig::GuildId))
                    .col(boolean(AutomodConfig::Enabled))
                    .col(text(AutomodConfig::BannedWords))
                    .col(boolean(AutomodConfig::WarnOnViolation))
                    .col(boolean(AutomodConfig::MuteOnViolation))
                    .col(integer(AutomodConfig::WarningsBeforeMute))
                    .col(integer(AutomodConfig::WarningExpiryHours))
                    .col(integer(AutomodConfig::MuteDurationMinutes))
                    .col(boolean(AutomodConfig::DeleteMessages))
                    .col(text(AutomodConfig::WhitelistRoles))
                    .col(text(AutomodConfig::WhitelistMembers))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AutomodConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AutomodConfig {
    Table,
    Id,
    GuildId,
    Enabled,
    BannedWords,
    WarnOnViolation,
    MuteOnViolation,
    WarningsBeforeMute,
    WarningExpiryHours,
    MuteDurationMinutes,
    DeleteMessages,
    WhitelistRoles,
    WhitelistMembers,
}
