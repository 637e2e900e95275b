pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_guild_config_table;
mod m20260301_000002_create_automod_config_table;
mod m20260301_000003_create_welcome_config_table;
mod m20260301_000004_create_mute_table;
mod m20260301_000005_create_violation_table;
mod m20260301_000006_create_warning_table;
mod m20260301_000007_create_command_log_table;
mod m20260301_000008_create_user_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_guild_config_table::Migration),
            Box::new(m20260301_000002_create_automod_config_table::Migration),
            Box::new(m20260301_000003_create_welcome_config_table::Migration),
            Box::new(m20260301_000004_create_mute_table::Migration),
            Box::new(m20260301_000005_create_violation_table::Migration),
            Box::new(m20260301_000006_create_warning_table::Migration),
            Box::new(m20260301_000007_create_command_log_table::Migration),
            Box::new(m20260301_000008_create_user_table::Migration),
        ]
    }
}
