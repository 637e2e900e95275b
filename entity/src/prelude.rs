pub use super::automod_config::Entity as AutomodConfig;
pub use super::command_log::Entity as CommandLog;
pub use super::guild_config::Entity as GuildConfig;
pub use super::mute::Entity as Mute;
pub use super::user::Entity as User;
pub use super::violation::Entity as Violation;
pub use super::warning::Entity as Warning;
pub use super::welcome_config::Entity as WelcomeConfig;
