//! SeaORM entity models for all persisted guild state.

pub mod automod_config;
pub mod command_log;
pub mod guild_config;
pub mod mute;
pub mod prelude;
pub mod user;
pub mod violation;
pub mod warning;
pub mod welcome_config;
