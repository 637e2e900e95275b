//! Data access layer.
//!
//! One repository per table, each borrowing the shared `DatabaseConnection`.
//! Repositories convert entities to domain models at this boundary where the
//! stored representation differs from what the rest of the application works
//! with (JSON text columns, etc.).

pub mod automod_config;
pub mod command_log;
pub mod guild_config;
pub mod mute;
pub mod user;
pub mod violation;
pub mod warning;
pub mod welcome_config;

#[cfg(test)]
mod test;
