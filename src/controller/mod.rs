pub mod auth;
pub mod automod;
pub mod guild_config;
pub mod guilds;
pub mod logs;
pub mod param;
pub mod stats;
pub mod violations;
pub mod welcome;
