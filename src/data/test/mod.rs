mod automod_config;
mod command_log;
mod guild_config;
mod mute;
mod user;
mod violation;
mod warning;
mod welcome_config;
