//! Domain models and operation parameter types.
//!
//! Each module covers one concern: domain structs converted from entities at the
//! repository boundary, parameter types for create/update operations, and the
//! `api` module holding the DTOs exchanged with the dashboard.

pub mod api;
pub mod automod;
pub mod discord;
pub mod guild_config;
pub mod music;
pub mod user;
pub mod welcome;
