//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with a `Factory`
//! struct for customization and/or a `create_*` convenience function for quick default
//! creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let config = factory::guild_config::create_config(&db, "123456789").await?;
//!
//!     // Customize through the builder
//!     let automod = factory::automod_config::AutomodConfigFactory::new(&db)
//!         .guild_id("123456789")
//!         .enabled(true)
//!         .banned_words(&["badword"])
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod automod_config;
pub mod command_log;
pub mod guild_config;
pub mod helpers;
pub mod mute;
pub mod user;
pub mod violation;
pub mod warning;
pub mod welcome_config;

// Re-export commonly used factory functions for concise usage
pub use automod_config::AutomodConfigFactory;
pub use command_log::{create_command_log, create_command_log_at};
pub use guild_config::create_config;
pub use mute::create_mute;
pub use user::UserFactory;
pub use violation::create_violation;
pub use warning::WarningFactory;
pub use welcome_config::create_welcome_config;
