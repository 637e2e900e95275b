//! Business logic layer.
//!
//! Services orchestrate repositories and external effects. The automod and
//! music services keep their decision logic pure so it can be tested without
//! a Discord connection; the moderation service owns the Discord side effects.

pub mod auth;
pub mod automod;
pub mod moderation;
pub mod music;
pub mod stats;
pub mod welcome;

#[cfg(test)]
mod test;
