pub mod automod;
pub mod music;
pub mod welcome;
