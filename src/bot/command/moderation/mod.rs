//! Moderation commands.

pub mod ban;
pub mod clear;
pub mod kick;
pub mod lockdown;
pub mod mute;
pub mod nuke;
pub mod slowmode;
pub mod unlock;
pub mod unmute;
