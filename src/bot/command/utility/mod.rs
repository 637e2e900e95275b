//! Utility and informational commands.

pub mod debug;
pub mod help;
pub mod invite;
pub mod ping;
pub mod prefix;
pub mod serverinfo;
pub mod setup;
pub mod uptime;
pub mod userinfo;
