//! Music queue commands.
//!
//! These commands manage queue state only; audio transport is an external
//! concern.

pub mod nowplaying;
pub mod play;
pub mod queue;
pub mod skip;
pub mod stop;
