use crate::data::mute::MuteRepository;
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_expired;
mod remove;
mod upsert;
