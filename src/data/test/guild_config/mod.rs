use crate::{
    data::guild_config::GuildConfigRepository,
    model::guild_config::{ConfigUpdate, FeatureName},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod apply_update;
mod get_or_create;
mod increment_ticket_count;
