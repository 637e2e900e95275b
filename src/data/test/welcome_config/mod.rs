use crate::{data::welcome_config::WelcomeConfigRepository, model::welcome::UpdateWelcomeParams};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod get_or_create;
mod update;
