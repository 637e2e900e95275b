use crate::data::command_log::CommandLogRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_since;
mod create;
mod get_recent;
