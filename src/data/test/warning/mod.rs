use crate::data::warning::WarningRepository;
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory::WarningFactory};

mod count_recent;
mod delete_older_than;
