use crate::{data::user::UserRepository, model::user::UpsertUserParam};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::builder::TestBuilder;

mod find_by_discord_id;
mod upsert;
