use crate::{
    data::automod_config::AutomodConfigRepository, error::AppError,
    model::automod::UpdateAutomodParams,
};
use test_utils::{builder::TestBuilder, factory};

mod get_or_create;
mod update;
