use crate::server::{
    data::guild::GuildRepository,
    model::{
        guild::{CreateGuildParam, UpdateGuildParam},
        tier::TierPointers,
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{guild::GuildFactory, user::create_user},
};

mod create;
mod find_by_slug;
mod find_registered_discord_ids;
mod taken;
mod update;
