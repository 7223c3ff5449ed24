use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParam, Provider},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

mod create;
mod find_by_email;
mod find_by_provider_id;
mod set_provider_id;
