use crate::server::{data::member::MemberRepository, model::member::CreateMemberParam};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{
        guild::create_guild,
        member::MemberFactory,
        permission::permission_id,
        role::{grant_permissions, RoleFactory},
        user::create_user,
    },
};

mod create;
mod find_by_user_and_guild;
mod has_permission;
