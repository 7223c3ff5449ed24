use crate::server::{data::role::RoleRepository, model::role::CreateRoleParam};
use sea_orm::DbErr;
use serenity::all::Permissions;
use test_utils::{
    builder::TestBuilder,
    factory::{
        guild::create_guild,
        permission::permission_ids_for_notes,
        role::{grant_permissions, RoleFactory},
        user::create_user,
    },
};

mod detach_permissions;
mod first_or_create;
mod get_by_guild;
mod sync_permissions;
