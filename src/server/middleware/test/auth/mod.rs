use crate::server::{
    error::{auth::AuthError, guild::GuildError, AppError},
    middleware::{
        auth::{AuthGuard, Capability},
        session::AuthSession,
    },
};
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

mod require_member;
mod require_user;
