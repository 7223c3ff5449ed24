use crate::server::{data::audit_log::AuditLogRepository, model::audit_log::CreateAuditLogParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::helpers::create_guild_with_owner};

mod create;
mod get_by_guild_paginated;
