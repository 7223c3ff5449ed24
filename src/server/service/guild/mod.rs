//! Guild registration, settings and audit log workflows.
//!
//! The pure decision logic lives in [`authorize`] and [`reconcile`]; the
//! services here validate input, load what those functions need, and persist
//! their results in one transaction per submission.

pub mod authorize;
pub mod reconcile;
pub mod registration;
pub mod settings;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};
use validator::{ValidationError, ValidationErrors};

use crate::server::{
    data::{audit_log::AuditLogRepository, guild::GuildRepository},
    error::AppError,
    model::audit_log::PaginatedAuditLogs,
    util::slug::slugify,
};

/// Largest audit log page a client may request.
pub const MAX_AUDIT_LOG_PAGE_SIZE: u64 = 100;

/// Service for operations on an already registered guild.
pub struct GuildService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of the guild's audit log, newest first.
    ///
    /// `per_page` is clamped to `1..=MAX_AUDIT_LOG_PAGE_SIZE`.
    ///
    /// # Arguments
    /// - `guild_id` - Local guild id
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Requested page size
    pub async fn audit_log(
        &self,
        guild_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedAuditLogs, AppError> {
        let per_page = per_page.clamp(1, MAX_AUDIT_LOG_PAGE_SIZE);

        let entries = AuditLogRepository::new(self.db)
            .get_by_guild_paginated(guild_id, page, per_page)
            .await?;

        Ok(entries)
    }
}

/// Records a field error with a user-facing message.
fn add_field_error(
    errors: &mut ValidationErrors,
    field: &'static str,
    code: &'static str,
    message: &'static str,
) {
    errors.add(field, ValidationError::new(code).with_message(message.into()));
}

/// Checks a trimmed guild name: present, sluggable and not used by another guild.
///
/// `except_id` is the guild being edited, whose own name and slug don't count.
async fn check_guild_name<C: ConnectionTrait>(
    guild_repo: &GuildRepository<'_, C>,
    name: &str,
    except_id: Option<i32>,
    errors: &mut ValidationErrors,
) -> Result<(), DbErr> {
    if name.is_empty() {
        if !errors.field_errors().contains_key("name") {
            add_field_error(errors, "name", "required", "The name field is required.");
        }
        return Ok(());
    }

    let slug = slugify(name);
    if slug.is_empty() {
        add_field_error(
            errors,
            "name",
            "slug",
            "Name must contain at least one letter or number.",
        );
    } else if guild_repo.name_taken(name, except_id).await?
        || guild_repo.slug_taken(&slug, except_id).await?
    {
        add_field_error(errors, "name", "unique", "That name is already taken.");
    }

    Ok(())
}
