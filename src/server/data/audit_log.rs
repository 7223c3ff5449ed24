//! Guild audit log repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::audit_log::{AuditLog, CreateAuditLogParam, PaginatedAuditLogs};

pub struct AuditLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuditLogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends an entry to a guild's audit log, timestamped now.
    pub async fn create(&self, param: CreateAuditLogParam) -> Result<AuditLog, DbErr> {
        let entity = entity::audit_log::ActiveModel {
            description: ActiveValue::Set(param.description),
            member_id: ActiveValue::Set(param.member_id),
            guild_id: ActiveValue::Set(param.guild_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(AuditLog::from_entity(entity))
    }

    /// Gets a page of a guild's audit log, newest first.
    ///
    /// Entries with equal timestamps are ordered by descending id, so the page
    /// order is stable.
    ///
    /// # Arguments
    /// - `guild_id` - Local guild id
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of entries per page
    ///
    /// # Returns
    /// - `Ok(PaginatedAuditLogs)` - Requested page with pagination metadata
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_guild_paginated(
        &self,
        guild_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedAuditLogs, DbErr> {
        let paginator = entity::prelude::AuditLog::find()
            .filter(entity::audit_log::Column::GuildId.eq(guild_id))
            .order_by_desc(entity::audit_log::Column::CreatedAt)
            .order_by_desc(entity::audit_log::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let total_pages = paginator.num_pages().await?;
        let entries = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(AuditLog::from_entity)
            .collect();

        Ok(PaginatedAuditLogs {
            entries,
            total,
            page,
            per_page,
            total_pages,
        })
    }
}
