//! Guild audit log domain models.

use chrono::{DateTime, Utc};

use crate::model::guild::{AuditLogDto, PaginatedAuditLogsDto};

#[derive(Debug, Clone, PartialEq)]
pub struct AuditLog {
    pub id: i32,
    pub description: String,
    /// Member who performed the action. Cleared if the member is removed.
    pub member_id: Option<i32>,
    pub guild_id: i32,
    pub created_at: DateTime<Utc>,
}

impl AuditLog {
    pub fn from_entity(entity: entity::audit_log::Model) -> Self {
        Self {
            id: entity.id,
            description: entity.description,
            member_id: entity.member_id,
            guild_id: entity.guild_id,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> AuditLogDto {
        AuditLogDto {
            id: self.id,
            description: self.description,
            member_id: self.member_id,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAuditLogParam {
    pub description: String,
    pub member_id: Option<i32>,
    pub guild_id: i32,
}

/// Page of audit log entries with pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedAuditLogs {
    /// Entries for this page, newest first.
    pub entries: Vec<AuditLog>,
    /// Total number of entries across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedAuditLogs {
    pub fn into_dto(self) -> PaginatedAuditLogsDto {
        PaginatedAuditLogsDto {
            entries: self.entries.into_iter().map(AuditLog::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
