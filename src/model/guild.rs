use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A Discord server the user administers, as offered on the registration page.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct RegistrableGuildDto {
    pub id: String,
    pub name: String,
    /// Whether this Discord server is already registered on the site.
    pub registered: bool,
    pub permissions: String,
}

/// Guild registration form.
///
/// The Discord server id may be typed into `discord_id` or picked from the
/// list of administered servers into `discord_id_select`; a typed id wins.
#[derive(Serialize, Deserialize, Clone, Debug, Validate, ToSchema)]
pub struct RegisterGuildDto {
    #[validate(length(min = 1, max = 36, message = "Name must be 1-36 characters"))]
    pub name: String,
    #[validate(length(max = 255, message = "Discord server id must be at most 255 characters"))]
    #[serde(default)]
    pub discord_id: Option<String>,
    #[validate(length(max = 255, message = "Discord server id must be at most 255 characters"))]
    #[serde(default)]
    pub discord_id_select: Option<String>,
    #[validate(range(min = 1, message = "Add the bot to your Discord server first"))]
    #[serde(default)]
    pub bot_added: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GuildDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub discord_id: String,
    pub calendar_link: Option<String>,
    pub gm_role_id: Option<String>,
    pub officer_role_id: Option<String>,
    pub raid_leader_role_id: Option<String>,
    pub member_role_ids: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct RoleDto {
    pub id: i32,
    pub discord_id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub color: Option<i32>,
    pub position: i32,
    /// Discord permission bitmask.
    pub discord_permissions: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PermissionDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub role_note: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MemberDto {
    pub id: i32,
    pub username: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GuildHomeDto {
    pub guild: GuildDto,
    pub member: MemberDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GuildSettingsDto {
    pub guild: GuildDto,
    pub roles: Vec<RoleDto>,
    pub permissions: Vec<PermissionDto>,
}

/// Guild settings form.
///
/// Role ids are Discord role ids. An empty or missing tier role id clears
/// that tier.
#[derive(Serialize, Deserialize, Clone, Debug, Validate, ToSchema)]
pub struct UpdateGuildSettingsDto {
    #[validate(length(min = 1, max = 36, message = "Name must be 1-36 characters"))]
    pub name: String,
    #[validate(length(max = 255, message = "Calendar link must be at most 255 characters"))]
    #[serde(default)]
    pub calendar_link: Option<String>,
    #[serde(default)]
    pub gm_role_id: Option<String>,
    #[serde(default)]
    pub officer_role_id: Option<String>,
    #[serde(default)]
    pub raid_leader_role_id: Option<String>,
    #[serde(default)]
    pub member_roles: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GuildSettingsUpdatedDto {
    pub status: String,
    pub guild: GuildDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AuditLogDto {
    pub id: i32,
    pub description: String,
    pub member_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaginatedAuditLogsDto {
    pub entries: Vec<AuditLogDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
