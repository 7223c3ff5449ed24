//! Guild role domain models.
//!
//! Roles mirror the Discord roles of a registered guild, including the Discord
//! permission bitmask captured at registration time.

use sea_orm::DbErr;
use serenity::all::Permissions;

use crate::{
    model::guild::RoleDto,
    server::{
        model::discord::DiscordRole,
        util::{parse::parse_stored_id, slug::slugify},
    },
};

/// Discord role stored for a registered guild.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildRole {
    /// Local role id.
    pub id: i32,
    /// Local id of the owning guild.
    pub guild_id: i32,
    /// Discord role id.
    pub discord_id: u64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    /// RGB color, `None` when the role uses Discord's default color.
    pub color: Option<i32>,
    /// Position in the guild's role hierarchy (higher = more important).
    pub position: i32,
    /// Discord permission bitmask.
    pub permissions: Permissions,
}

impl GuildRole {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(GuildRole)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored discord_id is not a valid u64
    pub fn from_entity(entity: entity::role::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            guild_id: entity.guild_id,
            discord_id: parse_stored_id(&entity.discord_id)?,
            name: entity.name,
            slug: entity.slug,
            description: entity.description,
            color: entity.color,
            position: entity.position,
            permissions: Permissions::from_bits_truncate(entity.discord_permissions as u64),
        })
    }

    pub fn into_dto(self) -> RoleDto {
        RoleDto {
            id: self.id,
            discord_id: self.discord_id.to_string(),
            name: self.name,
            slug: self.slug,
            description: self.description,
            color: self.color,
            position: self.position,
            discord_permissions: self.permissions.bits().to_string(),
        }
    }
}

/// Parameters for storing a Discord role under a guild.
#[derive(Debug, Clone)]
pub struct CreateRoleParam {
    pub guild_id: i32,
    pub discord_id: u64,
    pub name: String,
    pub slug: String,
    pub color: Option<i32>,
    pub position: i32,
    pub permissions: Permissions,
}

impl CreateRoleParam {
    pub fn from_discord(guild_id: i32, role: &DiscordRole) -> Self {
        Self {
            guild_id,
            discord_id: role.role_id,
            name: role.name.clone(),
            slug: slugify(&role.name),
            color: role.color,
            position: role.position,
            permissions: role.permissions,
        }
    }
}
