//! Discord API data used by guild workflows.
//!
//! Thin projections of the Serenity types returned by Discord's REST API, holding
//! only what registration needs. Keeping the workflows on these types lets them be
//! exercised without a live Discord connection.

use serenity::all::{GuildInfo, Member, PartialGuild, Permissions, Role};

use crate::model::guild::RegistrableGuildDto;

/// Discord server as returned by the bot client.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordGuild {
    pub guild_id: u64,
    pub name: String,
    pub owner_id: u64,
}

impl DiscordGuild {
    pub fn from_serenity(guild: &PartialGuild) -> Self {
        Self {
            guild_id: guild.id.get(),
            name: guild.name.clone(),
            owner_id: guild.owner_id.get(),
        }
    }
}

/// A user's membership in a Discord server.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordMember {
    pub user_id: u64,
    /// Server nickname, falling back to the global display name and then the username.
    pub display_name: String,
    pub role_ids: Vec<u64>,
}

impl DiscordMember {
    pub fn from_serenity(member: &Member) -> Self {
        let display_name = member
            .nick
            .clone()
            .or_else(|| member.user.global_name.clone())
            .unwrap_or_else(|| member.user.name.clone());

        Self {
            user_id: member.user.id.get(),
            display_name,
            role_ids: member.roles.iter().map(|role| role.get()).collect(),
        }
    }
}

/// Role of a Discord server.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordRole {
    pub role_id: u64,
    pub name: String,
    /// RGB color, `None` for Discord's default (zero) color.
    pub color: Option<i32>,
    pub position: i32,
    pub permissions: Permissions,
}

impl DiscordRole {
    pub fn from_serenity(role: &Role) -> Self {
        let color = match role.colour.0 {
            0 => None,
            rgb => Some(rgb as i32),
        };

        Self {
            role_id: role.id.get(),
            name: role.name.clone(),
            color,
            position: i32::from(role.position),
            permissions: role.permissions,
        }
    }
}

/// Entry of the logged-in user's server list.
///
/// `permissions` are the user's effective permissions in that server.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordUserGuild {
    pub guild_id: u64,
    pub name: String,
    pub permissions: Permissions,
}

impl DiscordUserGuild {
    pub fn from_serenity(guild: &GuildInfo) -> Self {
        Self {
            guild_id: guild.id.get(),
            name: guild.name.clone(),
            permissions: guild.permissions,
        }
    }
}

/// Server the user may register, flagged if it already is registered.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrableGuild {
    pub guild: DiscordUserGuild,
    pub registered: bool,
}

impl RegistrableGuild {
    pub fn into_dto(self) -> RegistrableGuildDto {
        RegistrableGuildDto {
            id: self.guild.guild_id.to_string(),
            name: self.guild.name,
            registered: self.registered,
            permissions: self.guild.permissions.bits().to_string(),
        }
    }
}
