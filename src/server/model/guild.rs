//! Registered guild domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::guild::GuildDto,
    server::{
        model::{
            member::Member, permission::Permission, role::GuildRole, tier::TierPointers,
            user::User,
        },
        util::parse::{parse_stored_id, split_id_list},
    },
};

/// Discord server registered with the site.
#[derive(Debug, Clone, PartialEq)]
pub struct Guild {
    pub id: i32,
    pub name: String,
    pub slug: String,
    /// Local id of the user who registered the guild.
    pub user_id: i32,
    /// Discord server id.
    pub discord_id: u64,
    pub calendar_link: Option<String>,
    /// Discord role ids whose holders are whitelisted as members, in submitted order.
    pub member_role_ids: Vec<u64>,
    /// Discord role ids assigned to each permission tier.
    pub tiers: TierPointers,
    pub created_at: DateTime<Utc>,
}

impl Guild {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Guild)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - A stored Discord id is not a valid u64
    pub fn from_entity(entity: entity::guild::Model) -> Result<Self, DbErr> {
        let parse_optional = |value: Option<String>| -> Result<Option<u64>, DbErr> {
            value.as_deref().map(parse_stored_id).transpose()
        };

        Ok(Self {
            id: entity.id,
            discord_id: parse_stored_id(&entity.discord_id)?,
            member_role_ids: split_id_list(entity.member_role_ids.as_deref())?,
            tiers: TierPointers {
                guild_master: parse_optional(entity.gm_role_id)?,
                officer: parse_optional(entity.officer_role_id)?,
                raid_leader: parse_optional(entity.raid_leader_role_id)?,
            },
            name: entity.name,
            slug: entity.slug,
            user_id: entity.user_id,
            calendar_link: entity.calendar_link,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> GuildDto {
        let to_string = |id: Option<u64>| id.map(|id| id.to_string());

        GuildDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            discord_id: self.discord_id.to_string(),
            calendar_link: self.calendar_link,
            gm_role_id: to_string(self.tiers.guild_master),
            officer_role_id: to_string(self.tiers.officer),
            raid_leader_role_id: to_string(self.tiers.raid_leader),
            member_role_ids: self
                .member_role_ids
                .iter()
                .map(|id| id.to_string())
                .collect(),
        }
    }
}

/// Parameters for creating a guild at registration.
#[derive(Debug, Clone)]
pub struct CreateGuildParam {
    pub name: String,
    pub slug: String,
    pub user_id: i32,
    pub discord_id: u64,
}

/// Parameters for updating a guild's settings.
///
/// Every field is written; tier pointers set to `None` are cleared.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateGuildParam {
    pub name: String,
    pub slug: String,
    pub calendar_link: Option<String>,
    pub member_role_ids: Vec<u64>,
    pub tiers: TierPointers,
}

/// Guild registration request after form parsing.
#[derive(Debug, Clone)]
pub struct RegisterGuildParam {
    pub name: String,
    /// Discord server id, typed or selected.
    pub discord_id: u64,
}

/// Guild settings request after form parsing.
///
/// Tier ids of `None` ask for the tier to be cleared.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateGuildSettingsParam {
    pub name: String,
    pub calendar_link: Option<String>,
    pub tiers: TierPointers,
    /// Requested whitelist, deduplicated with order preserved.
    pub member_role_ids: Vec<u64>,
}

/// Everything the settings page shows.
#[derive(Debug, Clone)]
pub struct GuildSettings {
    pub guild: Guild,
    /// Guild roles, highest position first.
    pub roles: Vec<GuildRole>,
    pub permissions: Vec<Permission>,
}

/// Resolved access of the current user to a guild.
#[derive(Debug, Clone)]
pub struct GuildAccess {
    pub user: User,
    pub guild: Guild,
    pub member: Member,
}
