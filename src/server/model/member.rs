//! Guild member domain models.

use chrono::{DateTime, Utc};

use crate::model::guild::MemberDto;

/// A user's presence in a registered guild.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: i32,
    pub user_id: i32,
    pub guild_id: i32,
    /// Display name in the guild, taken from the member's Discord nickname.
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl Member {
    pub fn from_entity(entity: entity::member::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            guild_id: entity.guild_id,
            username: entity.username,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            id: self.id,
            username: self.username,
        }
    }
}

/// Parameters for adding a member to a guild.
#[derive(Debug, Clone)]
pub struct CreateMemberParam {
    pub user_id: i32,
    pub guild_id: i32,
    pub username: String,
    /// Local ids of the roles the member holds.
    pub role_ids: Vec<i32>,
}
