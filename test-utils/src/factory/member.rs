//! Guild memberships.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Inserts a member of a guild, with optional role links.
///
/// ```rust,ignore
/// use test_utils::factory::member::MemberFactory;
///
/// let member = MemberFactory::new(&db, user.id, guild.id)
///     .username("Arthur")
///     .roles(&[role.id])
///     .build()
///     .await?;
/// ```
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    guild_id: i32,
    username: String,
    role_ids: Vec<i32>,
}

impl<'a> MemberFactory<'a> {
    /// Username `"Member {n}"`, no roles.
    pub fn new(db: &'a DatabaseConnection, user_id: i32, guild_id: i32) -> Self {
        Self {
            db,
            user_id,
            guild_id,
            username: format!("Member {}", next_id()),
            role_ids: Vec::new(),
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the local ids of the roles the member holds.
    pub fn roles(mut self, role_ids: &[i32]) -> Self {
        self.role_ids = role_ids.to_vec();
        self
    }

    /// Inserts the member, then one `member_role` row per role.
    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        let member = entity::member::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            guild_id: ActiveValue::Set(self.guild_id),
            username: ActiveValue::Set(self.username),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        if !self.role_ids.is_empty() {
            let links = self
                .role_ids
                .iter()
                .map(|role_id| entity::member_role::ActiveModel {
                    member_id: ActiveValue::Set(member.id),
                    role_id: ActiveValue::Set(*role_id),
                });

            entity::prelude::MemberRole::insert_many(links)
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(member)
    }
}

/// Creates a member without roles.
pub async fn create_member(
    db: &DatabaseConnection,
    user_id: i32,
    guild_id: i32,
) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db, user_id, guild_id).build().await
}
