//! Registered guilds.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a registered guild. Tier and whitelist columns start empty.
///
/// ```rust,ignore
/// use test_utils::factory::guild::GuildFactory;
///
/// let guild = GuildFactory::new(&db, user.id)
///     .name("Knights")
///     .gm_role_id("100")
///     .build()
///     .await?;
/// ```
pub struct GuildFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
    slug: String,
    discord_id: String,
    member_role_ids: Option<String>,
    gm_role_id: Option<String>,
    officer_role_id: Option<String>,
    raid_leader_role_id: Option<String>,
}

impl<'a> GuildFactory<'a> {
    /// Name `"Guild {n}"`, slug `"guild-{n}"`, Discord id `"{n}"`.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            name: format!("Guild {}", id),
            slug: format!("guild-{}", id),
            discord_id: id.to_string(),
            member_role_ids: None,
            gm_role_id: None,
            officer_role_id: None,
            raid_leader_role_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    /// Sets the comma-joined whitelisted member role ids.
    pub fn member_role_ids(mut self, member_role_ids: impl Into<String>) -> Self {
        self.member_role_ids = Some(member_role_ids.into());
        self
    }

    pub fn gm_role_id(mut self, role_id: impl Into<String>) -> Self {
        self.gm_role_id = Some(role_id.into());
        self
    }

    pub fn officer_role_id(mut self, role_id: impl Into<String>) -> Self {
        self.officer_role_id = Some(role_id.into());
        self
    }

    pub fn raid_leader_role_id(mut self, role_id: impl Into<String>) -> Self {
        self.raid_leader_role_id = Some(role_id.into());
        self
    }

    pub async fn build(self) -> Result<entity::guild::Model, DbErr> {
        entity::guild::ActiveModel {
            name: ActiveValue::Set(self.name),
            slug: ActiveValue::Set(self.slug),
            user_id: ActiveValue::Set(self.user_id),
            discord_id: ActiveValue::Set(self.discord_id),
            calendar_link: ActiveValue::Set(None),
            member_role_ids: ActiveValue::Set(self.member_role_ids),
            gm_role_id: ActiveValue::Set(self.gm_role_id),
            officer_role_id: ActiveValue::Set(self.officer_role_id),
            raid_leader_role_id: ActiveValue::Set(self.raid_leader_role_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild with default values registered by `user_id`.
pub async fn create_guild(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::guild::Model, DbErr> {
    GuildFactory::new(db, user_id).build().await
}
