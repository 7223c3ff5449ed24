//! Guild roles and their grants.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Inserts a role mirrored from Discord.
///
/// ```rust,ignore
/// use test_utils::factory::role::RoleFactory;
///
/// let role = RoleFactory::new(&db, guild.id)
///     .discord_id("100")
///     .name("Guild Master")
///     .build()
///     .await?;
/// ```
pub struct RoleFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i32,
    discord_id: String,
    name: String,
    position: i32,
    discord_permissions: i64,
}

impl<'a> RoleFactory<'a> {
    /// Discord id `"{n}"`, name `"Role {n}"`, position 0, no Discord permissions.
    pub fn new(db: &'a DatabaseConnection, guild_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id,
            discord_id: id.to_string(),
            name: format!("Role {}", id),
            position: 0,
            discord_permissions: 0,
        }
    }

    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// Sets the Discord permission bitmask.
    pub fn discord_permissions(mut self, bits: i64) -> Self {
        self.discord_permissions = bits;
        self
    }

    pub async fn build(self) -> Result<entity::role::Model, DbErr> {
        let slug = self.name.to_lowercase().replace(' ', "-");
        entity::role::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            discord_id: ActiveValue::Set(self.discord_id),
            name: ActiveValue::Set(self.name),
            slug: ActiveValue::Set(slug),
            description: ActiveValue::Set(None),
            color: ActiveValue::Set(None),
            position: ActiveValue::Set(self.position),
            discord_permissions: ActiveValue::Set(self.discord_permissions),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Grants catalog permissions to a role directly.
pub async fn grant_permissions(
    db: &DatabaseConnection,
    role_id: i32,
    permission_ids: &[i32],
) -> Result<(), DbErr> {
    if permission_ids.is_empty() {
        return Ok(());
    }

    let links = permission_ids
        .iter()
        .map(|permission_id| entity::role_permission::ActiveModel {
            role_id: ActiveValue::Set(role_id),
            permission_id: ActiveValue::Set(*permission_id),
        });

    entity::prelude::RolePermission::insert_many(links)
        .exec_without_returning(db)
        .await?;

    Ok(())
}
