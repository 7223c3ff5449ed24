//! Guild role repository for database operations.
//!
//! This module provides the `RoleRepository` for storing the Discord roles of a
//! registered guild and managing which catalog permissions each role grants. The
//! permission set of a role is always replaced as a whole, never patched.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::role::{CreateRoleParam, GuildRole};

/// Repository for guild roles and their role-to-permission links.
pub struct RoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoleRepository<'a, C> {
    /// Creates a new RoleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns the role with the param's Discord id, creating it if missing.
    ///
    /// An existing role is returned unchanged; its name, color and permissions
    /// are not refreshed from the param.
    ///
    /// # Returns
    /// - `Ok(GuildRole)` - The existing or newly created role
    /// - `Err(DbErr)` - Database error during lookup or insert
    pub async fn first_or_create(&self, param: CreateRoleParam) -> Result<GuildRole, DbErr> {
        let existing = entity::prelude::Role::find()
            .filter(entity::role::Column::DiscordId.eq(param.discord_id.to_string()))
            .one(self.db)
            .await?;

        if let Some(entity) = existing {
            return GuildRole::from_entity(entity);
        }

        let entity = entity::role::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id),
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            name: ActiveValue::Set(param.name),
            slug: ActiveValue::Set(param.slug),
            description: ActiveValue::Set(None),
            color: ActiveValue::Set(param.color),
            position: ActiveValue::Set(param.position),
            discord_permissions: ActiveValue::Set(param.permissions.bits() as i64),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        GuildRole::from_entity(entity)
    }

    /// Gets all roles of a guild, highest position first.
    ///
    /// # Returns
    /// - `Ok(Vec<GuildRole>)` - Roles of the guild (empty if none)
    /// - `Err(DbErr)` - Database error or corrupted stored id
    pub async fn get_by_guild(&self, guild_id: i32) -> Result<Vec<GuildRole>, DbErr> {
        entity::prelude::Role::find()
            .filter(entity::role::Column::GuildId.eq(guild_id))
            .order_by_desc(entity::role::Column::Position)
            .order_by_asc(entity::role::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(GuildRole::from_entity)
            .collect()
    }

    /// Gets the catalog permission ids currently granted to a role, ascending.
    pub async fn get_permission_ids(&self, role_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::RolePermission::find()
            .select_only()
            .column(entity::role_permission::Column::PermissionId)
            .filter(entity::role_permission::Column::RoleId.eq(role_id))
            .order_by_asc(entity::role_permission::Column::PermissionId)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Replaces a role's permissions with exactly `permission_ids`.
    ///
    /// # Arguments
    /// - `role_id` - Local role id
    /// - `permission_ids` - The complete new permission set
    ///
    /// # Returns
    /// - `Ok(())` - Permission set replaced
    /// - `Err(DbErr)` - Database error during delete or insert
    pub async fn sync_permissions(
        &self,
        role_id: i32,
        permission_ids: &[i32],
    ) -> Result<(), DbErr> {
        self.detach_permissions(role_id).await?;

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
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Removes every permission from a role.
    pub async fn detach_permissions(&self, role_id: i32) -> Result<(), DbErr> {
        entity::prelude::RolePermission::delete_many()
            .filter(entity::role_permission::Column::RoleId.eq(role_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
