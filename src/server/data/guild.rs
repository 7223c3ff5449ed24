//! Registered guild repository for database operations.
//!
//! Provides the `GuildRepository` for creating, updating and querying registered
//! guilds, including the uniqueness lookups used by registration and settings
//! validation.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QuerySelect,
};

use crate::server::{
    model::guild::{CreateGuildParam, Guild, UpdateGuildParam},
    util::parse::{join_id_list, parse_stored_id},
};

pub struct GuildRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GuildRepository<'a, C> {
    /// Creates a new GuildRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a guild with no tiers, whitelist or calendar link configured.
    ///
    /// # Returns
    /// - `Ok(Guild)` - The created guild
    /// - `Err(DbErr)` - Database error, including unique violations on name, slug or Discord id
    pub async fn create(&self, param: CreateGuildParam) -> Result<Guild, DbErr> {
        let entity = entity::guild::ActiveModel {
            name: ActiveValue::Set(param.name),
            slug: ActiveValue::Set(param.slug),
            user_id: ActiveValue::Set(param.user_id),
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            calendar_link: ActiveValue::Set(None),
            member_role_ids: ActiveValue::Set(None),
            gm_role_id: ActiveValue::Set(None),
            officer_role_id: ActiveValue::Set(None),
            raid_leader_role_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Guild::from_entity(entity)
    }

    /// Writes a guild's settings.
    ///
    /// All settings columns are overwritten, so cleared tiers are stored as NULL.
    ///
    /// # Returns
    /// - `Ok(Guild)` - The updated guild
    /// - `Err(DbErr::RecordNotUpdated)` - No guild with `id`
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: UpdateGuildParam) -> Result<Guild, DbErr> {
        let to_string = |id: Option<u64>| id.map(|id| id.to_string());

        let entity = entity::guild::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(param.name),
            slug: ActiveValue::Set(param.slug),
            calendar_link: ActiveValue::Set(param.calendar_link),
            member_role_ids: ActiveValue::Set(join_id_list(&param.member_role_ids)),
            gm_role_id: ActiveValue::Set(to_string(param.tiers.guild_master)),
            officer_role_id: ActiveValue::Set(to_string(param.tiers.officer)),
            raid_leader_role_id: ActiveValue::Set(to_string(param.tiers.raid_leader)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Guild::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Guild>, DbErr> {
        entity::prelude::Guild::find_by_id(id)
            .one(self.db)
            .await?
            .map(Guild::from_entity)
            .transpose()
    }

    /// Finds a guild by its URL slug.
    ///
    /// # Returns
    /// - `Ok(Some(Guild))` - Guild found
    /// - `Ok(None)` - No guild with that slug
    /// - `Err(DbErr)` - Database error or corrupted stored id
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Guild>, DbErr> {
        entity::prelude::Guild::find()
            .filter(entity::guild::Column::Slug.eq(slug))
            .one(self.db)
            .await?
            .map(Guild::from_entity)
            .transpose()
    }

    /// Returns which of the given Discord server ids are already registered.
    ///
    /// # Arguments
    /// - `discord_ids` - Discord server ids to check
    ///
    /// # Returns
    /// - `Ok(Vec<u64>)` - The registered subset, in no particular order
    /// - `Err(DbErr)` - Database error or corrupted stored id
    pub async fn find_registered_discord_ids(
        &self,
        discord_ids: &[u64],
    ) -> Result<Vec<u64>, DbErr> {
        if discord_ids.is_empty() {
            return Ok(Vec::new());
        }

        let stored: Vec<String> = entity::prelude::Guild::find()
            .select_only()
            .column(entity::guild::Column::DiscordId)
            .filter(
                entity::guild::Column::DiscordId
                    .is_in(discord_ids.iter().map(|id| id.to_string())),
            )
            .into_tuple()
            .all(self.db)
            .await?;

        stored.iter().map(|id| parse_stored_id(id)).collect()
    }

    /// Checks whether another guild already uses `name`.
    ///
    /// # Arguments
    /// - `name` - Guild name to check
    /// - `except_id` - Guild to ignore, used when a guild keeps its own name
    pub async fn name_taken(&self, name: &str, except_id: Option<i32>) -> Result<bool, DbErr> {
        self.column_taken(entity::guild::Column::Name, name, except_id)
            .await
    }

    /// Checks whether another guild already uses `slug`.
    ///
    /// # Arguments
    /// - `slug` - Slug to check
    /// - `except_id` - Guild to ignore, used when a guild keeps its own slug
    pub async fn slug_taken(&self, slug: &str, except_id: Option<i32>) -> Result<bool, DbErr> {
        self.column_taken(entity::guild::Column::Slug, slug, except_id)
            .await
    }

    /// Checks whether a Discord server is already registered.
    pub async fn discord_id_taken(&self, discord_id: u64) -> Result<bool, DbErr> {
        self.column_taken(
            entity::guild::Column::DiscordId,
            &discord_id.to_string(),
            None,
        )
        .await
    }

    async fn column_taken(
        &self,
        column: entity::guild::Column,
        value: &str,
        except_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Guild::find().filter(column.eq(value));

        if let Some(id) = except_id {
            query = query.filter(entity::guild::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }
}
