//! Guild member repository for database operations.
//!
//! Provides the `MemberRepository` for adding users to registered guilds and
//! resolving the app permissions a member holds through their roles.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QuerySelect, RelationTrait,
};

use crate::server::model::member::{CreateMemberParam, Member};

pub struct MemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    /// Creates a new MemberRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a member and links it to its roles.
    ///
    /// # Arguments
    /// - `param` - Member identity and the local ids of its roles
    ///
    /// # Returns
    /// - `Ok(Member)` - The created member
    /// - `Err(DbErr)` - Database error, including the user already being a member
    pub async fn create(&self, param: CreateMemberParam) -> Result<Member, DbErr> {
        let entity = entity::member::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            guild_id: ActiveValue::Set(param.guild_id),
            username: ActiveValue::Set(param.username),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        if !param.role_ids.is_empty() {
            let links = param
                .role_ids
                .iter()
                .map(|role_id| entity::member_role::ActiveModel {
                    member_id: ActiveValue::Set(entity.id),
                    role_id: ActiveValue::Set(*role_id),
                });

            entity::prelude::MemberRole::insert_many(links)
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(Member::from_entity(entity))
    }

    /// Finds a user's membership in a guild.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - The user is a member of the guild
    /// - `Ok(None)` - The user is not a member
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_user_and_guild(
        &self,
        user_id: i32,
        guild_id: i32,
    ) -> Result<Option<Member>, DbErr> {
        let entity = entity::prelude::Member::find()
            .filter(entity::member::Column::UserId.eq(user_id))
            .filter(entity::member::Column::GuildId.eq(guild_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Member::from_entity))
    }

    /// Checks whether any of a member's roles grants the permission `slug`.
    ///
    /// # Arguments
    /// - `member_id` - Local member id
    /// - `slug` - Catalog permission slug, e.g. `edit.guild`
    ///
    /// # Returns
    /// - `Ok(true)` - At least one role of the member grants the permission
    /// - `Ok(false)` - No role grants it
    /// - `Err(DbErr)` - Database error during query
    pub async fn has_permission(&self, member_id: i32, slug: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Permission::find()
            .join(
                JoinType::InnerJoin,
                entity::permission::Relation::RolePermission.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::role_permission::Relation::Role.def(),
            )
            .join(JoinType::InnerJoin, entity::role::Relation::MemberRole.def())
            .filter(entity::member_role::Column::MemberId.eq(member_id))
            .filter(entity::permission::Column::Slug.eq(slug))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
