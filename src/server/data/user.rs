//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation, lookups by id, email and provider account id, and linking
//! provider accounts, with conversion between entity models and domain models at the
//! infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter,
};

use crate::server::model::user::{CreateUserParam, Provider, User};

/// Repository providing database operations for user management.
///
/// Generic over the connection so the same queries run against the pool or
/// inside a transaction.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a user.
    ///
    /// # Arguments
    /// - `param` - Profile fields of the new user
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique violations on email or provider id
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(None),
            discord_id: ActiveValue::Set(param.discord_id),
            discord_username: ActiveValue::Set(param.discord_username),
            discord_avatar: ActiveValue::Set(param.discord_avatar),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by local id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds the user whose provider account id equals `external_id`.
    ///
    /// # Arguments
    /// - `provider` - Provider whose id column is searched
    /// - `external_id` - Account id issued by the provider
    ///
    /// # Returns
    /// - `Ok(Some(User))` - A user is linked to that account
    /// - `Ok(None)` - No user is linked to that account
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_provider_id(
        &self,
        provider: Provider,
        external_id: &str,
    ) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(provider.id_column().eq(external_id))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User with that email exists
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Links a provider account to an existing user.
    ///
    /// Writes `external_id` into the provider's id column and returns the updated
    /// user.
    ///
    /// # Returns
    /// - `Ok(User)` - The user with the provider id set
    /// - `Err(DbErr::RecordNotFound)` - No user with `user_id`
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_provider_id(
        &self,
        user_id: i32,
        provider: Provider,
        external_id: &str,
    ) -> Result<User, DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(provider.id_column(), Expr::value(external_id))
            .exec(self.db)
            .await?;

        self.find_by_id(user_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("User {} not found", user_id)))
    }
}
