//! User domain models and parameters.
//!
//! Provides the domain model for local user accounts, the identity-provider
//! abstraction used to link third-party accounts to them, and the parameter type
//! for creating users from an external profile.

use chrono::{DateTime, Utc};

use crate::model::user::UserDto;

/// Local user account.
///
/// A user may have signed up with a password or through an OAuth provider; the
/// provider id columns record which third-party accounts are linked.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Local user id.
    pub id: i32,
    /// Display name of the user.
    pub username: String,
    /// Email address, unique across users.
    pub email: Option<String>,
    /// Linked Discord account id.
    pub discord_id: Option<String>,
    /// Discord handle at the time the account was created.
    pub discord_username: Option<String>,
    /// Discord avatar URL or hash.
    pub discord_avatar: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            discord_id: self.discord_id,
            discord_username: self.discord_username,
            discord_avatar: self.discord_avatar,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            discord_id: entity.discord_id,
            discord_username: entity.discord_username,
            discord_avatar: entity.discord_avatar,
            created_at: entity.created_at,
        }
    }
}

/// OAuth identity provider a local account can be linked to.
///
/// Each provider owns one id column on the user table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Discord,
}

impl Provider {
    /// Lowercase provider name used in messages.
    pub fn name(self) -> &'static str {
        match self {
            Provider::Discord => "discord",
        }
    }

    /// User table column holding this provider's account id.
    pub fn id_column(self) -> entity::user::Column {
        match self {
            Provider::Discord => entity::user::Column::DiscordId,
        }
    }

    /// The account id of this provider linked to `user`, if any.
    pub fn linked_id(self, user: &User) -> Option<&str> {
        match self {
            Provider::Discord => user.discord_id.as_deref(),
        }
    }
}

/// Identity returned by an OAuth provider after login.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalUser {
    /// Provider account id. Empty when the provider omitted it.
    pub id: String,
    /// Email the provider reported, if the scope allowed it.
    pub email: Option<String>,
    /// Display name.
    pub name: String,
    /// Provider handle.
    pub nickname: Option<String>,
    /// Avatar URL or hash.
    pub avatar: Option<String>,
}

/// Parameters for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub email: Option<String>,
    pub discord_id: Option<String>,
    pub discord_username: Option<String>,
    pub discord_avatar: Option<String>,
}

impl CreateUserParam {
    /// Builds a password-less user from an external profile.
    ///
    /// The profile id is stored in the provider's column.
    pub fn from_external(provider: Provider, external: &ExternalUser) -> Self {
        match provider {
            Provider::Discord => Self {
                username: external.name.clone(),
                email: external.email.clone(),
                discord_id: Some(external.id.clone()),
                discord_username: external.nickname.clone(),
                discord_avatar: external.avatar.clone(),
            },
        }
    }
}
