//! Access checks for request handlers.
//!
//! Handlers build an [`AuthGuard`] from the request's session and ask it for the
//! user or guild membership they need; the guard turns missing logins,
//! unknown guilds and missing capabilities into the matching errors.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{guild::GuildRepository, member::MemberRepository, user::UserRepository},
    error::{auth::AuthError, guild::GuildError, AppError},
    middleware::session::AuthSession,
    model::{guild::GuildAccess, user::User},
};

/// App-level capability from the permission catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    EditGuild,
}

impl Capability {
    /// Catalog slug of the capability.
    pub fn slug(self) -> &'static str {
        match self {
            Capability::EditGuild => "edit.guild",
        }
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the logged-in user.
    ///
    /// # Returns
    /// - `Ok(User)` - The logged-in user
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - The session's user no longer exists
    pub async fn require_user(&self) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }

    /// Resolves the logged-in user's membership in the guild `slug`.
    ///
    /// The user who registered the guild holds every capability. Anyone else
    /// needs each of `capabilities` through their roles.
    ///
    /// # Returns
    /// - `Ok(GuildAccess)` - User, guild and membership
    /// - `Err(GuildError::NotFound)` - No guild with that slug
    /// - `Err(GuildError::PermissionDenied)` - Not a member, or a capability is missing
    pub async fn require_member(
        &self,
        slug: &str,
        capabilities: &[Capability],
    ) -> Result<GuildAccess, AppError> {
        let user = self.require_user().await?;

        let Some(guild) = GuildRepository::new(self.db).find_by_slug(slug).await? else {
            return Err(GuildError::NotFound(slug.to_string()).into());
        };

        let member_repo = MemberRepository::new(self.db);
        let Some(member) = member_repo.find_by_user_and_guild(user.id, guild.id).await? else {
            return Err(GuildError::PermissionDenied(
                "You are not a member of this guild.".to_string(),
            )
            .into());
        };

        if guild.user_id != user.id {
            for capability in capabilities {
                if !member_repo
                    .has_permission(member.id, capability.slug())
                    .await?
                {
                    tracing::debug!(
                        "Member {} lacks {} in guild {}",
                        member.id,
                        capability.slug(),
                        guild.slug
                    );
                    return Err(GuildError::PermissionDenied(
                        "You do not have permission to do that.".to_string(),
                    )
                    .into());
                }
            }
        }

        Ok(GuildAccess {
            user,
            guild,
            member,
        })
    }
}
