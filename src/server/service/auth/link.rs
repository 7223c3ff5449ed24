//! Linking OAuth identities to local accounts.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, ExternalUser, Provider, User},
};

/// How an external identity relates to the local accounts.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountLink {
    /// A user was already linked to the provider account.
    Existing(User),
    /// A user with the same email was found and has just been linked.
    Linked(User),
    /// No local account matches; the caller decides whether to create one.
    Unlinked,
}

/// Resolves provider identities to local users.
///
/// Lookup is by provider id first, then by email. An email match whose
/// provider id is unset gets linked; one linked to a different provider
/// account is a conflict and nothing is written.
pub struct AccountLinker<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountLinker<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the local account for `external`, linking it by email if possible.
    ///
    /// Writes at most once, when an email match gets linked.
    ///
    /// # Returns
    /// - `Ok(AccountLink)` - Existing, newly linked, or no matching account
    /// - `Err(AuthError::MissingExternalId)` - `external` has no id; nothing was looked up
    /// - `Err(AuthError::AccountConflict)` - The email belongs to another account of this provider
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn find_or_link(
        &self,
        external: &ExternalUser,
        provider: Provider,
    ) -> Result<AccountLink, AppError> {
        if external.id.trim().is_empty() {
            return Err(AuthError::MissingExternalId.into());
        }

        let user_repo = UserRepository::new(self.db);

        if let Some(user) = user_repo.find_by_provider_id(provider, &external.id).await? {
            return Ok(AccountLink::Existing(user));
        }

        let Some(email) = external.email.as_deref().filter(|email| !email.is_empty()) else {
            return Ok(AccountLink::Unlinked);
        };

        let Some(user) = user_repo.find_by_email(email).await? else {
            return Ok(AccountLink::Unlinked);
        };

        match provider.linked_id(&user) {
            None => {
                let linked = user_repo
                    .set_provider_id(user.id, provider, &external.id)
                    .await?;

                tracing::info!(
                    "Linked {} account {} to user {}",
                    provider.name(),
                    external.id,
                    linked.id
                );

                Ok(AccountLink::Linked(linked))
            }
            Some(linked_id) if linked_id == external.id => Ok(AccountLink::Existing(user)),
            Some(_) => Err(AuthError::AccountConflict {
                email: email.to_string(),
                provider: provider.name(),
            }
            .into()),
        }
    }

    /// Resolves `external` to a local user, creating a password-less one if none matches.
    ///
    /// # Returns
    /// - `Ok(User)` - The existing, linked or created user
    /// - `Err(..)` - See [`AccountLinker::find_or_link`]
    pub async fn link_or_create(
        &self,
        external: &ExternalUser,
        provider: Provider,
    ) -> Result<User, AppError> {
        match self.find_or_link(external, provider).await? {
            AccountLink::Existing(user) | AccountLink::Linked(user) => Ok(user),
            AccountLink::Unlinked => {
                let user = UserRepository::new(self.db)
                    .create(CreateUserParam::from_external(provider, external))
                    .await?;

                tracing::info!(
                    "Created user {} for {} account {}",
                    user.id,
                    provider.name(),
                    external.id
                );

                Ok(user)
            }
        }
    }
}
